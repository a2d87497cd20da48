use tracing::{error, info, warn};

use crate::error::RequestError;
use crate::http::AttemptContext;

use super::format::{format_millis, format_x100};
use super::types::MetricsRecord;

/// Logs one completed attempt.
pub fn report_success(record: &MetricsRecord) {
    info!(
        worker = record.worker_id,
        pass = record.pass,
        attempt = record.attempt,
        url = %record.url,
        range = %record.range,
        file_size_bytes = record.file_size_bytes,
        block_size_bytes = record.block_size_bytes,
        write_size = record.bytes_transferred,
        request_time_ms = %format_millis(record.request_latency),
        first_byte_arrival_ms = %format_millis(record.first_byte_latency),
        max_wait_ms = %format_millis(record.max_stall),
        time_used_ms = %format_millis(record.elapsed_since_headers),
        total_time_ms = %format_millis(record.total_duration),
        average_speed = %format!("{} KiB/s", format_x100(record.throughput_kib_s_x100)),
        "Done"
    );
}

/// Logs one failed attempt with the request it belonged to.
pub fn report_failure(context: &AttemptContext, url: &str, err: &RequestError) {
    let range = context.plan.range_header().unwrap_or_default();
    match err.status_code() {
        Some(status_code) => error!(
            worker = context.worker_id,
            pass = context.pass,
            attempt = context.attempt,
            url = %url,
            range = %range,
            status_code,
            error = %err,
            "Request failed"
        ),
        None => error!(
            worker = context.worker_id,
            pass = context.pass,
            attempt = context.attempt,
            url = %url,
            range = %range,
            timed_out = err.is_timeout(),
            error = %err,
            "Attempt failed"
        ),
    }
}

/// Logs a job whose attempt budget ran out.
pub fn report_abandoned(context: &AttemptContext, url: &str) {
    warn!(
        worker = context.worker_id,
        pass = context.pass,
        attempts = context.attempt,
        url = %url,
        range = %context.plan.range_header().unwrap_or_default(),
        "Giving up on job"
    );
}
