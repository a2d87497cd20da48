use std::time::Duration;

use tokio::time::Instant;

use crate::http::AttemptContext;
use crate::sinks::SinkState;

const NANOS_PER_SEC: u128 = 1_000_000_000;
const BYTES_PER_KIB: u128 = 1024;

/// Raw timestamps of one successful attempt.
#[derive(Debug, Clone, Copy)]
pub struct AttemptMeasurement {
    pub sent_at: Instant,
    pub headers_at: Instant,
    /// Sink opened, body not yet read. Sink setup falls between
    /// `headers_at` and this instant.
    pub body_started_at: Instant,
    pub finished_at: Instant,
    pub sink: SinkState,
}

/// One completed attempt, ready to be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRecord {
    pub worker_id: usize,
    pub pass: u64,
    pub attempt: u64,
    pub url: String,
    /// `Range` header value, empty for whole-file requests.
    pub range: String,
    pub file_size_bytes: u64,
    pub block_size_bytes: u64,
    pub bytes_transferred: u64,
    /// Send to response headers.
    pub request_latency: Duration,
    /// Send to first body byte; zero for an empty body.
    pub first_byte_latency: Duration,
    pub max_stall: Duration,
    /// Time spent reading the body, excluding sink setup.
    pub elapsed_since_headers: Duration,
    pub total_duration: Duration,
    pub throughput_kib_s_x100: u64,
}

impl MetricsRecord {
    #[must_use]
    pub fn from_measurement(
        context: &AttemptContext,
        url: &str,
        measurement: &AttemptMeasurement,
    ) -> Self {
        let sent_at = measurement.sent_at;
        let first_byte_latency = measurement
            .sink
            .first_byte_at()
            .map_or(Duration::ZERO, |at| at.saturating_duration_since(sent_at));
        let elapsed_since_headers = measurement
            .finished_at
            .saturating_duration_since(measurement.body_started_at);
        let bytes_transferred = measurement.sink.total_bytes();

        Self {
            worker_id: context.worker_id,
            pass: context.pass,
            attempt: context.attempt,
            url: url.to_owned(),
            range: context.plan.range_header().unwrap_or_default(),
            file_size_bytes: context.plan.file_size_bytes,
            block_size_bytes: context.plan.block_size_bytes,
            bytes_transferred,
            request_latency: measurement.headers_at.saturating_duration_since(sent_at),
            first_byte_latency,
            max_stall: measurement.sink.max_stall(),
            elapsed_since_headers,
            total_duration: measurement.finished_at.saturating_duration_since(sent_at),
            throughput_kib_s_x100: throughput_kib_s_x100(bytes_transferred, elapsed_since_headers),
        }
    }
}

/// KiB/s scaled by 100; zero when no time elapsed.
pub(super) fn throughput_kib_s_x100(bytes: u64, elapsed: Duration) -> u64 {
    let scaled = u128::from(bytes)
        .saturating_mul(100)
        .saturating_mul(NANOS_PER_SEC)
        .checked_div(elapsed.as_nanos())
        .unwrap_or(0)
        / BYTES_PER_KIB;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
