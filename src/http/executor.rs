use futures_util::StreamExt;
use reqwest::{Client, Request, Response, StatusCode, header::RANGE};
use tokio::time::Instant;

use crate::error::RequestError;
use crate::metrics::AttemptMeasurement;
use crate::plan::RangePlan;
use crate::sinks::{ByteSink, SinkMode};

use super::TargetUrl;

/// Identifies one attempt of one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptContext {
    pub worker_id: usize,
    pub pass: u64,
    /// 1-based.
    pub attempt: u64,
    pub plan: RangePlan,
}

/// Issues range requests against the target and streams bodies into sinks.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RangeRequester {
    client: Client,
    target: TargetUrl,
    sink_mode: SinkMode,
}

impl RangeRequester {
    #[must_use]
    pub const fn new(client: Client, target: TargetUrl, sink_mode: SinkMode) -> Self {
        Self {
            client,
            target,
            sink_mode,
        }
    }

    #[must_use]
    pub fn url_for(&self, plan: &RangePlan) -> String {
        self.target.for_file(plan.file_size_mib())
    }

    /// Performs one GET for `context.plan` and measures it.
    ///
    /// The body is never buffered: each chunk goes straight into a sink
    /// opened for this attempt once the status has been accepted.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or sent, the status
    /// is neither 200 nor 206, the body stream breaks, or the sink fails.
    pub async fn execute(
        &self,
        context: &AttemptContext,
    ) -> Result<AttemptMeasurement, RequestError> {
        let url = self.url_for(&context.plan);
        let request = build_request(&self.client, &url, &context.plan)?;

        let sent_at = Instant::now();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| RequestError::Transport { source: err })?;
        let headers_at = Instant::now();

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::PARTIAL_CONTENT {
            return Err(RequestError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let mut sink = self
            .sink_mode
            .open(context.worker_id, context.pass, &context.plan)
            .await?;
        let body_started_at = Instant::now();
        stream_body(response, sink.as_mut()).await?;
        let finished_at = Instant::now();
        sink.finish().await?;

        Ok(AttemptMeasurement {
            sent_at,
            headers_at,
            body_started_at,
            finished_at,
            sink: *sink.state(),
        })
    }
}

pub(super) fn build_request(
    client: &Client,
    url: &str,
    plan: &RangePlan,
) -> Result<Request, RequestError> {
    let mut builder = client.get(url);
    if let Some(range) = plan.range_header() {
        builder = builder.header(RANGE, range);
    }
    builder
        .build()
        .map_err(|err| RequestError::BuildRequest { source: err })
}

async fn stream_body(response: Response, sink: &mut dyn ByteSink) -> Result<(), RequestError> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(|err| RequestError::Stream { source: err })?;
        sink.consume(&bytes).await?;
    }
    Ok(())
}
