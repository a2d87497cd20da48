use tracing::debug;

use crate::http::{AttemptContext, RangeRequester};
use crate::metrics::{MetricsRecord, report_abandoned, report_failure, report_success};
use crate::work::{Job, WorkSource};

/// Completion signal a worker sends once its source is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub jobs_completed: u64,
    pub jobs_abandoned: u64,
    pub failed_attempts: u64,
}

impl WorkerReport {
    const fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            jobs_completed: 0,
            jobs_abandoned: 0,
            failed_attempts: 0,
        }
    }
}

/// Runs jobs from `source` one after another until it is exhausted.
///
/// Each job gets up to `max_attempts` immediate attempts; a job whose
/// attempts all fail is abandoned and the worker moves on. Failures never
/// stop the worker. Abandonment is logged separately only when more than one
/// attempt was allowed.
pub async fn run_worker<S>(
    worker_id: usize,
    source: &mut S,
    requester: &RangeRequester,
    max_attempts: u64,
) -> WorkerReport
where
    S: WorkSource + ?Sized,
{
    debug!(worker = worker_id, max_attempts, "Worker started");
    let mut report = WorkerReport::new(worker_id);
    while let Some(job) = source.next_job().await {
        run_job(&mut report, job, requester, max_attempts.max(1)).await;
    }
    debug!(
        worker = worker_id,
        completed = report.jobs_completed,
        abandoned = report.jobs_abandoned,
        failed_attempts = report.failed_attempts,
        "Worker exhausted its jobs"
    );
    report
}

async fn run_job(
    report: &mut WorkerReport,
    job: Job,
    requester: &RangeRequester,
    max_attempts: u64,
) {
    let url = requester.url_for(&job.plan);
    let mut context = AttemptContext {
        worker_id: report.worker_id,
        pass: job.pass,
        attempt: 1,
        plan: job.plan,
    };
    loop {
        match requester.execute(&context).await {
            Ok(measurement) => {
                report_success(&MetricsRecord::from_measurement(&context, &url, &measurement));
                report.jobs_completed = report.jobs_completed.saturating_add(1);
                return;
            }
            Err(err) => {
                report_failure(&context, &url, &err);
                report.failed_attempts = report.failed_attempts.saturating_add(1);
            }
        }
        if context.attempt >= max_attempts {
            // A single-attempt budget already logged its only failure.
            if max_attempts > 1 {
                report_abandoned(&context, &url);
            }
            report.jobs_abandoned = report.jobs_abandoned.saturating_add(1);
            return;
        }
        context.attempt = context.attempt.saturating_add(1);
    }
}
