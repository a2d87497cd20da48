use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::{Config, WorkMode};
use crate::http::RangeRequester;
use crate::sinks::SinkMode;
use crate::work::{
    EnumeratedSource, JobDescriptor, RandomizedSource, SharedJobReceiver, WorkSource, job_queue,
    produce_descriptors,
};

use super::worker::{WorkerReport, run_worker};

/// Reports collected by the completion barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub workers_started: usize,
    pub reports: Vec<WorkerReport>,
    /// Descriptors queued in enumerated mode.
    pub jobs_queued: Option<u64>,
}

impl RunOutcome {
    /// Every started worker signalled completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.reports.len() == self.workers_started
    }
}

/// Starts one worker per configured slot and waits for all of them.
///
/// In enumerated mode the coordinator also feeds the shared job queue,
/// closing it once every file size has been queued.
pub async fn run_coordinator(config: &Config, client: Client) -> RunOutcome {
    let workers = config.workers.get();
    let requester = RangeRequester::new(
        client,
        config.target.clone(),
        SinkMode::from_data_dir(config.data_dir.clone()),
    );
    let max_attempts = config.mode.max_attempts();
    let feed = match config.mode {
        WorkMode::Enumerated { .. } => {
            let (sender, receiver) = job_queue();
            JobFeed::Queue { sender, receiver }
        }
        WorkMode::Randomized {
            requests_per_worker,
        } => JobFeed::Random {
            passes: requests_per_worker.get(),
        },
    };

    info!(
        workers,
        mode = ?config.mode.kind(),
        url_root = config.target.root(),
        "Starting workers"
    );

    let (done_tx, mut done_rx) = mpsc::channel::<WorkerReport>(workers);
    for worker_id in 0..workers {
        let mut source = feed.source_for_worker(config);
        let requester = requester.clone();
        let done_tx = done_tx.clone();
        tokio::spawn(async move {
            let report = run_worker(worker_id, source.as_mut(), &requester, max_attempts).await;
            if done_tx.send(report).await.is_err() {
                debug!(worker = worker_id, "Coordinator stopped listening");
            }
        });
    }
    drop(done_tx);

    let jobs_queued = match feed {
        JobFeed::Queue { sender, receiver } => {
            drop(receiver);
            Some(produce_descriptors(config.bounds.file_units, sender).await)
        }
        JobFeed::Random { .. } => None,
    };

    let mut reports = Vec::with_capacity(workers);
    while reports.len() < workers {
        let Some(report) = done_rx.recv().await else {
            break;
        };
        info!(
            worker = report.worker_id,
            completed = report.jobs_completed,
            abandoned = report.jobs_abandoned,
            failed_attempts = report.failed_attempts,
            "Worker finished"
        );
        reports.push(report);
    }

    if reports.len() < workers {
        error!(
            expected = workers,
            reported = reports.len(),
            "Workers exited without signalling completion"
        );
    } else {
        info!(workers, "All workers finished");
    }

    RunOutcome {
        workers_started: workers,
        reports,
        jobs_queued,
    }
}

enum JobFeed {
    Queue {
        sender: mpsc::Sender<JobDescriptor>,
        receiver: SharedJobReceiver,
    },
    Random {
        passes: u64,
    },
}

impl JobFeed {
    fn source_for_worker(&self, config: &Config) -> Box<dyn WorkSource> {
        match self {
            Self::Queue { receiver, .. } => Box::new(EnumeratedSource::new(receiver.clone())),
            Self::Random { passes } => {
                Box::new(RandomizedSource::from_entropy(config.bounds, *passes))
            }
        }
    }
}
