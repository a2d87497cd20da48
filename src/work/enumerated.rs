use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

use crate::plan::{RangePlan, UnitRange};

use super::{Job, JobDescriptor, WorkSource};

pub const JOB_QUEUE_CAPACITY: usize = 64;

/// Consumer side of the job queue, shared by all workers.
pub type SharedJobReceiver = Arc<Mutex<mpsc::Receiver<JobDescriptor>>>;

#[must_use]
pub fn job_queue() -> (mpsc::Sender<JobDescriptor>, SharedJobReceiver) {
    let (sender, receiver) = mpsc::channel(JOB_QUEUE_CAPACITY);
    (sender, Arc::new(Mutex::new(receiver)))
}

/// Queues one descriptor per unit in `range`, ascending, then closes the
/// queue by dropping `sender`.
///
/// Blocks while the queue is full. Returns how many descriptors were queued.
pub async fn produce_descriptors(range: UnitRange, sender: mpsc::Sender<JobDescriptor>) -> u64 {
    let mut produced: u64 = 0;
    for file_size_units in range.iter() {
        if sender
            .send(JobDescriptor { file_size_units })
            .await
            .is_err()
        {
            warn!(
                produced,
                remaining = range.count().saturating_sub(produced),
                "Job queue closed before all file sizes were queued"
            );
            break;
        }
        produced = produced.saturating_add(1);
    }
    drop(sender);
    debug!(produced, "Job queue closed");
    produced
}

/// Pulls whole-file jobs from the shared queue until it is closed and drained.
pub struct EnumeratedSource {
    queue: SharedJobReceiver,
    next_pass: u64,
}

impl EnumeratedSource {
    #[must_use]
    pub const fn new(queue: SharedJobReceiver) -> Self {
        Self {
            queue,
            next_pass: 0,
        }
    }
}

#[async_trait]
impl WorkSource for EnumeratedSource {
    async fn next_job(&mut self) -> Option<Job> {
        let descriptor = self.queue.lock().await.recv().await?;
        let pass = self.next_pass;
        self.next_pass = self.next_pass.saturating_add(1);
        Some(Job {
            pass,
            plan: RangePlan::whole_file(descriptor.file_size_units),
        })
    }
}
