//! Job supply for workers.
//!
//! Two strategies share the [`WorkSource`] capability: an enumerated queue
//! that every worker drains together, and per-worker randomized passes.
mod enumerated;
mod randomized;


use async_trait::async_trait;

use crate::plan::RangePlan;

pub use enumerated::{
    EnumeratedSource, JOB_QUEUE_CAPACITY, SharedJobReceiver, job_queue, produce_descriptors,
};
pub use randomized::RandomizedSource;

/// One file size queued for a whole-file download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobDescriptor {
    pub file_size_units: u64,
}

/// What a worker executes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// 0-based, counted per worker.
    pub pass: u64,
    pub plan: RangePlan,
}

#[async_trait]
pub trait WorkSource: Send {
    /// Returns `None` once the worker has nothing left to do.
    async fn next_job(&mut self) -> Option<Job>;
}
