//! Worker pool and completion barrier.
mod coordinator;
mod worker;


pub use coordinator::{RunOutcome, run_coordinator};
pub use worker::{WorkerReport, run_worker};
