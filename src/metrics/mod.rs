//! Per-attempt metrics derived from request timing, emitted as log records.
mod format;
mod reporter;
mod types;


pub use format::{format_millis, format_x100};
pub use reporter::{report_abandoned, report_failure, report_success};
pub use types::{AttemptMeasurement, MetricsRecord};
