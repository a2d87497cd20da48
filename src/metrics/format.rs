use std::time::Duration;

/// Renders a value scaled by 100 with two decimals (`1234` -> `12.34`).
#[must_use]
pub fn format_x100(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

/// Renders a duration as milliseconds with microsecond precision.
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    let micros = duration.as_micros();
    format!("{}.{:03}", micros / 1000, micros % 1000)
}
