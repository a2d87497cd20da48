use std::time::Duration;

use tokio::time::Instant;

/// Arrival timing of a single response body.
///
/// Owned by the one request reading that body and dropped with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkState {
    first_byte_at: Option<Instant>,
    last_arrival_at: Option<Instant>,
    max_stall: Duration,
    total_bytes: u64,
}

impl SinkState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_byte_at: None,
            last_arrival_at: None,
            max_stall: Duration::ZERO,
            total_bytes: 0,
        }
    }

    /// Records a chunk of `len` bytes arriving at `now`.
    ///
    /// The first chunk stamps the first-byte time; every later chunk widens
    /// `max_stall` if it waited longer than any gap seen so far. Empty
    /// chunks carry no data and are ignored.
    pub fn record(&mut self, len: usize, now: Instant) {
        if len == 0 {
            return;
        }
        match self.last_arrival_at {
            None => self.first_byte_at = Some(now),
            Some(last) => {
                let gap = now.saturating_duration_since(last);
                if gap > self.max_stall {
                    self.max_stall = gap;
                }
            }
        }
        self.last_arrival_at = Some(now);
        self.total_bytes = self
            .total_bytes
            .saturating_add(u64::try_from(len).unwrap_or(u64::MAX));
    }

    #[must_use]
    pub const fn first_byte_arrived(&self) -> bool {
        self.first_byte_at.is_some()
    }

    #[must_use]
    pub const fn first_byte_at(&self) -> Option<Instant> {
        self.first_byte_at
    }

    #[must_use]
    pub const fn last_arrival_at(&self) -> Option<Instant> {
        self.last_arrival_at
    }

    #[must_use]
    pub const fn max_stall(&self) -> Duration {
        self.max_stall
    }

    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}
