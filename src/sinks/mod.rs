//! Byte sinks that time response bodies as they stream in.
pub mod config;
mod tap;
mod writers;


use async_trait::async_trait;

use crate::error::SinkError;

pub use config::{SinkMode, data_file_name};
pub use tap::SinkState;
pub use writers::{DiscardSink, FileSink};

/// Consumer of one response body.
///
/// A sink is a measurement tap, not flow control: every chunk is accepted
/// in full and its arrival is recorded in the sink's [`SinkState`].
#[async_trait]
pub trait ByteSink: Send {
    /// Consumes `chunk` and returns the number of bytes taken, which is
    /// always `chunk.len()`.
    ///
    /// # Errors
    ///
    /// Returns an error when a persisting sink cannot write the chunk.
    async fn consume(&mut self, chunk: &[u8]) -> Result<usize, SinkError>;

    /// Called once after the last chunk.
    ///
    /// # Errors
    ///
    /// Returns an error when buffered bytes cannot be flushed.
    async fn finish(&mut self) -> Result<(), SinkError>;

    fn state(&self) -> &SinkState;
}
