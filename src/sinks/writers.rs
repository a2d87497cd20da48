use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
    time::Instant,
};

use crate::error::SinkError;

use super::{ByteSink, SinkState};

/// Measures the body and drops the bytes.
#[derive(Debug, Default)]
pub struct DiscardSink {
    state: SinkState,
}

impl DiscardSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SinkState::new(),
        }
    }
}

#[async_trait]
impl ByteSink for DiscardSink {
    async fn consume(&mut self, chunk: &[u8]) -> Result<usize, SinkError> {
        self.state.record(chunk.len(), Instant::now());
        Ok(chunk.len())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn state(&self) -> &SinkState {
        &self.state
    }
}

/// Measures the body and appends it, in arrival order, to a data file.
#[derive(Debug)]
pub struct FileSink {
    state: SinkState,
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Creates (or truncates) the data file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created.
    pub async fn create(path: PathBuf) -> Result<Self, SinkError> {
        let file = File::create(&path)
            .await
            .map_err(|err| SinkError::OpenDataFile {
                path: path.clone(),
                source: err,
            })?;
        Ok(Self {
            state: SinkState::new(),
            path,
            writer: BufWriter::new(file),
        })
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::WriteDataFile {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ByteSink for FileSink {
    async fn consume(&mut self, chunk: &[u8]) -> Result<usize, SinkError> {
        self.state.record(chunk.len(), Instant::now());
        if let Err(err) = self.writer.write_all(chunk).await {
            return Err(self.write_error(err));
        }
        Ok(chunk.len())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        if let Err(err) = self.writer.flush().await {
            return Err(self.write_error(err));
        }
        Ok(())
    }

    fn state(&self) -> &SinkState {
        &self.state
    }
}
