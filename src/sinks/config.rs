use std::path::PathBuf;

use crate::error::SinkError;
use crate::plan::RangePlan;

use super::{ByteSink, DiscardSink, FileSink};

/// Which sink flavor each request body is streamed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkMode {
    Discard,
    Persist { data_dir: PathBuf },
}

impl SinkMode {
    #[must_use]
    pub fn from_data_dir(data_dir: Option<PathBuf>) -> Self {
        data_dir.map_or(Self::Discard, |data_dir| Self::Persist { data_dir })
    }

    /// Opens a fresh sink for one request body.
    ///
    /// # Errors
    ///
    /// Returns an error when the data file of a persisting sink cannot be
    /// created.
    pub async fn open(
        &self,
        worker_id: usize,
        pass: u64,
        plan: &RangePlan,
    ) -> Result<Box<dyn ByteSink>, SinkError> {
        match self {
            Self::Discard => Ok(Box::new(DiscardSink::new())),
            Self::Persist { data_dir } => {
                let path = data_dir.join(data_file_name(worker_id, pass, plan));
                Ok(Box::new(FileSink::create(path).await?))
            }
        }
    }
}

/// `{worker}_{pass}_{file_size_bytes}_{block_size_bytes}.dat`
#[must_use]
pub fn data_file_name(worker_id: usize, pass: u64, plan: &RangePlan) -> String {
    format!(
        "{}_{}_{}_{}.dat",
        worker_id, pass, plan.file_size_bytes, plan.block_size_bytes
    )
}
