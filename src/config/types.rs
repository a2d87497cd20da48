use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::{PositiveU64, PositiveUsize};
use crate::http::TargetUrl;
use crate::plan::{BlockUnit, RangeBounds};

/// Config file as written on disk. Every field is optional here; presence
/// and ranges are checked when resolving into [`Config`].
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url_root: Option<String>,
    pub url_para: Option<String>,
    pub mode: Option<WorkModeKind>,
    #[serde(alias = "request_per_routine")]
    pub request_per_worker: Option<u64>,
    #[serde(alias = "routine_number")]
    pub worker_number: Option<usize>,
    #[serde(alias = "cache_agent_max_attempt")]
    pub max_attempt: Option<u64>,
    #[serde(alias = "min_file_size_10_mega_byte")]
    pub min_file_size_unit: Option<u64>,
    #[serde(alias = "max_file_size_10_mega_byte")]
    pub max_file_size_unit: Option<u64>,
    pub min_block_size_unit: Option<u64>,
    pub max_block_size_unit: Option<u64>,
    pub block_size_unit: Option<BlockUnit>,
    pub data_dir: Option<String>,
    pub connect_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkModeKind {
    /// Every file size in the configured range, once, through a shared queue.
    #[serde(alias = "cache")]
    Enumerated,
    /// Fixed number of random range requests per worker.
    #[default]
    #[serde(alias = "load")]
    Randomized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkMode {
    Enumerated { max_attempts: PositiveU64 },
    Randomized { requests_per_worker: PositiveU64 },
}

impl WorkMode {
    #[must_use]
    pub const fn kind(self) -> WorkModeKind {
        match self {
            Self::Enumerated { .. } => WorkModeKind::Enumerated,
            Self::Randomized { .. } => WorkModeKind::Randomized,
        }
    }

    /// Attempts allowed per job. Randomized passes never retry.
    #[must_use]
    pub const fn max_attempts(self) -> u64 {
        match self {
            Self::Enumerated { max_attempts } => max_attempts.get(),
            Self::Randomized { .. } => 1,
        }
    }
}

/// Validated, read-only run settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub target: TargetUrl,
    pub mode: WorkMode,
    pub workers: PositiveUsize,
    pub bounds: RangeBounds,
    /// Downloads are persisted here when set.
    pub data_dir: Option<PathBuf>,
    pub connect_timeout: Duration,
}
