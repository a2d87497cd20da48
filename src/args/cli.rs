use std::path::PathBuf;

use clap::Parser;

use super::defaults::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "HTTP range-request load generator - concurrent workers fetch whole files or random byte ranges and log first-byte latency, stalls, and throughput per request."
)]
pub struct RangeBenchArgs {
    /// Config file (.json or .toml)
    #[arg(long = "conf", default_value = DEFAULT_CONFIG_PATH)]
    pub conf: PathBuf,

    /// Log file receiving one structured record per request attempt
    #[arg(long = "log", default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,
}
