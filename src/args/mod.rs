//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
mod types;

#[cfg(test)]
mod tests;

pub use cli::RangeBenchArgs;
pub use types::{PositiveU64, PositiveUsize};

pub(crate) use defaults::DEFAULT_USER_AGENT;
#[cfg(test)]
pub(crate) use defaults::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_PATH};
