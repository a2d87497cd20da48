use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::PositiveU64;
use crate::config::{Config, ConfigFile, resolve_config};
use crate::error::{AppError, AppResult, ConfigError};
use crate::http::TargetUrl;
use crate::plan::{BlockUnit, RangeBounds, RangePlan, UnitRange, plan_range};

const FUZZ_INPUT_PATH: &str = "<fuzz input>";

/// Parses TOML config and validates it.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn resolve_config_from_toml(input: &str) -> AppResult<Config> {
    let file: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: PathBuf::from(FUZZ_INPUT_PATH),
            source: err,
        })
    })?;
    resolve_config(file)
}

/// Parses JSON config and validates it.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn resolve_config_from_json(input: &[u8]) -> AppResult<Config> {
    let file: ConfigFile = serde_json::from_slice(input).map_err(|err| {
        AppError::config(ConfigError::ParseJson {
            path: PathBuf::from(FUZZ_INPUT_PATH),
            source: err,
        })
    })?;
    resolve_config(file)
}

/// Validates a URL root and renders the target of a file size.
///
/// # Errors
///
/// Returns an error when the root is not an absolute http(s) URL.
pub fn target_url_input(root: &str, para: &str, file_size_mib: u64) -> AppResult<String> {
    let target = TargetUrl::parse(root, para)?;
    Ok(target.for_file(file_size_mib))
}

/// Plans one range from raw bounds with a seeded generator.
///
/// Returns `None` when a bound is zero or a minimum exceeds its maximum.
#[must_use]
pub fn plan_range_input(
    seed: u64,
    file_units: (u64, u64),
    block_units: (u64, u64),
    block_unit: BlockUnit,
) -> Option<RangePlan> {
    let file_units = unit_range(file_units)?;
    let block_units = unit_range(block_units)?;
    let bounds = RangeBounds {
        file_units,
        block_units,
        block_unit,
    };
    Some(plan_range(&bounds, &mut StdRng::seed_from_u64(seed)))
}

fn unit_range((min, max): (u64, u64)) -> Option<UnitRange> {
    let min = PositiveU64::try_from(min).ok()?;
    let max = PositiveU64::try_from(max).ok()?;
    UnitRange::new(min, max)
}
