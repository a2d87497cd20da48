use std::path::PathBuf;
use std::time::Duration;

use crate::args::{PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};
use crate::http::TargetUrl;
use crate::plan::{BlockUnit, RangeBounds, UnitRange};

use super::types::{Config, ConfigFile, WorkMode, WorkModeKind};

const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_MAX_ATTEMPTS: u64 = 1;

/// Validates a raw config file into the immutable [`Config`].
///
/// # Errors
///
/// Returns an error when a required field is missing, a count or size bound
/// is zero, a minimum exceeds its maximum, or `url_root` is not an absolute
/// http(s) URL.
pub fn resolve_config(file: ConfigFile) -> AppResult<Config> {
    let url_root = file
        .url_root
        .ok_or(ConfigError::MissingField { field: "url_root" })?;
    let target = TargetUrl::parse(&url_root, file.url_para.as_deref().unwrap_or_default())
        .map_err(|err| AppError::config(ConfigError::InvalidUrlRoot { source: err }))?;

    let workers = file
        .worker_number
        .ok_or(ConfigError::MissingField {
            field: "worker_number",
        })
        .and_then(|value| {
            PositiveUsize::try_from(value).map_err(|err| ConfigError::FieldMustBePositive {
                field: "worker_number",
                source: err,
            })
        })?;

    let mode = match file.mode.unwrap_or_default() {
        WorkModeKind::Enumerated => WorkMode::Enumerated {
            max_attempts: positive_field(
                "max_attempt",
                Some(file.max_attempt.unwrap_or(DEFAULT_MAX_ATTEMPTS)),
            )?,
        },
        WorkModeKind::Randomized => WorkMode::Randomized {
            requests_per_worker: positive_field("request_per_worker", file.request_per_worker)?,
        },
    };

    let file_units = unit_range(
        ("min_file_size_unit", file.min_file_size_unit),
        ("max_file_size_unit", file.max_file_size_unit),
    )?;
    let (block_units, block_unit) = match (
        mode,
        file.min_block_size_unit,
        file.max_block_size_unit,
    ) {
        // Enumerated jobs are whole-file GETs; without block bounds the
        // block covers the largest file.
        (WorkMode::Enumerated { .. }, None, None) => (file_units.upper(), BlockUnit::TenMib),
        (_, min_block, max_block) => (
            unit_range(
                ("min_block_size_unit", min_block),
                ("max_block_size_unit", max_block),
            )?,
            file.block_size_unit.unwrap_or_default(),
        ),
    };

    let connect_timeout = Duration::from_millis(positive_field(
        "connect_timeout_ms",
        Some(file.connect_timeout_ms.unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS)),
    )?
    .get());

    let data_dir = file
        .data_dir
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from);

    Ok(Config {
        target,
        mode,
        workers,
        bounds: RangeBounds {
            file_units,
            block_units,
            block_unit,
        },
        data_dir,
        connect_timeout,
    })
}

fn positive_field(field: &'static str, value: Option<u64>) -> AppResult<PositiveU64> {
    let value = value.ok_or(ConfigError::MissingField { field })?;
    PositiveU64::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}

fn unit_range(
    (min_field, min): (&'static str, Option<u64>),
    (max_field, max): (&'static str, Option<u64>),
) -> AppResult<UnitRange> {
    let min = positive_field(min_field, min)?;
    let max = positive_field(max_field, max)?;
    UnitRange::new(min, max).ok_or_else(|| {
        AppError::config(ConfigError::BoundsInverted {
            min_field,
            max_field,
            min: min.get(),
            max: max.get(),
        })
    })
}
