use super::*;
use crate::error::{AppError, AppResult};
use clap::Parser;
use std::path::Path;

fn parse_test_args<I, T>(args: I) -> AppResult<RangeBenchArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RangeBenchArgs::try_parse_from(args).map_err(AppError::from)
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["rangebench"])?;
    if args.conf != Path::new(DEFAULT_CONFIG_PATH) {
        return Err(AppError::validation(format!(
            "Unexpected conf default: {}",
            args.conf.display()
        )));
    }
    if args.log != Path::new(DEFAULT_LOG_PATH) {
        return Err(AppError::validation(format!(
            "Unexpected log default: {}",
            args.log.display()
        )));
    }
    Ok(())
}

#[test]
fn parse_args_conf_and_log() -> AppResult<()> {
    let args = parse_test_args([
        "rangebench",
        "--conf",
        "/etc/rangebench/cache.toml",
        "--log",
        "/var/log/rangebench/cache.log",
    ])?;
    if args.conf != Path::new("/etc/rangebench/cache.toml") {
        return Err(AppError::validation("Unexpected conf path"));
    }
    if args.log != Path::new("/var/log/rangebench/cache.log") {
        return Err(AppError::validation("Unexpected log path"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_unknown_flag() -> AppResult<()> {
    if parse_test_args(["rangebench", "--workers", "4"]).is_ok() {
        return Err(AppError::validation("Expected unknown flag to be rejected"));
    }
    Ok(())
}

#[test]
fn positive_numbers_reject_zero() -> AppResult<()> {
    if PositiveU64::try_from(0).is_ok() {
        return Err(AppError::validation("Expected PositiveU64 to reject 0"));
    }
    if PositiveUsize::try_from(0).is_ok() {
        return Err(AppError::validation("Expected PositiveUsize to reject 0"));
    }
    let parsed = PositiveUsize::try_from(8)?;
    if parsed.get() != 8 {
        return Err(AppError::validation("Unexpected PositiveUsize value"));
    }
    Ok(())
}
