use clap::Parser;
use tracing::{error, info};

use crate::app::run_coordinator;
use crate::args::RangeBenchArgs;
use crate::config::{Config, load_config, prepare_data_dir};
use crate::error::AppResult;
use crate::http::build_client;
use crate::shutdown_handlers::{install_signal_hook, terminate_process};

pub(crate) fn run() -> AppResult<()> {
    let args = RangeBenchArgs::parse();

    crate::logger::init_logging(&args.log);

    let config = load_config(&args.conf).inspect_err(|err| {
        error!(path = %args.conf.display(), error = %err, "Failed to load config");
    })?;
    prepare_data_dir(&config).inspect_err(|err| {
        error!(error = %err, "Failed to prepare data directory");
    })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(config))
}

async fn run_async(config: Config) -> AppResult<()> {
    let _signal_task = install_signal_hook(terminate_process)?;
    let client = build_client(&config)?;

    let outcome = run_coordinator(&config, client).await;
    let completed: u64 = outcome
        .reports
        .iter()
        .map(|report| report.jobs_completed)
        .fold(0, u64::saturating_add);
    info!(
        workers = outcome.reports.len(),
        jobs_completed = completed,
        "Run finished"
    );
    Ok(())
}
