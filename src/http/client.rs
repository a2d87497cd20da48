use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::config::Config;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the client shared by every worker.
///
/// Requests carry no overall timeout; a body may take as long as the
/// transfer needs. Only connection setup is bounded.
///
/// # Errors
///
/// Returns an error when the client cannot be constructed.
pub fn build_client(config: &Config) -> AppResult<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .http1_only()
        .pool_max_idle_per_host(config.workers.get())
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
