mod app;
mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;
mod plan;
mod shutdown_handlers;
mod sinks;
mod work;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
