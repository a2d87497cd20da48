//! HTTP range request execution.
mod client;
mod executor;
mod target;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::build_client;
pub use executor::{AttemptContext, RangeRequester};
pub use target::TargetUrl;
