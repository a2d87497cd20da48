use thiserror::Error;

use super::SinkError;

/// Failures while preparing the shared HTTP client.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Why a single range request attempt failed.
///
/// Every variant is terminal for the attempt only; the worker decides
/// whether another attempt follows.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to make HTTP request: {source}")]
    BuildRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to do HTTP request: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed with status {status}.")]
    UnexpectedStatus { status: u16 },
    #[error("Failed to read response body: {source}")]
    Stream {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to write data file: {source}")]
    Sink {
        #[from]
        source: SinkError,
    },
}

impl RequestError {
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            Self::BuildRequest { .. }
            | Self::Transport { .. }
            | Self::Stream { .. }
            | Self::Sink { .. } => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source } | Self::Stream { source } => source.is_timeout(),
            Self::BuildRequest { .. } | Self::UnexpectedStatus { .. } | Self::Sink { .. } => false,
        }
    }
}
