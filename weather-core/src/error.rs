use reqwest::StatusCode;
use thiserror::Error;

/// Why a single weather fetch failed. Every variant is terminal for that
/// attempt; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be built from the query.
    #[error("The URL provided was invalid.")]
    InvalidQuery,

    /// The request never produced a response (connect, DNS, body read).
    #[error("The network request failed.")]
    TransportFailure(#[source] reqwest::Error),

    /// Non-2xx status, or a 2xx with an empty body.
    #[error("Received an invalid response from the server.")]
    InvalidResponse { status: StatusCode },

    #[error("Decoding failed with error: {0}")]
    DecodingFailure(#[source] serde_json::Error),
}

impl FetchError {
    /// HTTP status carried by `InvalidResponse`, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::InvalidResponse { status } => Some(*status),
            _ => None,
        }
    }
}
