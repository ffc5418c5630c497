/// Error types for the SpaceTraders SDK.
///
/// The taxonomy is deliberately small. A call either never reached the API
/// (`Transport`), reached it and was rejected with a non-2xx status
/// (`Api`), or succeeded with a body this crate could not decode
/// (`Decode`). Nothing is retried here — the upstream game enforces its
/// own cooldowns and rate limits, and retry policy belongs to the caller.
use thiserror::Error;

/// The primary error type for the SpaceTraders SDK.
#[derive(Error, Debug)]
pub enum StError {
    /// DNS, connection, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// A non-2xx response. `body` carries the upstream error payload
    /// verbatim; its schema is not modeled.
    #[error("api error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl StError {
    /// Returns the HTTP status code if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            StError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, StError::Transport(_))
    }
}

impl From<reqwest::Error> for StError {
    fn from(err: reqwest::Error) -> Self {
        StError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for StError {
    fn from(err: serde_json::Error) -> Self {
        StError::Decode(err.to_string())
    }
}
