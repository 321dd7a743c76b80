//! Error types for a single attempt against the endpoint

use thiserror::Error;

/// Why one attempt did not produce a usable response.
///
/// Attempt errors never leave the gateway: the last one is folded into
/// `CompletionOutcome::Failure` once retries are exhausted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The endpoint answered with a non-200 status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection, timeout or body read failure
    #[error("{0}")]
    Transport(String),

    /// Request could not be built (bad header value, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AttemptError {
    /// Status of the response this error came from, if there was one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AttemptError::Http { status, .. } => Some(*status),
            AttemptError::Transport(_) | AttemptError::InvalidRequest(_) => None,
        }
    }
}

impl From<reqwest::Error> for AttemptError {
    fn from(e: reqwest::Error) -> Self {
        AttemptError::Transport(e.to_string())
    }
}
