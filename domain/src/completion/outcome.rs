//! Terminal outcome of a completion call

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of one completion call after all retries were resolved
///
/// Success and failure are separate variants, so callers must branch before
/// reading any field. No retry state survives into this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompletionOutcome {
    Success {
        /// `choices[0].message.content`, empty if absent
        text: String,
        /// Full decoded response body
        raw_payload: serde_json::Value,
        http_status: u16,
        headers: HashMap<String, String>,
    },
    Failure {
        /// Description of the last observed error
        error: String,
        /// Status of the last HTTP response, if any response was received
        last_http_status: Option<u16>,
    },
}

impl CompletionOutcome {
    /// Convenience constructor for a successful text response
    pub fn success(text: impl Into<String>) -> Self {
        CompletionOutcome::Success {
            text: text.into(),
            raw_payload: serde_json::Value::Null,
            http_status: 200,
            headers: HashMap::new(),
        }
    }

    pub fn failure(error: impl Into<String>, last_http_status: Option<u16>) -> Self {
        CompletionOutcome::Failure {
            error: error.into(),
            last_http_status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionOutcome::Success { .. })
    }

    /// Generated text on success
    pub fn text(&self) -> Option<&str> {
        match self {
            CompletionOutcome::Success { text, .. } => Some(text),
            CompletionOutcome::Failure { .. } => None,
        }
    }

    /// Error description on failure
    pub fn error(&self) -> Option<&str> {
        match self {
            CompletionOutcome::Success { .. } => None,
            CompletionOutcome::Failure { error, .. } => Some(error),
        }
    }

    /// Collapse into the trimmed text or the error description
    pub fn into_result(self) -> Result<String, String> {
        match self {
            CompletionOutcome::Success { text, .. } => Ok(text.trim().to_string()),
            CompletionOutcome::Failure { error, .. } => Err(error),
        }
    }
}
