//! Endpoint configuration from TOML (`[endpoint]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
///
/// `api_base`, `api_key` and `model` are also read from the `API_BASE`,
/// `OPENAI_API_KEY` and `MODEL_NAME` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub api_base: String,
    /// Bearer token; requests are sent without one when unset
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Upper bound on generated tokens per call
    pub max_tokens: u32,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
    /// Attempts per call, including the first
    pub max_retries: u32,
    /// Fixed delay between attempts in milliseconds
    pub backoff_ms: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 2048,
            timeout_secs: 60,
            max_retries: 3,
            backoff_ms: 1000,
        }
    }
}

impl FileEndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}
