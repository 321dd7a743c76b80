//! Completion request value object

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default number of attempts per call
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// One request to the text-generation endpoint (Value Object)
///
/// Built fresh for every call so that sampling settings never leak between
/// calls with different intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// User message
    pub prompt: String,
    /// System instruction
    pub system: String,
    /// Target model identifier; `None` means the gateway's configured model
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Timeout for a single attempt
    pub timeout: Duration,
    /// Maximum number of attempts (not additional retries)
    pub max_retries: u32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: system.into(),
            model: None,
            temperature: 0.0,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
