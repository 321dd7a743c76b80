//! Solver parameters: strategy knobs and per-call limits.
//!
//! [`SolverParams`] groups the static parameters that the strategy use cases
//! read when building [`CompletionRequest`]s and sizing their loops.

use serde::{Deserialize, Serialize};
use solver_domain::CompletionRequest;
use solver_domain::completion::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Strategy and model-call parameters.
///
/// | Strategy         | Reads                                            |
/// |------------------|--------------------------------------------------|
/// | Direct           | `direct_temperature`                             |
/// | Reflection       | `reflection_steps`                               |
/// | Composite        | `composite_samples`, `sampling_temperature`,     |
/// |                  | `reflection_steps`                               |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    /// Model identifier sent with every request (`None` = gateway default).
    pub model: Option<String>,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Attempts per completion call, including the first.
    pub max_retries: u32,
    /// Temperature for single-pass reasoning, critiques and repairs.
    pub direct_temperature: f32,
    /// Temperature for vote samples.
    pub sampling_temperature: f32,
    /// Samples drawn by stage 1 of the composite strategy.
    pub composite_samples: usize,
    /// Maximum critique/repair rounds.
    pub reflection_steps: usize,
    /// Count failed samples as ordinary vote candidates and keep sampling.
    pub count_failed_samples: bool,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            model: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            direct_temperature: 0.0,
            sampling_temperature: 0.7,
            composite_samples: 5,
            reflection_steps: 3,
            count_failed_samples: false,
        }
    }
}

impl SolverParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
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

    pub fn with_sampling_temperature(mut self, temperature: f32) -> Self {
        self.sampling_temperature = temperature;
        self
    }

    pub fn with_composite_samples(mut self, n: usize) -> Self {
        self.composite_samples = n;
        self
    }

    pub fn with_reflection_steps(mut self, steps: usize) -> Self {
        self.reflection_steps = steps;
        self
    }

    pub fn with_count_failed_samples(mut self, enabled: bool) -> Self {
        self.count_failed_samples = enabled;
        self
    }

    // ==================== Request Construction ====================

    /// Build a request carrying this configuration's model, timeout and retries.
    pub fn request(
        &self,
        prompt: impl Into<String>,
        system: impl Into<String>,
        temperature: f32,
    ) -> CompletionRequest {
        let request = CompletionRequest::new(prompt, system)
            .with_temperature(temperature)
            .with_timeout(self.timeout)
            .with_max_retries(self.max_retries);
        match &self.model {
            Some(model) => request.with_model(model.clone()),
            None => request,
        }
    }
}

/// Batch generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Answers longer than this many characters are cut before saving.
    pub max_answer_chars: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            max_answer_chars: 4999,
        }
    }
}
