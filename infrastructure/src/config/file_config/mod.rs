//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters.

mod batch;
mod endpoint;
mod output;
mod strategy;

pub use batch::FileBatchConfig;
pub use endpoint::FileEndpointConfig;
pub use output::FileOutputConfig;
pub use strategy::FileStrategyConfig;

use serde::{Deserialize, Serialize};
use solver_application::{BatchParams, SolverParams};
use std::fmt;

/// A configuration value that loads but is unlikely to be intended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the offending key (e.g. `strategy.composite_samples`)
    pub field: String,
    pub message: String,
}

impl ConfigWarning {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote endpoint and retry policy
    pub endpoint: FileEndpointConfig,
    /// Strategy sizes and temperatures
    pub strategy: FileStrategyConfig,
    /// Batch generation settings
    pub batch: FileBatchConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every suspicious value.
    ///
    /// Nothing here is fatal: a zero sample count makes the math strategy
    /// answer `"Error"`, which is legal but rarely wanted.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.endpoint.model.trim().is_empty() {
            warnings.push(ConfigWarning::new("endpoint.model", "model name is empty"));
        }
        if self.endpoint.max_retries == 0 {
            warnings.push(ConfigWarning::new(
                "endpoint.max_retries",
                "0 attempts means every call fails without being sent",
            ));
        }
        if self.strategy.composite_samples == 0 {
            warnings.push(ConfigWarning::new(
                "strategy.composite_samples",
                "0 samples makes every math problem answer \"Error\"",
            ));
        }
        if !(0.0..=2.0).contains(&self.strategy.sampling_temperature) {
            warnings.push(ConfigWarning::new(
                "strategy.sampling_temperature",
                format!(
                    "{} is outside 0.0..=2.0",
                    self.strategy.sampling_temperature
                ),
            ));
        }
        if self.batch.max_answer_chars == 0 {
            warnings.push(ConfigWarning::new(
                "batch.max_answer_chars",
                "every saved answer will be empty",
            ));
        }

        warnings
    }

    /// Strategy parameters for the application layer
    pub fn solver_params(&self) -> SolverParams {
        SolverParams::default()
            .with_model(self.endpoint.model.clone())
            .with_timeout(self.endpoint.timeout())
            .with_max_retries(self.endpoint.max_retries)
            .with_sampling_temperature(self.strategy.sampling_temperature)
            .with_composite_samples(self.strategy.composite_samples)
            .with_reflection_steps(self.strategy.reflection_steps)
            .with_count_failed_samples(self.strategy.count_failed_samples)
    }

    pub fn batch_params(&self) -> BatchParams {
        BatchParams {
            max_answer_chars: self.batch.max_answer_chars,
        }
    }
}
