//! Strategy configuration from TOML (`[strategy]` section)

use serde::{Deserialize, Serialize};

/// Raw strategy configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStrategyConfig {
    /// Samples for stage 1 of the composite (math) strategy
    pub composite_samples: usize,
    /// Maximum critique/repair rounds
    pub reflection_steps: usize,
    /// Temperature for vote samples
    pub sampling_temperature: f32,
    /// Record failed samples as vote candidates instead of stopping early
    pub count_failed_samples: bool,
}

impl Default for FileStrategyConfig {
    fn default() -> Self {
        Self {
            composite_samples: 5,
            reflection_steps: 3,
            sampling_temperature: 0.7,
            count_failed_samples: false,
        }
    }
}
