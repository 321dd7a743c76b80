//! Batch configuration from TOML (`[batch]` section)

use serde::{Deserialize, Serialize};

/// Raw batch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Answers are cut to this many characters before saving
    pub max_answer_chars: usize,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            max_answer_chars: 4999,
        }
    }
}
