//! Configuration file loading for quorum-solver
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MODEL_NAME`, `API_BASE`, `OPENAI_API_KEY`
//! 2. `--config <path>` specified file
//! 3. Project root: `./solver.toml` or `./.solver.toml`
//! 4. Global: `~/.config/quorum-solver/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigWarning, FileBatchConfig, FileConfig, FileEndpointConfig, FileOutputConfig,
    FileStrategyConfig,
};
pub use loader::ConfigLoader;
