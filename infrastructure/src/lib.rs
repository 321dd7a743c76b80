//! Infrastructure layer for quorum-solver
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenAI-compatible HTTP gateway, JSON
//! storage, the JSONL transcript logger, and configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigWarning, FileBatchConfig, FileConfig, FileEndpointConfig,
    FileOutputConfig, FileStrategyConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::{AttemptError, OpenAiGateway};
pub use storage::{JsonResultStore, load_json_array, load_problems};
