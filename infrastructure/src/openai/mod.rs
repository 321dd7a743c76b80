//! OpenAI-compatible HTTP adapter
//!
//! Implements the [`LlmGateway`](solver_application::LlmGateway) port over
//! `reqwest`, retrying transient failures with a fixed backoff.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::AttemptError;
pub use gateway::OpenAiGateway;
