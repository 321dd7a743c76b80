//! Prompt domain
//!
//! Templates for the system instructions and user prompts of every strategy step.

mod template;

pub use template::PromptTemplate;
