//! Completion call value objects
//!
//! A [`CompletionRequest`] describes one call to the remote text-generation
//! endpoint; a [`CompletionOutcome`] is its terminal result.

mod outcome;
mod request;

pub use outcome::CompletionOutcome;
pub use request::{CompletionRequest, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
