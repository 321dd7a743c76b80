//! Domain layer for quorum-solver
//!
//! This crate contains the core business rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Strategies
//!
//! Every problem is answered by one protocol, chosen from its domain:
//!
//! - **Direct**: one chain-of-thought call
//! - **Self-consistency**: several sampled calls, majority vote on the
//!   extracted candidate
//! - **Reflection**: critique the answer, repair it, repeat
//! - **Composite**: self-consistency, then reflection seeded with the winner
//!
//! ## Candidates
//!
//! Raw responses are reduced to normalized candidates only for comparison;
//! the user always receives a raw response.

pub mod answer;
pub mod completion;
pub mod core;
pub mod grading;
pub mod prompt;
pub mod routing;

// Re-export commonly used types
pub use answer::{CritiqueVerdict, Sample, VoteTally, extract_candidate, normalize};
pub use completion::{CompletionOutcome, CompletionRequest};
pub use core::{domain_tag::DomainTag, error::DomainError, problem::Problem};
pub use grading::{extract_number, grade_answer};
pub use prompt::PromptTemplate;
pub use routing::{
    DomainClassifier, KeywordClassifier, ReflectionState, ReflectionStop, StrategyKind,
    resolve_domain,
};
