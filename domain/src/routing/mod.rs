//! Routing domain
//!
//! Decides which strategy handles a problem:
//!
//! ```text
//! Problem ──► explicit domain (not "general")? ──yes──► DomainTag
//!                     │ no
//!                     ▼
//!             DomainClassifier::classify(prompt) ──► DomainTag
//!                                                       │
//!                                                       ▼
//!                                       StrategyKind::for_domain(tag)
//! ```

pub mod classifier;
pub mod strategy;

pub use classifier::{DomainClassifier, KeywordClassifier};
pub use strategy::{ReflectionState, ReflectionStop, StrategyKind};

use crate::core::domain_tag::DomainTag;
use crate::core::problem::Problem;

/// Resolve the domain a problem should be solved under.
///
/// An explicit label other than `general` is used verbatim; otherwise the
/// classifier decides.
pub fn resolve_domain(problem: &Problem, classifier: &dyn DomainClassifier) -> DomainTag {
    match problem.explicit_domain() {
        Some(tag) => tag.clone(),
        None => classifier.classify(&problem.prompt),
    }
}
