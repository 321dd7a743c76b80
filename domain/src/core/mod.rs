//! Core domain concepts shared across all subdomains.
//!
//! - [`problem::Problem`]: a question record handed to the solver
//! - [`domain_tag::DomainTag`]: category label used for routing
//! - [`error::DomainError`]: domain-level errors

pub mod domain_tag;
pub mod error;
pub mod problem;
pub mod string;
