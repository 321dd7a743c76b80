//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod composite;
pub mod direct;
pub mod evaluate;
pub mod reflection;
pub mod run_batch;
pub mod self_consistency;
pub(crate) mod shared;
pub mod solve_problem;
pub mod verify_answers;

#[cfg(test)]
pub(crate) mod test_support;
