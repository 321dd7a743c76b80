//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`SolverParams`]: strategy sizes, temperatures and per-call limits
//! - [`BatchParams`]: batch generation limits

pub mod solver_params;

pub use solver_params::{BatchParams, SolverParams};
