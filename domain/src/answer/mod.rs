//! Answer domain
//!
//! Everything that turns raw model text into something comparable:
//!
//! - [`parsing`]: candidate extraction and normalization
//! - [`vote`]: majority voting over sampled responses
//! - [`critique`]: reviewer verdicts for the critique-repair loop

pub mod critique;
pub mod parsing;
pub mod vote;

pub use critique::CritiqueVerdict;
pub use parsing::{boxed_content, extract_candidate, normalize};
pub use vote::{CandidateCount, Sample, VoteTally};
