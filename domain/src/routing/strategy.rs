//! Strategy selection table
//!
//! Maps a resolved [`DomainTag`] to the answer-generation protocol that
//! handles it.

use crate::core::domain_tag::DomainTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Answer-generation protocols the router dispatches to
///
/// Self-consistency voting is not routed on its own; it runs as stage 1 of
/// [`StrategyKind::Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Single-pass chain-of-thought
    Direct,
    /// Iterative critique-and-repair
    Reflection,
    /// Self-consistency followed by reflection
    Composite,
}

impl StrategyKind {
    /// Dispatch table used by the solver facade.
    ///
    /// - `math` → [`StrategyKind::Composite`]
    /// - `coding` → [`StrategyKind::Reflection`]
    /// - everything else → [`StrategyKind::Direct`]
    pub fn for_domain(domain: &DomainTag) -> Self {
        match domain {
            DomainTag::Math => StrategyKind::Composite,
            DomainTag::Coding => StrategyKind::Reflection,
            DomainTag::General | DomainTag::Other(_) => StrategyKind::Direct,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Direct => "direct",
            StrategyKind::Reflection => "reflection",
            StrategyKind::Composite => "composite",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// States of the critique-repair loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectionState {
    /// Producing the seed answer
    Drafting,
    /// Asking a reviewer whether the current answer is correct
    Critiquing,
    /// Asking for a corrected answer
    Repairing,
    /// Terminal
    Done,
}

impl ReflectionState {
    /// Entry state: skip drafting when a seed answer is supplied
    pub fn initial(has_seed: bool) -> Self {
        if has_seed {
            ReflectionState::Critiquing
        } else {
            ReflectionState::Drafting
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ReflectionState::Done)
    }
}

/// Why a critique-repair loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionStop {
    /// Reviewer accepted the answer
    Approved,
    /// `max_steps` rounds were used up
    StepsExhausted,
    /// A critique or repair call failed
    ClientFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        assert_eq!(StrategyKind::for_domain(&DomainTag::Math), StrategyKind::Composite);
        assert_eq!(StrategyKind::for_domain(&DomainTag::Coding), StrategyKind::Reflection);
        assert_eq!(StrategyKind::for_domain(&DomainTag::General), StrategyKind::Direct);
        assert_eq!(
            StrategyKind::for_domain(&DomainTag::Other("history".to_string())),
            StrategyKind::Direct
        );
    }

    #[test]
    fn test_reflection_initial_state() {
        assert_eq!(ReflectionState::initial(true), ReflectionState::Critiquing);
        assert_eq!(ReflectionState::initial(false), ReflectionState::Drafting);
        assert!(ReflectionState::Done.is_done());
    }
}
