//! Critique verdict parsing for the critique-repair loop.

use super::parsing::normalize;
use serde::{Deserialize, Serialize};

/// How many leading characters of a critique are searched for approval phrases
const VERDICT_WINDOW: usize = 50;

/// Reviewer's verdict on the current answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CritiqueVerdict {
    /// The answer was accepted as correct; stop repairing
    Correct,
    /// Anything else; the critique becomes repair feedback
    NeedsRepair,
}

impl CritiqueVerdict {
    /// Parse a free-form critique.
    ///
    /// Approved when the normalized critique starts with `correct`, its first
    /// 50 characters contain `is correct`, or the first 50 characters of the
    /// lower-cased raw text contain `**correct**`. Anything else, including an
    /// empty critique, needs repair.
    ///
    /// ```
    /// use solver_domain::answer::CritiqueVerdict;
    ///
    /// assert_eq!(CritiqueVerdict::parse("CORRECT. The algebra checks out."), CritiqueVerdict::Correct);
    /// assert_eq!(CritiqueVerdict::parse("Incorrect: sign error."), CritiqueVerdict::NeedsRepair);
    /// ```
    pub fn parse(critique: &str) -> Self {
        let normalized = normalize(critique);
        let normalized_head: String = normalized.chars().take(VERDICT_WINDOW).collect();
        let raw_head: String = critique.to_lowercase().chars().take(VERDICT_WINDOW).collect();

        if normalized.starts_with("correct")
            || normalized_head.contains("is correct")
            || raw_head.contains("**correct**")
        {
            CritiqueVerdict::Correct
        } else {
            CritiqueVerdict::NeedsRepair
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, CritiqueVerdict::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_correct() {
        assert!(CritiqueVerdict::parse("CORRECT").is_correct());
        assert!(CritiqueVerdict::parse("  Correct, nothing to fix").is_correct());
    }

    #[test]
    fn test_is_correct_within_window() {
        assert!(CritiqueVerdict::parse("The answer is correct.").is_correct());
        let late = format!("{} the answer is correct", "x".repeat(60));
        assert!(!CritiqueVerdict::parse(&late).is_correct());
    }

    #[test]
    fn test_bold_correct_in_raw_text() {
        assert!(CritiqueVerdict::parse("Verdict: **Correct**").is_correct());
    }

    #[test]
    fn test_incorrect_is_not_correct() {
        // "incorrect" neither starts with "correct" nor contains "is correct"
        assert!(!CritiqueVerdict::parse("Incorrect. The root x=-1 is extraneous.").is_correct());
        assert!(!CritiqueVerdict::parse("This is incorrect").is_correct());
    }

    #[test]
    fn test_empty_critique_needs_repair() {
        assert_eq!(CritiqueVerdict::parse(""), CritiqueVerdict::NeedsRepair);
    }
}
