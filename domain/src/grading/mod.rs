//! Answer grading rules
//!
//! Compares a produced answer against a reference answer. Math answers are
//! compared numerically when both sides contain a number; everything else
//! falls back to normalized-text equality.

use crate::answer::parsing::{boxed_content, normalize};
use crate::core::domain_tag::DomainTag;
use regex::Regex;
use std::sync::LazyLock;

/// Absolute tolerance for numeric equality
pub const NUMERIC_TOLERANCE: f64 = 1e-9;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("number pattern is valid"));

/// Extract the number an answer settles on.
///
/// Looks inside the first `\boxed{}` when present, then takes the last
/// number in what remains.
///
/// ```
/// use solver_domain::grading::extract_number;
///
/// assert_eq!(extract_number("x = 3, so y = \\boxed{-2.5}"), Some("-2.5".to_string()));
/// assert_eq!(extract_number("first 1 then 7"), Some("7".to_string()));
/// assert_eq!(extract_number("none"), None);
/// ```
pub fn extract_number(s: &str) -> Option<String> {
    if s.is_empty() {
        return None;
    }
    let scope = boxed_content(s).unwrap_or(s);
    NUMBER
        .find_iter(scope)
        .last()
        .map(|m| m.as_str().to_string())
}

/// Grade `got` against `expected` for the given domain.
pub fn grade_answer(expected: &str, got: &str, domain: &DomainTag) -> bool {
    if matches!(domain, DomainTag::Math)
        && let (Some(exp), Some(got_num)) = (extract_number(expected), extract_number(got))
        && let (Ok(a), Ok(b)) = (exp.parse::<f64>(), got_num.parse::<f64>())
        && (a - b).abs() < NUMERIC_TOLERANCE
    {
        return true;
    }

    normalize(got) == normalize(expected)
}
