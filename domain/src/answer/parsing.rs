//! Candidate extraction from free-form model output.
//!
//! These functions turn a raw response into a normalized candidate answer
//! used for vote comparison. They do no I/O and are total: any input yields a
//! (possibly empty) string.
//!
//! # Extraction priority
//!
//! | Priority | Pattern | Example |
//! |----------|---------|---------|
//! | 1 | `\boxed{...}` (first, non-greedy) | `so x = \boxed{42}` → `42` |
//! | 2 | `Answer: ...` to end of text | `Answer: Paris.` → `paris` |
//! | 3 | whole text | `Blue` → `blue` |

use regex::Regex;
use std::sync::LazyLock;

static BOXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\boxed\{(.*?)\}").expect("boxed pattern is valid"));

static ANSWER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)Answer:\s*(.*)$").expect("answer pattern is valid"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-']").expect("disallowed pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize text for equality comparison.
///
/// Trims, lower-cases, replaces every character other than word characters,
/// whitespace, `-` and `'` with a space, then collapses whitespace runs.
///
/// # Examples
///
/// ```
/// use solver_domain::answer::parsing::normalize;
///
/// assert_eq!(normalize("  The Answer, is: 42! "), "the answer is 42");
/// assert_eq!(normalize("O'Neil-Smith"), "o'neil-smith");
/// ```
pub fn normalize(s: &str) -> String {
    let lowered = s.trim().to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, " ");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Extract the normalized candidate answer from a raw response.
///
/// # Examples
///
/// ```
/// use solver_domain::answer::parsing::extract_candidate;
///
/// assert_eq!(extract_candidate(r"Thus x = \boxed{42}."), "42");
/// assert_eq!(extract_candidate("Reasoning...\nAnswer: Paris"), "paris");
/// assert_eq!(extract_candidate(""), "");
/// ```
pub fn extract_candidate(raw: &str) -> String {
    if let Some(inner) = boxed_content(raw) {
        return normalize(inner);
    }

    if let Some(captures) = ANSWER_MARKER.captures(raw)
        && let Some(tail) = captures.get(1)
    {
        return normalize(tail.as_str());
    }

    normalize(raw)
}

/// Content of the first `\boxed{...}` in `text`, if any.
///
/// Stops at the first closing brace, so nested braces are cut short.
pub fn boxed_content(text: &str) -> Option<&str> {
    BOXED
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
