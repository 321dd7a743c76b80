//! Answer file format verification.
//!
//! Checks a parsed answers file against the submission rules: one object per
//! problem, each with a string `output` shorter than [`MAX_OUTPUT_CHARS`].

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Outputs must be strictly shorter than this many characters.
pub const MAX_OUTPUT_CHARS: usize = 5000;

/// A single problem found in an answers file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatIssue {
    NotAnObject { index: usize },
    MissingOutput { index: usize },
    NonStringOutput { index: usize, found: &'static str },
    TooLong { index: usize, chars: usize },
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::NotAnObject { index } => write!(f, "Item {}: Not an object", index),
            FormatIssue::MissingOutput { index } => {
                write!(f, "Item {}: Missing 'output' key", index)
            }
            FormatIssue::NonStringOutput { index, found } => {
                write!(f, "Item {}: 'output' is not a string (found {})", index, found)
            }
            FormatIssue::TooLong { index, chars } => write!(
                f,
                "Item {}: Answer too long ({} chars, max {})",
                index, chars, MAX_OUTPUT_CHARS
            ),
        }
    }
}

/// Outcome of [`verify_answers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub expected_count: usize,
    pub actual_count: usize,
    pub issues: Vec<FormatIssue>,
}

impl VerificationReport {
    /// Count mismatch is only a warning: it is normal while a run is in progress.
    pub fn count_matches(&self) -> bool {
        self.expected_count == self.actual_count
    }

    /// No structural issues (the count may still differ).
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check every item of an answers file. One issue at most per item.
pub fn verify_answers(answers: &[Value], expected_count: usize) -> VerificationReport {
    let issues = answers
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let Some(object) = item.as_object() else {
                return Some(FormatIssue::NotAnObject { index });
            };
            let Some(output) = object.get("output") else {
                return Some(FormatIssue::MissingOutput { index });
            };
            let Some(text) = output.as_str() else {
                return Some(FormatIssue::NonStringOutput {
                    index,
                    found: json_type_name(output),
                });
            };
            let chars = text.chars().count();
            (chars >= MAX_OUTPUT_CHARS).then_some(FormatIssue::TooLong { index, chars })
        })
        .collect();

    VerificationReport {
        expected_count,
        actual_count: answers.len(),
        issues,
    }
}
