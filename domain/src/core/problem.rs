//! Problem value object

use super::domain_tag::DomainTag;
use serde::{Deserialize, Serialize};

/// A question record handed to the solver (Value Object)
///
/// The serialized field names follow the dataset files: the prompt lives
/// under `input` and the reference answer under `output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Free-text question
    #[serde(rename = "input", alias = "prompt", default)]
    pub prompt: String,
    /// Optional category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainTag>,
    /// Reference answer, read only by graders
    #[serde(
        rename = "output",
        alias = "expected",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expected: Option<String>,
}

impl Problem {
    /// Create an unlabelled problem
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            domain: None,
            expected: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<DomainTag>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Explicit label, if one was supplied and is more specific than `general`
    pub fn explicit_domain(&self) -> Option<&DomainTag> {
        self.domain.as_ref().filter(|d| !d.is_general())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_record() {
        let json = r#"{"input": "What is 2+2?", "domain": "math", "output": "4"}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.prompt, "What is 2+2?");
        assert_eq!(problem.domain, Some(DomainTag::Math));
        assert_eq!(problem.expected.as_deref(), Some("4"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let problem: Problem = serde_json::from_str(r#"{"input": "Hi"}"#).unwrap();
        assert!(problem.domain.is_none());
        assert!(problem.expected.is_none());
    }

    #[test]
    fn test_explicit_domain_ignores_general() {
        assert!(Problem::new("q").with_domain("general").explicit_domain().is_none());
        assert_eq!(
            Problem::new("q").with_domain("coding").explicit_domain(),
            Some(&DomainTag::Coding)
        );
        assert!(Problem::new("q").explicit_domain().is_none());
    }
}
