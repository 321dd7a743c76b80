//! Domain classification from prompt text

use crate::core::domain_tag::DomainTag;

/// Classifies an unlabelled prompt into a [`DomainTag`].
///
/// The router depends only on this trait, so the keyword heuristic can be
/// replaced by a model-based classifier without touching dispatch.
pub trait DomainClassifier: Send + Sync {
    fn classify(&self, prompt: &str) -> DomainTag;
}

const CODING_KEYWORDS: &[&str] = &[
    "python",
    "code",
    "function",
    "algorithm",
    "class",
    "programming",
    "def ",
    "return",
    "import",
    "java",
    "c++",
];

const MATH_KEYWORDS: &[&str] = &[
    "calculate",
    "compute",
    "solve",
    "equation",
    "how many",
    "probability",
    "value of",
    "remainder",
    "sum",
    "integral",
    "derivative",
    "$",
    "=",
    "find the",
];

/// Substring-based classifier.
///
/// Coding vocabulary wins outright. Math vocabulary counts only when the
/// prompt also contains a numeric character (any script, so full-width
/// and superscript digits count). Everything else is `general`.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    coding_keywords: Vec<String>,
    math_keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            coding_keywords: CODING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            math_keywords: MATH_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Replace the coding vocabulary (matched against the lower-cased prompt)
    pub fn with_coding_keywords(mut self, keywords: Vec<String>) -> Self {
        self.coding_keywords = keywords;
        self
    }

    /// Replace the math vocabulary (matched against the lower-cased prompt)
    pub fn with_math_keywords(mut self, keywords: Vec<String>) -> Self {
        self.math_keywords = keywords;
        self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainClassifier for KeywordClassifier {
    fn classify(&self, prompt: &str) -> DomainTag {
        let lower = prompt.to_lowercase();

        if self.coding_keywords.iter().any(|k| lower.contains(k.as_str())) {
            return DomainTag::Coding;
        }

        let has_math_keyword = self.math_keywords.iter().any(|k| lower.contains(k.as_str()));
        if has_math_keyword && prompt.chars().any(|c| c.is_numeric()) {
            return DomainTag::Math;
        }

        DomainTag::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_needs_keyword_and_digit() {
        let classifier = KeywordClassifier::new();
        assert_eq!(
            classifier.classify("What is the value of x if 2x=4?"),
            DomainTag::Math
        );
        assert_eq!(
            classifier.classify("Solve the equation for the unknown"),
            DomainTag::General
        );
    }

    #[test]
    fn test_non_ascii_digits_count_as_numbers() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("Compute ２+２"), DomainTag::Math);
        assert_eq!(classifier.classify("Find the value of x²"), DomainTag::Math);
        assert_eq!(
            classifier.classify("Find the value of x squared"),
            DomainTag::General
        );
    }

    #[test]
    fn test_coding_keywords() {
        let classifier = KeywordClassifier::new();
        assert_eq!(
            classifier.classify("Write a function to reverse a string"),
            DomainTag::Coding
        );
        assert_eq!(classifier.classify("Explain C++ templates"), DomainTag::Coding);
    }

    #[test]
    fn test_coding_wins_over_math() {
        let classifier = KeywordClassifier::new();
        assert_eq!(
            classifier.classify("Write Python code to compute 2+2"),
            DomainTag::Coding
        );
    }

    #[test]
    fn test_general_fallback() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("Who wrote Hamlet?"), DomainTag::General);
    }

    #[test]
    fn test_custom_vocabulary() {
        let classifier = KeywordClassifier::new()
            .with_coding_keywords(vec!["rust".to_string()])
            .with_math_keywords(vec![]);
        assert_eq!(classifier.classify("Is Rust fast?"), DomainTag::Coding);
        assert_eq!(classifier.classify("compute 1+1"), DomainTag::General);
    }
}
