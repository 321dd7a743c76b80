//! Majority voting over sampled responses
//!
//! A [`VoteTally`] counts normalized candidates across the samples of one
//! self-consistency round and picks the response that represents the winner.

use super::parsing::extract_candidate;
use serde::{Deserialize, Serialize};

/// One sampled response and the candidate derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Raw response text as returned to the user
    pub response: String,
    /// Normalized candidate, used only for comparison
    pub candidate: String,
}

impl Sample {
    pub fn new(response: impl Into<String>) -> Self {
        let response = response.into();
        let candidate = extract_candidate(&response);
        Self {
            response,
            candidate,
        }
    }
}

/// Count for one distinct candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCount {
    pub candidate: String,
    pub count: usize,
    /// Index (in generation order) of the first sample with this candidate
    pub first_index: usize,
}

/// Ephemeral tally for a single voting round
///
/// # Example
///
/// ```
/// use solver_domain::answer::VoteTally;
///
/// let tally = VoteTally::from_responses(["\\boxed{4}", "Answer: 4", "\\boxed{5}"]);
/// assert_eq!(tally.winner().unwrap().candidate, "4");
/// assert_eq!(tally.select_response(), Some("\\boxed{4}"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteTally {
    samples: Vec<Sample>,
    /// Distinct non-empty candidates in first-seen order
    counts: Vec<CandidateCount>,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tally = Self::new();
        for response in responses {
            tally.record(Sample::new(response));
        }
        tally
    }

    /// Add a sample. Empty candidates are kept as fallbacks but not counted.
    pub fn record(&mut self, sample: Sample) {
        let index = self.samples.len();
        if !sample.candidate.is_empty() {
            match self
                .counts
                .iter_mut()
                .find(|c| c.candidate == sample.candidate)
            {
                Some(entry) => entry.count += 1,
                None => self.counts.push(CandidateCount {
                    candidate: sample.candidate.clone(),
                    count: 1,
                    first_index: index,
                }),
            }
        }
        self.samples.push(sample);
    }

    /// All samples in generation order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Distinct candidate counts in first-seen order
    pub fn counts(&self) -> &[CandidateCount] {
        &self.counts
    }

    /// Number of samples that produced a non-empty candidate
    pub fn counted_samples(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Highest count wins; ties go to the candidate seen first.
    pub fn winner(&self) -> Option<&CandidateCount> {
        self.counts
            .iter()
            .fold(None, |best: Option<&CandidateCount>, c| match best {
                Some(b) if b.count >= c.count => Some(b),
                _ => Some(c),
            })
    }

    /// The response to return for this round.
    ///
    /// First raw response whose candidate equals the winner; when every
    /// candidate was empty, the first raw response unmodified. `None` only
    /// when no sample was recorded.
    pub fn select_response(&self) -> Option<&str> {
        match self.winner() {
            Some(winner) => self
                .samples
                .get(winner.first_index)
                .map(|s| s.response.as_str()),
            None => self.samples.first().map(|s| s.response.as_str()),
        }
    }

    /// Compact summary for logging, e.g. `4: 2, 5: 1`
    pub fn summary(&self) -> String {
        let mut sorted: Vec<&CandidateCount> = self.counts.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
            .iter()
            .map(|c| format!("{}: {}", c.candidate, c.count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
