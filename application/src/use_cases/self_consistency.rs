//! Self-consistency (repeated-sampling vote) strategy.
//!
//! Draws `n` direct-reasoning samples at the sampling temperature, one after
//! another, and returns the raw response that represents the most frequent
//! normalized candidate.
//!
//! # Failed samples
//!
//! By default a failed sample stops the round: the endpoint has already
//! exhausted its retries, so further samples are unlikely to fare better.
//! The failure is kept out of the tally and the vote runs over what was
//! collected. With `count_failed_samples` enabled, failure strings are
//! recorded as ordinary candidates and sampling continues.

use crate::config::SolverParams;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::direct::DirectReasoning;
use crate::use_cases::shared::{SolveError, error_answer};
use solver_domain::{DomainTag, Sample, VoteTally};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one voting round.
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    /// Final answer: a raw sample, or `"Error: ..."` if nothing succeeded.
    pub answer: String,
    pub tally: VoteTally,
    /// Samples requested but not collected because a call failed.
    pub skipped: usize,
    /// Last failure message observed, if any.
    pub last_error: Option<String>,
}

/// Repeated-sampling vote.
#[derive(Clone)]
pub struct SelfConsistency {
    direct: DirectReasoning,
    params: SolverParams,
}

impl SelfConsistency {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SolverParams) -> Self {
        Self {
            direct: DirectReasoning::new(gateway, params.clone()),
            params,
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.direct = self.direct.with_conversation_logger(logger);
        self
    }

    /// Vote over `n` samples and return the winning raw response.
    pub async fn run(&self, prompt: &str, domain: &DomainTag, n: usize) -> Result<String, SolveError> {
        Ok(self.vote(prompt, domain, n).await?.answer)
    }

    /// Vote over `n` samples, keeping the tally for inspection.
    pub async fn vote(
        &self,
        prompt: &str,
        domain: &DomainTag,
        n: usize,
    ) -> Result<VoteOutcome, SolveError> {
        if n == 0 {
            return Err(SolveError::NoSamples);
        }

        info!("Self-consistency: drawing {} samples ({})", n, domain);

        let mut tally = VoteTally::new();
        let mut last_error = None;
        let mut skipped = 0;

        for i in 0..n {
            match self
                .direct
                .attempt(prompt, domain, self.params.sampling_temperature, "sample")
                .await
            {
                Ok(text) => tally.record(Sample::new(text)),
                Err(message) if self.params.count_failed_samples => {
                    tally.record(Sample::new(error_answer(&message)));
                    last_error = Some(message);
                }
                Err(message) => {
                    skipped = n - i;
                    warn!(
                        "Self-consistency: sample {}/{} failed, stopping early: {}",
                        i + 1,
                        n,
                        message
                    );
                    last_error = Some(message);
                    break;
                }
            }
        }

        debug!("Vote tally: {}", tally.summary());

        let answer = match tally.select_response() {
            Some(response) => response.to_string(),
            None => error_answer(last_error.as_deref().unwrap_or("no samples succeeded")),
        };

        Ok(VoteOutcome {
            answer,
            tally,
            skipped,
            last_error,
        })
    }
}
