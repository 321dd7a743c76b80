//! Composite strategy: vote first, then refine the winner.

use crate::config::SolverParams;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::reflection::{Reflection, ReflectionOutcome};
use crate::use_cases::self_consistency::SelfConsistency;
use crate::use_cases::shared::SolveError;
use solver_domain::DomainTag;
use std::sync::Arc;
use tracing::info;

/// Self-consistency over `composite_samples`, then reflection seeded with the
/// vote's output verbatim (no fresh draft).
#[derive(Clone)]
pub struct CompositeMath {
    vote: SelfConsistency,
    reflection: Reflection,
    params: SolverParams,
}

impl CompositeMath {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SolverParams) -> Self {
        Self {
            vote: SelfConsistency::new(gateway.clone(), params.clone()),
            reflection: Reflection::new(gateway, params.clone()),
            params,
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.vote = self.vote.with_conversation_logger(logger.clone());
        self.reflection = self.reflection.with_conversation_logger(logger);
        self
    }

    pub async fn run(&self, prompt: &str) -> Result<String, SolveError> {
        Ok(self.solve(prompt).await?.answer)
    }

    /// Run both stages and return the reflection outcome.
    pub async fn solve(&self, prompt: &str) -> Result<ReflectionOutcome, SolveError> {
        let domain = DomainTag::Math;

        info!("Composite stage 1: self-consistency");
        let seed = self
            .vote
            .run(prompt, &domain, self.params.composite_samples)
            .await?;

        info!("Composite stage 2: reflection");
        Ok(self
            .reflection
            .refine(prompt, &domain, self.params.reflection_steps, Some(&seed))
            .await)
    }
}
