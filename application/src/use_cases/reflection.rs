//! Reflection (iterative critique-and-repair) strategy.
//!
//! ```text
//! Drafting ──▶ Critiquing ──approved──▶ Done
//!                 │   ▲
//!       incorrect │   │ repaired
//!                 ▼   │
//!               Repairing
//! ```
//!
//! At most `max_steps` critique rounds run. Any failed call ends the loop and
//! the last accepted answer is returned; critique text is never returned.

use crate::config::SolverParams;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::direct::DirectReasoning;
use crate::use_cases::shared::{complete_logged, error_answer};
use solver_domain::core::string::truncate;
use solver_domain::{
    CritiqueVerdict, DomainTag, PromptTemplate, ReflectionState, ReflectionStop,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a critique-repair loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionOutcome {
    /// Last accepted answer.
    pub answer: String,
    /// Critique rounds performed.
    pub steps: usize,
    pub stop: ReflectionStop,
}

/// Iterative critique-and-repair.
#[derive(Clone)]
pub struct Reflection {
    gateway: Arc<dyn LlmGateway>,
    direct: DirectReasoning,
    params: SolverParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Reflection {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SolverParams) -> Self {
        Self {
            direct: DirectReasoning::new(gateway.clone(), params.clone()),
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.direct = self.direct.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    /// Refine `initial` (or a fresh draft) and return the final answer.
    pub async fn run(
        &self,
        prompt: &str,
        domain: &DomainTag,
        max_steps: usize,
        initial: Option<&str>,
    ) -> String {
        self.refine(prompt, domain, max_steps, initial).await.answer
    }

    /// Run the loop and report how it ended.
    pub async fn refine(
        &self,
        prompt: &str,
        domain: &DomainTag,
        max_steps: usize,
        initial: Option<&str>,
    ) -> ReflectionOutcome {
        let mut state = ReflectionState::initial(initial.is_some());
        let mut answer = initial.map(str::to_string).unwrap_or_default();
        let mut critique = String::new();
        let mut steps = 0;
        let mut stop = ReflectionStop::StepsExhausted;
        let temperature = self.params.direct_temperature;

        info!("Reflection: up to {} rounds ({})", max_steps, domain);

        while !state.is_done() {
            state = match state {
                ReflectionState::Drafting => {
                    match self.direct.attempt(prompt, domain, temperature, "draft").await {
                        Ok(draft) => {
                            answer = draft;
                            ReflectionState::Critiquing
                        }
                        Err(message) => {
                            answer = error_answer(&message);
                            stop = ReflectionStop::ClientFailure;
                            ReflectionState::Done
                        }
                    }
                }
                ReflectionState::Critiquing if steps >= max_steps => {
                    stop = ReflectionStop::StepsExhausted;
                    ReflectionState::Done
                }
                ReflectionState::Critiquing => {
                    steps += 1;
                    let request = self.params.request(
                        PromptTemplate::critique_prompt(prompt, &answer),
                        PromptTemplate::critique_system(),
                        temperature,
                    );
                    match self.call(&request, "critique").await {
                        Ok(text) if CritiqueVerdict::parse(&text).is_correct() => {
                            debug!("Reflection round {}: approved", steps);
                            stop = ReflectionStop::Approved;
                            ReflectionState::Done
                        }
                        Ok(text) => {
                            debug!(
                                "Reflection round {}: needs repair: {}",
                                steps,
                                truncate(&text, 120)
                            );
                            critique = text;
                            ReflectionState::Repairing
                        }
                        Err(message) => {
                            warn!("Reflection: critique failed, keeping answer: {}", message);
                            stop = ReflectionStop::ClientFailure;
                            ReflectionState::Done
                        }
                    }
                }
                ReflectionState::Repairing => {
                    let request = self.params.request(
                        PromptTemplate::repair_prompt(prompt, &answer, &critique),
                        PromptTemplate::repair_system(),
                        temperature,
                    );
                    match self.call(&request, "repair").await {
                        Ok(repaired) => {
                            answer = repaired;
                            ReflectionState::Critiquing
                        }
                        Err(message) => {
                            warn!("Reflection: repair failed, keeping answer: {}", message);
                            stop = ReflectionStop::ClientFailure;
                            ReflectionState::Done
                        }
                    }
                }
                ReflectionState::Done => ReflectionState::Done,
            };
        }

        info!("Reflection finished after {} rounds: {:?}", steps, stop);

        ReflectionOutcome {
            answer,
            steps,
            stop,
        }
    }

    async fn call(
        &self,
        request: &solver_domain::CompletionRequest,
        phase: &'static str,
    ) -> Result<String, String> {
        complete_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            request,
            phase,
        )
        .await
        .into_result()
    }
}
