//! Direct reasoning strategy.
//!
//! One chain-of-thought call with a domain-specific system instruction. This
//! is the building block the other strategies sample and seed from.

use crate::config::SolverParams;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::shared::{complete_logged, error_answer};
use solver_domain::{DomainTag, PromptTemplate};
use std::sync::Arc;

/// Single-pass chain-of-thought reasoning.
#[derive(Clone)]
pub struct DirectReasoning {
    gateway: Arc<dyn LlmGateway>,
    params: SolverParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DirectReasoning {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SolverParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Answer `prompt` in one call.
    ///
    /// Returns the trimmed response, or `"Error: {message}"` when the call
    /// failed after all retries.
    pub async fn run(&self, prompt: &str, domain: &DomainTag, temperature: f32) -> String {
        match self.attempt(prompt, domain, temperature, "direct").await {
            Ok(text) => text,
            Err(message) => error_answer(&message),
        }
    }

    /// Same call as [`run`](Self::run), keeping success and failure apart.
    pub(crate) async fn attempt(
        &self,
        prompt: &str,
        domain: &DomainTag,
        temperature: f32,
        phase: &'static str,
    ) -> Result<String, String> {
        let request = self.params.request(
            PromptTemplate::reasoning_prompt(prompt),
            PromptTemplate::reasoning_system(domain),
            temperature,
        );
        complete_logged(
            self.gateway.as_ref(),
            self.conversation_logger.as_ref(),
            &request,
            phase,
        )
        .await
        .into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{RecordingLogger, ScriptedGateway};
    use solver_domain::CompletionOutcome;

    fn direct(gateway: Arc<ScriptedGateway>) -> DirectReasoning {
        DirectReasoning::new(gateway, SolverParams::default())
    }

    #[tokio::test]
    async fn test_success_is_trimmed() {
        let gateway = Arc::new(ScriptedGateway::texts(&["  The answer is \\boxed{7}.\n"]));
        let answer = direct(gateway.clone())
            .run("What is 3+4?", &DomainTag::Math, 0.0)
            .await;

        assert_eq!(answer, "The answer is \\boxed{7}.");
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_uses_domain_system_and_suffix() {
        let gateway = Arc::new(ScriptedGateway::texts(&["ok"]));
        direct(gateway.clone())
            .run("Write a function", &DomainTag::Coding, 0.0)
            .await;

        let requests = gateway.requests();
        assert_eq!(requests[0].prompt, "Write a function\n\nLet's think step by step.");
        assert_eq!(
            requests[0].system,
            PromptTemplate::reasoning_system(&DomainTag::Coding)
        );
        assert_eq!(requests[0].temperature, 0.0);
    }

    #[tokio::test]
    async fn test_unknown_label_uses_general_instruction() {
        let gateway = Arc::new(ScriptedGateway::texts(&["ok"]));
        direct(gateway.clone())
            .run("Tell me about tides", &DomainTag::from("physics"), 0.0)
            .await;

        assert_eq!(
            gateway.requests()[0].system,
            PromptTemplate::reasoning_system(&DomainTag::General)
        );
    }

    #[tokio::test]
    async fn test_failure_becomes_error_string() {
        let gateway = Arc::new(ScriptedGateway::new(vec![CompletionOutcome::failure(
            "HTTP 500: boom",
            Some(500),
        )]));
        let answer = direct(gateway).run("q", &DomainTag::General, 0.0).await;

        assert_eq!(answer, "Error: HTTP 500: boom");
    }

    #[tokio::test]
    async fn test_transcript_records_completion() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            CompletionOutcome::success("a"),
            CompletionOutcome::failure("down", None),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let direct = direct(gateway).with_conversation_logger(logger.clone());

        direct.run("q", &DomainTag::General, 0.0).await;
        direct.run("q", &DomainTag::General, 0.0).await;

        assert_eq!(logger.event_types(), vec!["completion", "completion_failed"]);
    }
}
