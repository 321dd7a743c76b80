//! Shared utilities for use cases.
//!
//! Contains the strategy error type, cancellation checking, and the logged
//! completion helper used by every strategy (Direct, SelfConsistency,
//! Reflection).

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use solver_domain::core::string::truncate;
use solver_domain::{CompletionOutcome, CompletionRequest, DomainError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Errors that can escape a strategy.
///
/// Model failures are not errors here: they travel as
/// [`CompletionOutcome::Failure`] and are folded into answer strings. Only
/// structural problems reach this type, and the facade turns them into
/// `"Error"`.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("No samples were requested")]
    NoSamples,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Check if cancellation has been requested.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), DomainError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(DomainError::Cancelled);
    }
    Ok(())
}

/// Issue one completion and record it in the transcript.
///
/// `phase` names the step for logs ("direct", "sample", "critique", "repair").
pub(crate) async fn complete_logged(
    gateway: &dyn LlmGateway,
    logger: &dyn ConversationLogger,
    request: &CompletionRequest,
    phase: &'static str,
) -> CompletionOutcome {
    debug!(
        "[{}] prompt: {}",
        phase,
        truncate(&request.prompt, 200)
    );

    let outcome = gateway.complete(request).await;

    match &outcome {
        CompletionOutcome::Success {
            text, http_status, ..
        } => {
            logger.log(ConversationEvent::new(
                "completion",
                serde_json::json!({
                    "phase": phase,
                    "system": request.system,
                    "prompt": request.prompt,
                    "temperature": request.temperature,
                    "http_status": http_status,
                    "text": text,
                }),
            ));
        }
        CompletionOutcome::Failure {
            error,
            last_http_status,
        } => {
            warn!("[{}] completion failed: {}", phase, error);
            logger.log(ConversationEvent::new(
                "completion_failed",
                serde_json::json!({
                    "phase": phase,
                    "prompt": request.prompt,
                    "error": error,
                    "last_http_status": last_http_status,
                }),
            ));
        }
    }

    outcome
}

/// Format a model failure the way strategies surface it to callers.
pub(crate) fn error_answer(message: &str) -> String {
    format!("Error: {}", message)
}
