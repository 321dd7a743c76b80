//! LLM Gateway port
//!
//! Defines the interface for calling the remote text-generation endpoint.

use async_trait::async_trait;
use solver_domain::{CompletionOutcome, CompletionRequest};
use std::sync::Arc;

/// Gateway for text generation
///
/// This port defines how the application layer talks to the model.
/// Implementations (adapters) live in the infrastructure layer.
///
/// `complete` never fails in the `Result` sense: transient errors are retried
/// inside the adapter and exhaustion is reported as
/// [`CompletionOutcome::Failure`].
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Issue one completion call, retrying up to `request.max_retries` attempts
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome;
}

#[async_trait]
impl<G: LlmGateway + ?Sized> LlmGateway for Arc<G> {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        (**self).complete(request).await
    }
}
