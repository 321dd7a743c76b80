//! Scripted gateway shared by use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use async_trait::async_trait;
use solver_domain::{CompletionOutcome, CompletionRequest};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued outcomes in order and records every request it receives.
///
/// Once the script runs out it answers with a `Failure`.
pub(crate) struct ScriptedGateway {
    outcomes: Mutex<VecDeque<CompletionOutcome>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(outcomes: Vec<CompletionOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from(outcomes)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script made only of successful texts.
    pub(crate) fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| CompletionOutcome::success(*t)).collect())
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> CompletionOutcome {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| CompletionOutcome::failure("No more responses", None))
    }
}

/// Gateway that panics on every call.
pub(crate) struct PanickingGateway;

#[async_trait]
impl LlmGateway for PanickingGateway {
    async fn complete(&self, _request: &CompletionRequest) -> CompletionOutcome {
        panic!("gateway exploded");
    }
}

/// Logger that keeps event types in memory.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push(event.event_type.to_string());
    }
}
