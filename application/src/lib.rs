//! Application layer for quorum-solver
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BatchParams, SolverParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::LlmGateway,
    progress::{BatchProgressNotifier, NoProgress},
    result_store::{AnswerRecord, MemoryResultStore, ResultStore, StoreError},
};
pub use use_cases::composite::CompositeMath;
pub use use_cases::direct::DirectReasoning;
pub use use_cases::evaluate::{
    BatchSummary, DomainStats, EvaluateError, EvaluateInput, EvaluateUseCase, EvaluationReport,
    GradedItem,
};
pub use use_cases::reflection::{Reflection, ReflectionOutcome};
pub use use_cases::run_batch::{BatchError, BatchOutput, BatchState, RunBatchUseCase};
pub use use_cases::self_consistency::{SelfConsistency, VoteOutcome};
pub use use_cases::shared::SolveError;
pub use use_cases::solve_problem::{ERROR_ANSWER, Route, SolveProblemUseCase};
pub use use_cases::verify_answers::{
    FormatIssue, MAX_OUTPUT_CHARS, VerificationReport, verify_answers,
};
