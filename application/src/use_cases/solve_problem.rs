//! Solve Problem use case.
//!
//! The single entry point callers use to answer one problem. It resolves the
//! problem's domain, dispatches to the matching strategy and contains every
//! failure: `solve` always returns a string, `"Error"` when the strategy
//! returned an error or panicked.
//!
//! | Domain      | Strategy                                   |
//! |-------------|--------------------------------------------|
//! | math        | [`CompositeMath`]                          |
//! | coding      | [`Reflection`] from a fresh draft          |
//! | other       | [`DirectReasoning`] at temperature 0.0     |

use crate::config::SolverParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::composite::CompositeMath;
use crate::use_cases::direct::DirectReasoning;
use crate::use_cases::reflection::Reflection;
use crate::use_cases::shared::SolveError;
use futures::FutureExt;
use solver_domain::core::string::truncate;
use solver_domain::{
    DomainClassifier, DomainError, DomainTag, KeywordClassifier, Problem, StrategyKind,
    resolve_domain,
};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Answer returned when a strategy fails outright.
pub const ERROR_ANSWER: &str = "Error";

/// Routing decision for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub domain: DomainTag,
    pub strategy: StrategyKind,
}

/// Use case for answering one problem with the strategy its domain calls for.
pub struct SolveProblemUseCase {
    classifier: Arc<dyn DomainClassifier>,
    params: SolverParams,
    direct: DirectReasoning,
    reflection: Reflection,
    composite: CompositeMath,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SolveProblemUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: SolverParams) -> Self {
        Self {
            classifier: Arc::new(KeywordClassifier::new()),
            direct: DirectReasoning::new(gateway.clone(), params.clone()),
            reflection: Reflection::new(gateway.clone(), params.clone()),
            composite: CompositeMath::new(gateway, params.clone()),
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Replace the keyword heuristic.
    pub fn with_classifier(mut self, classifier: Arc<dyn DomainClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.direct = self.direct.with_conversation_logger(logger.clone());
        self.reflection = self.reflection.with_conversation_logger(logger.clone());
        self.composite = self.composite.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Decide the domain and strategy for `problem` without calling the model.
    pub fn route(&self, problem: &Problem) -> Route {
        let domain = resolve_domain(problem, self.classifier.as_ref());
        let strategy = StrategyKind::for_domain(&domain);
        Route { domain, strategy }
    }

    /// Answer `problem`. Never fails.
    pub async fn solve(&self, problem: &Problem) -> String {
        let started = Instant::now();
        let route = self.route(problem);

        info!(
            "Solving [{} -> {}]: {}",
            route.domain,
            route.strategy,
            truncate(&problem.prompt, 80)
        );

        let outcome = AssertUnwindSafe(self.dispatch(problem, &route))
            .catch_unwind()
            .await;

        let answer = match outcome {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                error!("Strategy {} failed: {}", route.strategy, e);
                ERROR_ANSWER.to_string()
            }
            Err(_) => {
                error!("Strategy {} panicked", route.strategy);
                ERROR_ANSWER.to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            "problem_solved",
            serde_json::json!({
                "prompt": problem.prompt,
                "domain": route.domain.as_str(),
                "strategy": route.strategy.as_str(),
                "answer": answer,
                "elapsed_ms": started.elapsed().as_millis() as u64,
            }),
        ));

        answer
    }

    /// Answer a bare prompt with an optional domain label.
    pub async fn solve_prompt(&self, prompt: &str, domain: Option<&str>) -> String {
        let problem = match domain {
            Some(label) => Problem::new(prompt).with_domain(label),
            None => Problem::new(prompt),
        };
        self.solve(&problem).await
    }

    async fn dispatch(&self, problem: &Problem, route: &Route) -> Result<String, SolveError> {
        if problem.prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt.into());
        }

        let prompt = problem.prompt.as_str();
        match route.strategy {
            StrategyKind::Composite => self.composite.run(prompt).await,
            StrategyKind::Reflection => Ok(self
                .reflection
                .run(prompt, &route.domain, self.params.reflection_steps, None)
                .await),
            StrategyKind::Direct => Ok(self
                .direct
                .run(prompt, &route.domain, self.params.direct_temperature)
                .await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{PanickingGateway, RecordingLogger, ScriptedGateway};
    use solver_domain::{CompletionOutcome, PromptTemplate};

    /// Classifier that always answers with one tag.
    struct FixedClassifier(DomainTag);

    impl DomainClassifier for FixedClassifier {
        fn classify(&self, _prompt: &str) -> DomainTag {
            self.0.clone()
        }
    }

    // ==================== Routing Tests ====================

    #[test]
    fn test_route_examples() {
        let solver = SolveProblemUseCase::new(
            Arc::new(ScriptedGateway::texts(&[])),
            SolverParams::default(),
        );

        let route = solver.route(&Problem::new("What is 2+2?"));
        assert_eq!(route.domain, DomainTag::General);
        assert_eq!(route.strategy, StrategyKind::Direct);

        let route = solver.route(&Problem::new("Write a Python function"));
        assert_eq!(route.domain, DomainTag::Coding);
        assert_eq!(route.strategy, StrategyKind::Reflection);

        let route = solver.route(&Problem::new("Calculate 15% of 200"));
        assert_eq!(route.domain, DomainTag::Math);
        assert_eq!(route.strategy, StrategyKind::Composite);

        let route = solver.route(&Problem::new("What is 2+2?").with_domain("history"));
        assert_eq!(route.domain, DomainTag::Other("history".to_string()));
        assert_eq!(route.strategy, StrategyKind::Direct);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_direct() {
        let solver = SolveProblemUseCase::new(
            Arc::new(ScriptedGateway::texts(&[])),
            SolverParams::default(),
        );

        let labels = ["math", "coding", "general", "self_consistency", "vote"];
        let strategies: Vec<StrategyKind> = labels
            .into_iter()
            .map(|label| solver.route(&Problem::new("x").with_domain(label)).strategy)
            .collect();

        assert_eq!(
            strategies,
            vec![
                StrategyKind::Composite,
                StrategyKind::Reflection,
                StrategyKind::Direct,
                StrategyKind::Direct,
                StrategyKind::Direct,
            ]
        );
    }

    #[tokio::test]
    async fn test_vote_runs_only_inside_composite() {
        let gateway = Arc::new(ScriptedGateway::texts(&[
            "\\boxed{2}",
            "\\boxed{2}",
            "CORRECT",
        ]));
        let params = SolverParams::default().with_composite_samples(2);
        let solver = SolveProblemUseCase::new(gateway.clone(), params);

        let answer = solver.solve(&Problem::new("x").with_domain("math")).await;

        assert_eq!(answer, "\\boxed{2}");
        let requests = gateway.requests();
        assert_eq!(requests.len(), 3);
        for request in &requests[..2] {
            assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        }
        assert_eq!(requests[2].system, PromptTemplate::critique_system());
    }

    #[test]
    fn test_custom_classifier() {
        let solver = SolveProblemUseCase::new(
            Arc::new(ScriptedGateway::texts(&[])),
            SolverParams::default(),
        )
        .with_classifier(Arc::new(FixedClassifier(DomainTag::Coding)));

        assert_eq!(
            solver.route(&Problem::new("anything")).strategy,
            StrategyKind::Reflection
        );
    }

    // ==================== Dispatch Tests ====================

    #[tokio::test]
    async fn test_general_uses_direct_at_zero_temperature() {
        let gateway = Arc::new(ScriptedGateway::texts(&["Paris"]));
        let solver = SolveProblemUseCase::new(gateway.clone(), SolverParams::default());

        let answer = solver
            .solve(&Problem::new("Capital of France?").with_domain("geography"))
            .await;

        assert_eq!(answer, "Paris");
        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.0);
        assert_eq!(
            requests[0].system,
            PromptTemplate::reasoning_system(&DomainTag::General)
        );
    }

    #[tokio::test]
    async fn test_coding_uses_reflection_with_fresh_draft() {
        let gateway = Arc::new(ScriptedGateway::texts(&["def f(): pass", "CORRECT"]));
        let solver = SolveProblemUseCase::new(gateway.clone(), SolverParams::default());

        let answer = solver
            .solve(&Problem::new("Write a function that does nothing"))
            .await;

        assert_eq!(answer, "def f(): pass");
        let requests = gateway.requests();
        assert_eq!(
            requests[0].system,
            PromptTemplate::reasoning_system(&DomainTag::Coding)
        );
        assert_eq!(requests[1].system, PromptTemplate::critique_system());
    }

    #[tokio::test]
    async fn test_math_uses_composite() {
        let gateway = Arc::new(ScriptedGateway::texts(&[
            "\\boxed{30}",
            "\\boxed{30}",
            "\\boxed{31}",
            "\\boxed{30}",
            "\\boxed{30}",
            "CORRECT",
        ]));
        let solver = SolveProblemUseCase::new(gateway.clone(), SolverParams::default());

        let answer = solver.solve(&Problem::new("Calculate 15% of 200")).await;

        assert_eq!(answer, "\\boxed{30}");
        assert_eq!(gateway.call_count(), 6);
    }

    // ==================== Failure Boundary Tests ====================

    #[tokio::test]
    async fn test_strategy_error_becomes_error_answer() {
        let gateway = Arc::new(ScriptedGateway::texts(&[]));
        let params = SolverParams::default().with_composite_samples(0);
        let solver = SolveProblemUseCase::new(gateway, params);

        let answer = solver.solve(&Problem::new("x").with_domain("math")).await;
        assert_eq!(answer, "Error");
    }

    #[tokio::test]
    async fn test_panic_becomes_error_answer() {
        let solver = SolveProblemUseCase::new(Arc::new(PanickingGateway), SolverParams::default());

        let answer = solver.solve(&Problem::new("Who wrote Hamlet?")).await;
        assert_eq!(answer, "Error");
    }

    #[tokio::test]
    async fn test_empty_prompt_is_not_sent() {
        let gateway = Arc::new(ScriptedGateway::texts(&["unused"]));
        let solver = SolveProblemUseCase::new(gateway.clone(), SolverParams::default());

        assert_eq!(solver.solve(&Problem::new("   ")).await, "Error");
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_client_failure_surfaces_as_error_prefix() {
        let gateway = Arc::new(ScriptedGateway::new(vec![CompletionOutcome::failure(
            "HTTP 500: boom",
            Some(500),
        )]));
        let solver = SolveProblemUseCase::new(gateway, SolverParams::default());

        let answer = solver.solve(&Problem::new("Who wrote Hamlet?")).await;
        assert_eq!(answer, "Error: HTTP 500: boom");
    }

    #[tokio::test]
    async fn test_solve_prompt_and_transcript() {
        let gateway = Arc::new(ScriptedGateway::texts(&["42"]));
        let logger = Arc::new(RecordingLogger::default());
        let solver = SolveProblemUseCase::new(gateway, SolverParams::default())
            .with_conversation_logger(logger.clone());

        let answer = solver.solve_prompt("Meaning of life?", Some("philosophy")).await;

        assert_eq!(answer, "42");
        assert_eq!(logger.event_types(), vec!["completion", "problem_solved"]);
    }
}
