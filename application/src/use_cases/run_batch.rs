//! Run Batch use case.
//!
//! Solves a list of problems in order and checkpoints every answer, so that a
//! run stopped by Ctrl-C (or a crash) resumes where it left off.
//!
//! The batch state is explicit: the caller loads a [`BatchState`], passes it
//! in, and receives the updated state back in [`BatchOutput`].

use crate::config::BatchParams;
use crate::ports::progress::BatchProgressNotifier;
use crate::ports::result_store::{AnswerRecord, ResultStore, StoreError};
use crate::use_cases::shared::check_cancelled;
use crate::use_cases::solve_problem::SolveProblemUseCase;
use solver_domain::Problem;
use solver_domain::core::string::take_chars;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that can occur during batch generation.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Checkpoint error: {0}")]
    Store(#[from] StoreError),
}

/// Answers produced so far, in problem order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchState {
    pub answers: Vec<AnswerRecord>,
}

impl BatchState {
    pub fn new(answers: Vec<AnswerRecord>) -> Self {
        Self { answers }
    }

    /// Number of problems already answered.
    pub fn processed(&self) -> usize {
        self.answers.len()
    }
}

/// Result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub state: BatchState,
    /// Problems answered during this run.
    pub processed: usize,
    /// Problems in scope (after `limit`).
    pub total: usize,
    pub interrupted: bool,
}

impl BatchOutput {
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.state.processed() >= self.total
    }
}

/// Use case for generating answers for a whole dataset.
pub struct RunBatchUseCase {
    solver: Arc<SolveProblemUseCase>,
    store: Arc<dyn ResultStore>,
    params: BatchParams,
}

impl RunBatchUseCase {
    pub fn new(
        solver: Arc<SolveProblemUseCase>,
        store: Arc<dyn ResultStore>,
        params: BatchParams,
    ) -> Self {
        Self {
            solver,
            store,
            params,
        }
    }

    /// Load the checkpoint to resume from.
    ///
    /// A malformed checkpoint is reported and ignored; the run starts over.
    pub fn load_state(&self) -> Result<BatchState, BatchError> {
        match self.store.load() {
            Ok(answers) => {
                if !answers.is_empty() {
                    info!(
                        "Resuming from checkpoint: {} items already processed",
                        answers.len()
                    );
                }
                Ok(BatchState::new(answers))
            }
            Err(e @ StoreError::Malformed { .. }) => {
                warn!("Could not read checkpoint ({}), starting from scratch", e);
                Ok(BatchState::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Solve the problems not yet covered by `state`.
    pub async fn execute(
        &self,
        problems: &[Problem],
        mut state: BatchState,
        limit: Option<usize>,
        progress: &dyn BatchProgressNotifier,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<BatchOutput, BatchError> {
        let in_scope = match limit {
            Some(limit) => &problems[..limit.min(problems.len())],
            None => problems,
        };
        let total = in_scope.len();
        let start = state.processed();

        if start >= total {
            info!("All {} items already processed", total);
            return Ok(BatchOutput {
                state,
                processed: 0,
                total,
                interrupted: false,
            });
        }

        info!("Generating answers for {} remaining items", total - start);
        progress.on_batch_start(total, start);

        let mut processed = 0;
        let mut interrupted = false;

        for (index, problem) in in_scope.iter().enumerate().skip(start) {
            if check_cancelled(&cancellation_token).is_err() {
                interrupted = true;
                break;
            }

            let answer = self.solver.solve(problem).await;
            let answer = self.fit_answer(index, answer);

            progress.on_item_complete(index, &answer);
            state.answers.push(AnswerRecord::new(answer));
            self.store.save(&state.answers)?;
            processed += 1;
        }

        if interrupted {
            warn!(
                "Interrupted: saving partial results ({} items)",
                state.processed()
            );
            self.store.save(&state.answers)?;
        }

        progress.on_batch_complete(processed, interrupted);

        Ok(BatchOutput {
            state,
            processed,
            total,
            interrupted,
        })
    }

    fn fit_answer(&self, index: usize, answer: String) -> String {
        if answer.chars().count() > self.params.max_answer_chars {
            warn!("Answer {} too long, truncating", index + 1);
            take_chars(&answer, self.params.max_answer_chars)
        } else {
            answer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverParams;
    use crate::ports::progress::NoProgress;
    use crate::ports::result_store::MemoryResultStore;
    use crate::use_cases::test_support::ScriptedGateway;
    use std::sync::Mutex;

    fn problems(n: usize) -> Vec<Problem> {
        (0..n)
            .map(|i| Problem::new(format!("Who is person {}?", i)).with_domain("trivia"))
            .collect()
    }

    fn runner(
        gateway: Arc<ScriptedGateway>,
        store: Arc<MemoryResultStore>,
        params: BatchParams,
    ) -> RunBatchUseCase {
        let solver = Arc::new(SolveProblemUseCase::new(gateway, SolverParams::default()));
        RunBatchUseCase::new(solver, store, params)
    }

    /// Records callback order and cancels after a set number of items.
    struct CancellingProgress {
        token: CancellationToken,
        cancel_after: usize,
        events: Mutex<Vec<String>>,
    }

    impl BatchProgressNotifier for CancellingProgress {
        fn on_batch_start(&self, total: usize, already_done: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {}/{}", already_done, total));
        }

        fn on_item_complete(&self, index: usize, _answer: &str) {
            self.events.lock().unwrap().push(format!("item {}", index));
            if index + 1 >= self.cancel_after {
                self.token.cancel();
            }
        }

        fn on_batch_complete(&self, processed: usize, interrupted: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {} {}", processed, interrupted));
        }
    }

    #[tokio::test]
    async fn test_full_run_saves_every_answer() {
        let gateway = Arc::new(ScriptedGateway::texts(&["a", "b", "c"]));
        let store = Arc::new(MemoryResultStore::default());
        let runner = runner(gateway, store.clone(), BatchParams::default());

        let output = runner
            .execute(&problems(3), BatchState::default(), None, &NoProgress, None)
            .await
            .unwrap();

        assert_eq!(output.processed, 3);
        assert!(output.is_complete());
        assert_eq!(
            store.snapshot(),
            vec![
                AnswerRecord::new("a"),
                AnswerRecord::new("b"),
                AnswerRecord::new("c")
            ]
        );
    }

    #[tokio::test]
    async fn test_resume_skips_processed_items() {
        let gateway = Arc::new(ScriptedGateway::texts(&["third"]));
        let store = Arc::new(MemoryResultStore::new(vec![
            AnswerRecord::new("first"),
            AnswerRecord::new("second"),
        ]));
        let runner = runner(gateway.clone(), store.clone(), BatchParams::default());

        let state = runner.load_state().unwrap();
        let output = runner
            .execute(&problems(3), state, None, &NoProgress, None)
            .await
            .unwrap();

        assert_eq!(output.processed, 1);
        assert_eq!(gateway.call_count(), 1);
        assert!(gateway.requests()[0].prompt.starts_with("Who is person 2?"));
        assert_eq!(store.snapshot().len(), 3);
    }

    #[tokio::test]
    async fn test_limit_caps_the_run() {
        let gateway = Arc::new(ScriptedGateway::texts(&["a", "b", "c"]));
        let store = Arc::new(MemoryResultStore::default());
        let runner = runner(gateway.clone(), store, BatchParams::default());

        let output = runner
            .execute(&problems(3), BatchState::default(), Some(2), &NoProgress, None)
            .await
            .unwrap();

        assert_eq!(output.total, 2);
        assert_eq!(output.processed, 2);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_nothing_left_returns_immediately() {
        let gateway = Arc::new(ScriptedGateway::texts(&[]));
        let store = Arc::new(MemoryResultStore::default());
        let runner = runner(gateway.clone(), store, BatchParams::default());
        let state = BatchState::new(vec![AnswerRecord::new("x"), AnswerRecord::new("y")]);

        let output = runner
            .execute(&problems(2), state, None, &NoProgress, None)
            .await
            .unwrap();

        assert_eq!(output.processed, 0);
        assert!(output.is_complete());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_long_answers_are_truncated() {
        let long = "é".repeat(20);
        let gateway = Arc::new(ScriptedGateway::texts(&[long.as_str()]));
        let store = Arc::new(MemoryResultStore::default());
        let runner = runner(gateway, store.clone(), BatchParams { max_answer_chars: 5 });

        runner
            .execute(&problems(1), BatchState::default(), None, &NoProgress, None)
            .await
            .unwrap();

        assert_eq!(store.snapshot()[0].output, "ééééé");
    }

    #[tokio::test]
    async fn test_cancellation_saves_partial_state() {
        let gateway = Arc::new(ScriptedGateway::texts(&["a", "b", "c", "d"]));
        let store = Arc::new(MemoryResultStore::default());
        let runner = runner(gateway.clone(), store.clone(), BatchParams::default());
        let token = CancellationToken::new();
        let progress = CancellingProgress {
            token: token.clone(),
            cancel_after: 2,
            events: Mutex::new(Vec::new()),
        };

        let output = runner
            .execute(&problems(4), BatchState::default(), None, &progress, Some(token))
            .await
            .unwrap();

        assert!(output.interrupted);
        assert!(!output.is_complete());
        assert_eq!(output.processed, 2);
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(gateway.call_count(), 2);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start 0/4", "item 0", "item 1", "done 2 true"]
        );
    }

    #[tokio::test]
    async fn test_malformed_checkpoint_starts_over() {
        struct BrokenStore;

        impl ResultStore for BrokenStore {
            fn load(&self) -> Result<Vec<AnswerRecord>, StoreError> {
                Err(StoreError::Malformed {
                    path: "answers.json".to_string(),
                    message: "expected value".to_string(),
                })
            }

            fn save(&self, _answers: &[AnswerRecord]) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let solver = Arc::new(SolveProblemUseCase::new(
            Arc::new(ScriptedGateway::texts(&[])),
            SolverParams::default(),
        ));
        let runner = RunBatchUseCase::new(solver, Arc::new(BrokenStore), BatchParams::default());

        assert_eq!(runner.load_state().unwrap(), BatchState::default());
    }
}
