//! Evaluate use case.
//!
//! Solves labelled problems batch by batch and grades each prediction against
//! the reference answer. In strict mode the run stops after the first batch
//! that is not fully correct.

use crate::ports::progress::BatchProgressNotifier;
use crate::use_cases::shared::check_cancelled;
use crate::use_cases::solve_problem::SolveProblemUseCase;
use serde::Serialize;
use solver_domain::{Problem, grade_answer};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Label used in statistics for problems without a domain.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Errors that can occur during evaluation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
}

/// One graded prediction.
#[derive(Debug, Clone, Serialize)]
pub struct GradedItem {
    /// Position in the evaluated slice (0-based).
    pub index: usize,
    pub domain: String,
    pub prompt: String,
    pub expected: String,
    pub prediction: String,
    pub correct: bool,
}

/// Correct count for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// 1-based batch number.
    pub number: usize,
    /// Graded items; skipped items are not counted.
    pub size: usize,
    pub correct: usize,
}

impl BatchSummary {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.size
    }
}

/// Per-domain totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainStats {
    pub total: usize,
    pub correct: usize,
}

impl DomainStats {
    /// Accuracy in percent.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

/// Result of an evaluation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    pub items: Vec<GradedItem>,
    pub batches: Vec<BatchSummary>,
    pub domains: BTreeMap<String, DomainStats>,
    /// Problems without a reference answer.
    pub skipped: usize,
    /// Strict mode stopped the run.
    pub stopped_early: bool,
    pub interrupted: bool,
}

impl EvaluationReport {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn correct(&self) -> usize {
        self.items.iter().filter(|i| i.correct).count()
    }

    pub fn accuracy(&self) -> f64 {
        DomainStats {
            total: self.total(),
            correct: self.correct(),
        }
        .accuracy()
    }
}

/// Input for the [`EvaluateUseCase`].
#[derive(Debug, Clone)]
pub struct EvaluateInput {
    pub problems: Vec<Problem>,
    pub batch_size: usize,
    pub strict: bool,
}

impl EvaluateInput {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            batch_size: 10,
            strict: false,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Use case for grading the solver against a labelled dataset.
pub struct EvaluateUseCase {
    solver: Arc<SolveProblemUseCase>,
}

impl EvaluateUseCase {
    pub fn new(solver: Arc<SolveProblemUseCase>) -> Self {
        Self { solver }
    }

    pub async fn execute(
        &self,
        input: EvaluateInput,
        progress: &dyn BatchProgressNotifier,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<EvaluationReport, EvaluateError> {
        if input.batch_size == 0 {
            return Err(EvaluateError::InvalidBatchSize);
        }

        let mut report = EvaluationReport::default();
        info!(
            "Evaluating {} items (batch_size={}, strict={})",
            input.problems.len(),
            input.batch_size,
            input.strict
        );
        progress.on_batch_start(input.problems.len(), 0);

        'batches: for (batch_index, batch) in input.problems.chunks(input.batch_size).enumerate() {
            let offset = batch_index * input.batch_size;
            let mut summary = BatchSummary {
                number: batch_index + 1,
                size: 0,
                correct: 0,
            };

            for (i, problem) in batch.iter().enumerate() {
                if check_cancelled(&cancellation_token).is_err() {
                    report.interrupted = true;
                    report.batches.push(summary);
                    break 'batches;
                }

                let index = offset + i;
                let Some(expected) = problem.expected.as_deref() else {
                    warn!("Problem {} has no reference answer, skipping", index + 1);
                    report.skipped += 1;
                    progress.on_item_skipped(index);
                    continue;
                };

                let label = problem
                    .domain
                    .as_ref()
                    .map(|d| d.as_str().to_string())
                    .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string());
                let domain = problem.domain.clone().unwrap_or_default();

                let prediction = self.solver.solve(problem).await;
                let correct = grade_answer(expected, &prediction, &domain);
                debug!(
                    "Problem {} [{}]: {} (expected {:?})",
                    index + 1,
                    label,
                    if correct { "CORRECT" } else { "INCORRECT" },
                    expected
                );

                let stats = report.domains.entry(label.clone()).or_default();
                stats.total += 1;
                summary.size += 1;
                if correct {
                    stats.correct += 1;
                    summary.correct += 1;
                }

                progress.on_item_graded(index, correct);
                report.items.push(GradedItem {
                    index,
                    domain: label,
                    prompt: problem.prompt.clone(),
                    expected: expected.to_string(),
                    prediction,
                    correct,
                });
            }

            info!(
                "Batch {} summary: {}/{} correct",
                summary.number, summary.correct, summary.size
            );
            let perfect = summary.is_perfect();
            report.batches.push(summary);

            if input.strict && !perfect {
                warn!("Strict mode: batch {} failed, stopping evaluation", batch_index + 1);
                report.stopped_early = true;
                break;
            }
        }

        progress.on_batch_complete(report.total(), report.interrupted);
        info!(
            "Evaluation finished: {}/{} correct",
            report.correct(),
            report.total()
        );

        Ok(report)
    }
}
