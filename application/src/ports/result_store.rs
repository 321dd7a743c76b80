//! Result store port
//!
//! Persists the answers produced by a batch run so that an interrupted run can
//! resume where it stopped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by result storage
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed data in {path}: {message}")]
    Malformed { path: String, message: String },
}

/// One persisted answer, in submission format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub output: String,
}

impl AnswerRecord {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Port for the answers checkpoint
///
/// `save` replaces the whole checkpoint; it is called after every solved
/// problem so that no finished answer is lost.
pub trait ResultStore: Send + Sync {
    /// Load previously saved answers. A missing checkpoint is an empty list.
    fn load(&self) -> Result<Vec<AnswerRecord>, StoreError>;

    /// Persist the full list of answers
    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError>;
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemoryResultStore {
    answers: std::sync::Mutex<Vec<AnswerRecord>>,
}

impl MemoryResultStore {
    pub fn new(initial: Vec<AnswerRecord>) -> Self {
        Self {
            answers: std::sync::Mutex::new(initial),
        }
    }

    /// Snapshot of the saved answers
    pub fn snapshot(&self) -> Vec<AnswerRecord> {
        self.answers
            .lock()
            .map(|a| a.clone())
            .unwrap_or_default()
    }
}

impl ResultStore for MemoryResultStore {
    fn load(&self) -> Result<Vec<AnswerRecord>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, answers: &[AnswerRecord]) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.answers.lock() {
            *guard = answers.to_vec();
        }
        Ok(())
    }
}
