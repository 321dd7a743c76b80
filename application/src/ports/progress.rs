//! Progress notification port
//!
//! Defines the interface for reporting progress while a batch of problems is
//! being solved.

/// Callback for progress updates during batch execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait BatchProgressNotifier: Send + Sync {
    /// Called once before the first problem; `already_done` counts resumed items
    fn on_batch_start(&self, total: usize, already_done: usize);

    /// Called after each problem is solved (`index` is absolute, 0-based)
    fn on_item_complete(&self, index: usize, answer: &str);

    /// Called when the batch finishes or is interrupted
    fn on_batch_complete(&self, processed: usize, interrupted: bool);

    /// Called when an evaluation item has been graded
    fn on_item_graded(&self, _index: usize, _correct: bool) {}

    /// Called when an evaluation item has no reference answer
    fn on_item_skipped(&self, _index: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BatchProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total: usize, _already_done: usize) {}
    fn on_item_complete(&self, _index: usize, _answer: &str) {}
    fn on_batch_complete(&self, _processed: usize, _interrupted: bool) {}
}
