//! Progress reporting for batch generation and evaluation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use solver_application::ports::progress::BatchProgressNotifier;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reports batch progress with an indicatif progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    correct: AtomicUsize,
    graded: AtomicUsize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            correct: AtomicUsize::new(0),
            graded: AtomicUsize::new(0),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize, already_done: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Solving");
        pb.set_position(already_done as u64);
        if already_done > 0 {
            pb.set_message(format!("resumed at {}", already_done));
        }

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_item_complete(&self, _index: usize, answer: &str) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            if answer.starts_with("Error") {
                pb.set_message(format!("{} last answer failed", "x".red()));
            }
            pb.inc(1);
        }
    }

    fn on_item_graded(&self, _index: usize, correct: bool) {
        let graded = self.graded.fetch_add(1, Ordering::SeqCst) + 1;
        let correct = if correct {
            self.correct.fetch_add(1, Ordering::SeqCst) + 1
        } else {
            self.correct.load(Ordering::SeqCst)
        };

        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(format!("{}/{} correct", correct, graded));
            pb.inc(1);
        }
    }

    fn on_item_skipped(&self, _index: usize) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, processed: usize, interrupted: bool) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            if interrupted {
                pb.abandon_with_message(format!(
                    "{} after {} items",
                    "Interrupted".yellow(),
                    processed
                ));
            } else {
                pb.finish_with_message(format!("{}", "done".green()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl BatchProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total: usize, already_done: usize) {
        eprintln!(
            "{} {} items ({} already done)",
            "->".cyan(),
            total.to_string().bold(),
            already_done
        );
    }

    fn on_item_complete(&self, index: usize, answer: &str) {
        if answer.starts_with("Error") {
            eprintln!("  {} item {}", "x".red(), index + 1);
        } else {
            eprintln!("  {} item {}", "v".green(), index + 1);
        }
    }

    fn on_item_graded(&self, index: usize, correct: bool) {
        let mark = if correct { "v".green() } else { "x".red() };
        eprintln!("  {} item {}", mark, index + 1);
    }

    fn on_item_skipped(&self, index: usize) {
        eprintln!("  {} item {} (no reference)", "-".yellow(), index + 1);
    }

    fn on_batch_complete(&self, processed: usize, interrupted: bool) {
        if interrupted {
            eprintln!("{} after {} items", "Interrupted".yellow(), processed);
        }
    }
}
