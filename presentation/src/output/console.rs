//! Console output formatter for solver reports

use colored::Colorize;
use solver_application::{BatchOutput, EvaluationReport, VerificationReport};

/// Formats batch, evaluation and verification reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary line after `generate`
    pub fn format_batch(output: &BatchOutput) -> String {
        if output.interrupted {
            format!(
                "{} Saved {} of {} answers ({} this run). Re-run to resume.\n",
                "Interrupted.".yellow().bold(),
                output.state.processed(),
                output.total,
                output.processed
            )
        } else if output.processed == 0 {
            format!(
                "{} All {} items already processed.\n",
                "v".green(),
                output.total
            )
        } else {
            format!(
                "{} Generated {} answers ({} total).\n",
                "v".green(),
                output.processed,
                output.state.processed()
            )
        }
    }

    /// Full evaluation report: per-item results, batch and domain summaries
    pub fn format_evaluation(report: &EvaluationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Evaluation Results"));

        for item in &report.items {
            let verdict = if item.correct {
                "CORRECT".green().bold()
            } else {
                "INCORRECT".red().bold()
            };
            output.push_str(&format!(
                "\n{} [{}] {}\n  {} {}\n  {} {}\n",
                format!("Problem {}", item.index + 1).cyan().bold(),
                item.domain,
                verdict,
                "Expected:".bold(),
                item.expected,
                "Got:".bold(),
                Self::preview(&item.prediction, 200)
            ));
        }

        output.push_str(&Self::section_header("Batches"));
        for batch in &report.batches {
            output.push_str(&format!(
                "  Batch {}: {}/{} correct\n",
                batch.number, batch.correct, batch.size
            ));
        }
        if report.stopped_early {
            output.push_str(&format!(
                "  {}\n",
                "[STRICT MODE] Batch failed. Evaluation stopped.".yellow()
            ));
        }
        if report.interrupted {
            output.push_str(&format!("  {}\n", "Interrupted.".yellow()));
        }

        output.push_str(&Self::section_header("Domain Breakdown"));
        for (domain, stats) in &report.domains {
            output.push_str(&format!(
                "  {}: {}/{} ({:.1}%)\n",
                domain,
                stats.correct,
                stats.total,
                stats.accuracy()
            ));
        }

        if report.skipped > 0 {
            output.push_str(&format!(
                "\n{} {} items without a reference answer were skipped\n",
                "!".yellow(),
                report.skipped
            ));
        }

        output.push_str(&format!(
            "\n{} {}/{} correct ({:.1}%)\n",
            "Total:".bold(),
            report.correct(),
            report.total(),
            report.accuracy()
        ));

        output
    }

    /// Verification report for an answers file
    pub fn format_verification(report: &VerificationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Number of expected answers: {}\nNumber of answers:          {}\n",
            report.expected_count, report.actual_count
        ));

        if report.count_matches() {
            output.push_str(&format!("{} Lengths match.\n", "v".green()));
        } else {
            output.push_str(&format!(
                "{} Answers count ({}) does not match expected ({}).\n   (This is expected if generation is still in progress)\n",
                "WARNING:".yellow().bold(),
                report.actual_count,
                report.expected_count
            ));
        }

        for issue in &report.issues {
            output.push_str(&format!("  {}\n", issue));
        }

        if report.is_valid() {
            output.push_str(&format!(
                "\n{} Format check passed (structure, types, limits).\n",
                "v".green()
            ));
        } else {
            output.push_str(&format!(
                "\n{} Format check failed: {} issues.\n",
                "x".red(),
                report.issues.len()
            ));
        }

        output
    }

    /// Any serializable report as pretty JSON
    pub fn format_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn preview(text: &str, max_chars: usize) -> String {
        let single_line = text.replace('\n', " ");
        if single_line.chars().count() > max_chars {
            let cut: String = single_line.chars().take(max_chars).collect();
            format!("{}...", cut)
        } else {
            single_line
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("-- {} --", title).cyan().bold())
    }
}
