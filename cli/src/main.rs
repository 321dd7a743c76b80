//! CLI entrypoint for quorum-solver
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use solver_application::{
    BatchProgressNotifier, ConversationLogger, EvaluateInput, EvaluateUseCase, LlmGateway,
    NoProgress, RunBatchUseCase, SolveProblemUseCase, verify_answers,
};
use solver_infrastructure::{
    ConfigLoader, FileConfig, JsonResultStore, JsonlConversationLogger, OpenAiGateway,
    load_json_array, load_problems,
};
use solver_presentation::{
    Cli, Commands, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting quorum-solver");

    // === Configuration ===
    let mut config = load_config(&cli)?;
    if let Some(model) = &cli.model {
        config.endpoint.model = model.clone();
    }
    for warning in config.validate() {
        warn!("Config: {}", warning);
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    if let Commands::Config = cli.command {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        println!();
        let mut shown = config.clone();
        if shown.endpoint.api_key.is_some() {
            shown.endpoint.api_key = Some("***".to_string());
        }
        println!("{}", toml::to_string_pretty(&shown)?);
        return Ok(());
    }

    if let Commands::Verify {
        input,
        output,
        limit,
        format,
    } = &cli.command
    {
        return verify(input, output, *limit, *format);
    }

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(OpenAiGateway::from_config(&config.endpoint));
    let mut solver = SolveProblemUseCase::new(gateway, config.solver_params());
    if let Some(path) = &cli.transcript {
        match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                solver = solver.with_conversation_logger(logger);
            }
            None => warn!("Continuing without transcript"),
        }
    }
    let solver = Arc::new(solver);

    // Ctrl-C stops batch commands between problems; elsewhere it keeps its
    // default behaviour and ends the process.
    let cancellation = cli.command.is_batch().then(cancel_on_ctrl_c);

    let show_progress = !cli.quiet && config.output.show_progress;
    let progress: Box<dyn BatchProgressNotifier> = if !show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match cli.command {
        Commands::Solve { question, domain } => {
            let answer = solver.solve_prompt(&question, domain.as_deref()).await;
            println!("{}", answer);
        }

        Commands::Generate {
            input,
            output,
            limit,
        } => {
            let problems = load_problems(&input)
                .with_context(|| format!("Failed to read problems from {}", input.display()))?;
            let store = Arc::new(JsonResultStore::new(&output));
            let runner = RunBatchUseCase::new(solver, store, config.batch_params());

            let state = runner.load_state()?;
            let result = runner
                .execute(
                    &problems,
                    state,
                    limit,
                    progress.as_ref(),
                    cancellation,
                )
                .await?;

            eprint!("{}", ConsoleFormatter::format_batch(&result));
        }

        Commands::Evaluate {
            input,
            limit,
            batch_size,
            strict,
            format,
        } => {
            let mut problems = load_problems(&input)
                .with_context(|| format!("Failed to read problems from {}", input.display()))?;
            if limit > 0 {
                problems.truncate(limit);
            }

            let evaluator = EvaluateUseCase::new(solver);
            let report = evaluator
                .execute(
                    EvaluateInput::new(problems)
                        .with_batch_size(batch_size)
                        .with_strict(strict),
                    progress.as_ref(),
                    cancellation,
                )
                .await?;

            let text = match format {
                OutputFormat::Text => ConsoleFormatter::format_evaluation(&report),
                OutputFormat::Json => ConsoleFormatter::format_json(&report),
            };
            println!("{}", text);
        }

        Commands::Verify { .. } | Commands::Config => {}
    }

    Ok(())
}

fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let handle = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nInterrupted! Finishing the current problem and saving progress...");
            handle.cancel();
        }
    });
    token
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    config.map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

fn verify(
    input: &Path,
    output: &Path,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let questions = load_json_array(input)
        .with_context(|| format!("Failed to read problems from {}", input.display()))?;
    let answers = load_json_array(output)
        .with_context(|| format!("Failed to read answers from {}", output.display()))?;

    let expected = limit.unwrap_or(questions.len());
    let report = verify_answers(&answers, expected);

    let text = match format {
        OutputFormat::Text => ConsoleFormatter::format_verification(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", text);

    if !report.is_valid() {
        anyhow::bail!("{} format issues found", report.issues.len());
    }
    Ok(())
}
