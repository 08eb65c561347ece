//! # sllm CLI Application
//!
//! Command-line entry point for the sllm control plane client.
//!
//! ## Subcommands
//!
//! - `fine-tuning`: submit a fine-tuning job described by a JSON document
//!
//! The server location comes from `LLM_SERVER_URL` (default
//! `http://127.0.0.1:8343/`). Log verbosity follows `RUST_LOG`.

mod telemetry;

use clap::{CommandFactory, Parser, Subcommand};
use sllm::fine_tuning::{FineTuningArgs, FineTuningCommand, ServerConfig};
use sllm::logging::TracingLog;
use std::sync::Arc;
use telemetry::OtelGuard;

#[derive(Parser)]
#[command(name = "sllm", author, version, about = "Client for a model-serving control plane", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fine-tuning base model.
    FineTuning(FineTuningArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _otel: OtelGuard = telemetry::init_tracing_subscriber()?;

    let outcome = match cli.command {
        Some(Commands::FineTuning(args)) => fine_tuning_command(args).await,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    if let Err(err) = &outcome {
        tracing::error!("{:#}", err);
    }
    outcome
}

async fn fine_tuning_command(args: FineTuningArgs) -> anyhow::Result<()> {
    let server = ServerConfig::from_env();
    let command = FineTuningCommand::new(args, &server, Arc::new(TracingLog))?;

    // The outcome, including an absent one, is already in the log
    command.run().await?;

    Ok(())
}
