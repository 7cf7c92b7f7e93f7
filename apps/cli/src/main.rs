//! Fleetgov CLI - Command-line companion for the governance console.
//!
//! The `fgov` command drives the fleet-telemetry core: fetch a snapshot
//! of the agent registry, print governance KPIs, and exercise the
//! stress-mode and refresh paths without the console frontend.

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fleetgov_core::{TelemetryConfig, TelemetryService};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Fleetgov CLI - fleet telemetry for AI-agent governance
#[derive(Parser, Debug)]
#[command(
    name = "fgov",
    author,
    version,
    about = "Fleetgov - AI fleet governance telemetry",
    long_about = "Fleetgov (fgov) synthesizes per-agent operational telemetry\nfor an AI-agent governance console: compliance, latency, and\nthroughput records under a TTL-bounded snapshot cache."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Workspace directory holding .fleetgov/config.toml (defaults to cwd)
    #[arg(short = 'w', long, global = true)]
    workspace: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a telemetry snapshot and print the agent registry
    Fetch {
        /// Generate under stress-mode bounds
        #[arg(long)]
        stressed: bool,

        /// Batch size (defaults to the configured default_agents)
        #[arg(short = 'n', long)]
        agents: Option<usize>,

        /// Output the batch as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print fleet KPIs and the security event log
    Summary {
        /// Generate under stress-mode bounds
        #[arg(long)]
        stressed: bool,

        /// Batch size (defaults to the configured default_agents)
        #[arg(short = 'n', long)]
        agents: Option<usize>,

        /// Number of critical records to list in the event log
        #[arg(long, default_value = "3")]
        events: usize,

        /// Output the KPIs as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout is reserved for command output.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let workspace_root = match args.workspace {
        Some(root) => root,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let config = TelemetryConfig::load(&workspace_root)
        .context("Failed to load workspace configuration")?;
    let service = TelemetryService::new(config)?;

    match args.command {
        Command::Fetch { stressed, agents, json } => {
            commands::fetch::execute(&service, stressed, agents, json)
        }
        Command::Summary { stressed, agents, events, json } => {
            commands::summary::execute(&service, stressed, agents, events, json)
        }
    }
}
