//! Crawlctl main entry point
//!
//! Command-line client for driving crawl-ingestion jobs against a chatbot
//! knowledge-base backend.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use crawlctl::api::ApiClient;
use crawlctl::auth::FileTokenStore;
use crawlctl::config::load_config_with_hash;
use crawlctl::notify::ConsoleNotifier;
use crawlctl::workflow::{Outcome, Phase, WorkflowController};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Crawlctl: a crawl-job workflow client
///
/// Crawlctl talks to a remote crawl-ingestion backend: analyze a target
/// site, curate the discovered pages, start the crawl job, poll its status
/// until it finishes, or stop it.
#[derive(Parser, Debug)]
#[command(name = "crawlctl")]
#[command(version = "1.0.0")]
#[command(about = "A crawl-job workflow client", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the target site and print the discovered pages
    Analyze {
        /// Preview indexes to remove before printing (repeatable)
        #[arg(long, value_name = "INDEX")]
        drop: Vec<usize>,
    },

    /// Run the full workflow: analyze, start, and poll until the job ends
    Run {
        /// Preview indexes to remove before starting (repeatable)
        #[arg(long, value_name = "INDEX")]
        drop: Vec<usize>,
    },

    /// Print one status snapshot of a job started elsewhere
    Status {
        /// The job id to query
        #[arg(long)]
        job: String,
    },

    /// Ask the backend to stop a running job
    Stop {
        /// The job id to stop
        #[arg(long)]
        job: String,
    },

    /// Validate the configuration and show what would be submitted
    DryRun,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    tracing::debug!("Configuration loaded (hash: {})", config_hash);

    match cli.command {
        Command::Analyze { drop } => handle_analyze(&config, drop).await,
        Command::Run { drop } => handle_run(&config, drop).await,
        Command::Status { job } => handle_status(&config, &job).await,
        Command::Stop { job } => handle_stop(&config, &job).await,
        Command::DryRun => handle_dry_run(&config),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawlctl=info,warn"),
            1 => EnvFilter::new("crawlctl=debug,info"),
            2 => EnvFilter::new("crawlctl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the API client from configuration
fn build_client(config: &crawlctl::config::Config) -> anyhow::Result<ApiClient> {
    let store = Arc::new(FileTokenStore::new(&config.api.token_path));
    let client = ApiClient::new(&config.api, store).context("Failed to build API client")?;
    Ok(client)
}

/// Builds the workflow controller from configuration
fn build_controller(config: &crawlctl::config::Config) -> anyhow::Result<WorkflowController> {
    let client = build_client(config)?;
    Ok(WorkflowController::from_config(
        config,
        client,
        Arc::new(ConsoleNotifier::new()),
    ))
}

/// Handles the analyze subcommand: preview what a crawl would ingest
async fn handle_analyze(
    config: &crawlctl::config::Config,
    drop: Vec<usize>,
) -> anyhow::Result<()> {
    let mut controller = build_controller(config)?;

    controller.analyze().await?;
    apply_drops(&mut controller, drop)?;

    print_preview(&controller);
    Ok(())
}

/// Handles the run subcommand: full analyze/start/poll workflow
async fn handle_run(config: &crawlctl::config::Config, drop: Vec<usize>) -> anyhow::Result<()> {
    let mut controller = build_controller(config)?;

    if controller.analyze().await? != Phase::Analyzed {
        bail!("Analysis returned no pages to ingest");
    }
    apply_drops(&mut controller, drop)?;
    if controller.phase() != Phase::Analyzed {
        bail!("All discovered pages were dropped; nothing to start");
    }

    print_preview(&controller);

    controller.start().await?;
    let outcome = controller.run_to_completion().await?;

    match outcome {
        Phase::Done(Outcome::Completed) => Ok(()),
        Phase::Done(Outcome::Stopped) => bail!("Crawl was stopped before completing"),
        _ => bail!("Crawl did not complete successfully"),
    }
}

/// Handles the status subcommand: one snapshot of an existing job
async fn handle_status(config: &crawlctl::config::Config, job_id: &str) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let status = client.status(job_id).await?;

    println!("Job:       {}", job_id);
    println!("Progress:  {}/{} pages ({}%)", status.processed, status.total, status.percent());
    println!("Succeeded: {}", status.success);
    println!("Errors:    {}", status.errors);
    if let Some(url) = &status.current_url {
        println!("Current:   {}", url);
    }
    if let Some(error) = &status.error {
        println!("Failed:    {}", error);
    } else if status.completed {
        println!("Completed");
    }

    Ok(())
}

/// Handles the stop subcommand
async fn handle_stop(config: &crawlctl::config::Config, job_id: &str) -> anyhow::Result<()> {
    let client = build_client(config)?;
    client.stop(job_id).await?;
    println!("✓ Stop requested for job {}", job_id);
    Ok(())
}

/// Handles the dry-run subcommand: validates config and shows the plan
fn handle_dry_run(config: &crawlctl::config::Config) -> anyhow::Result<()> {
    println!("=== Crawlctl Dry Run ===\n");

    println!("Backend:");
    println!("  Base URL: {}", config.api.base_url);
    println!("  Chatbot: {}", config.api.chatbot_id);
    println!("  Token file: {}", config.api.token_path);
    println!("  Request timeout: {}ms", config.api.request_timeout_ms);

    println!("\nCrawl:");
    println!("  Target: {}", config.crawl.target_url);
    println!("  Depth: {}", config.crawl.depth);
    println!("  Page limit: {}", config.crawl.limit);
    println!("  Content types: {:?}", config.crawl.content_types);

    println!(
        "\nExclude patterns ({}):",
        config.crawl.exclude_patterns.len()
    );
    for pattern in &config.crawl.exclude_patterns {
        println!("  - {}", pattern);
    }

    println!("\nWorkflow:");
    println!("  Poll interval: {}ms", config.workflow.poll_interval_ms);

    println!("\n✓ Configuration is valid");
    Ok(())
}

/// Removes the given preview indexes, highest first so they stay valid
fn apply_drops(controller: &mut WorkflowController, mut drop: Vec<usize>) -> anyhow::Result<()> {
    drop.sort_unstable();
    drop.dedup();
    for index in drop.into_iter().rev() {
        controller
            .remove_url(index)
            .with_context(|| format!("Cannot drop preview index {}", index))?;
        if !controller.phase().can_start() {
            // Preview emptied out; later drops would be invalid anyway
            break;
        }
    }
    Ok(())
}

/// Prints the discovered-URL preview
fn print_preview(controller: &WorkflowController) {
    let urls = controller.discovered();
    println!("Discovered pages ({}):", urls.len());
    for (i, url) in urls.iter().enumerate() {
        println!("  [{}] {}", i, url);
    }
}
