//! CLI for the Merge Settings Auditor.
//!
//! This tool audits merge commit message settings across the repositories
//! of an organization, user, or single repository, and can bulk-update the
//! settings that deviate from the desired values.

use clap::{Args, Parser, Subcommand};
use merge_settings_auditor::{
    render_compact, render_verbose, resolve_token, DesiredSettings, MergeMessage, MergeTitle,
    RunReport, Runner, RunnerConfig, SquashMessage, SquashTitle,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Merge Settings Auditor - audit and bulk-update GitHub merge commit message settings.
#[derive(Parser, Debug)]
#[command(name = "ghms", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Repository management commands.
    #[command(subcommand)]
    Repos(ReposCommand),
}

#[derive(Subcommand, Debug)]
enum ReposCommand {
    /// List repositories with their merge settings.
    List {
        #[command(flatten)]
        common: CommonArgs,

        /// Show the full per-repository table instead of the summary.
        #[arg(long, short)]
        verbose: bool,
    },

    /// Set squash merges to use the PR title and body.
    ///
    /// Equivalent to `update-merge --squash-title PR_TITLE --squash-message PR_BODY`.
    FixSquash {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        mode: ApplyArgs,
    },

    /// Update merge commit message settings to explicit values.
    UpdateMerge {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        desired: DesiredArgs,

        #[command(flatten)]
        mode: ApplyArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Target organization, user, or "owner/repo".
    target: String,

    /// Include archived repositories.
    #[arg(long)]
    include_archived: bool,

    /// Include forked repositories.
    #[arg(long)]
    include_forks: bool,

    /// GitHub token (defaults to GITHUB_TOKEN or the gh CLI).
    #[arg(long)]
    token: Option<String>,

    /// Base URL of the GitHub API (for Enterprise instances).
    #[arg(long)]
    github_api_url: Option<String>,
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// Apply the changes instead of previewing them.
    #[arg(long)]
    apply: bool,
}

/// Desired setting values; at least one must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = true)]
struct DesiredArgs {
    /// Squash merge commit title (PR_TITLE or COMMIT_OR_PR_TITLE).
    #[arg(long, value_name = "VALUE")]
    squash_title: Option<SquashTitle>,

    /// Squash merge commit message (PR_BODY, COMMIT_MESSAGES, or BLANK).
    #[arg(long, value_name = "VALUE")]
    squash_message: Option<SquashMessage>,

    /// Merge commit title (PR_TITLE or MERGE_MESSAGE).
    #[arg(long, value_name = "VALUE")]
    merge_title: Option<MergeTitle>,

    /// Merge commit message (PR_TITLE, PR_BODY, or BLANK).
    #[arg(long, value_name = "VALUE")]
    merge_message: Option<MergeMessage>,
}

impl From<DesiredArgs> for DesiredSettings {
    fn from(args: DesiredArgs) -> Self {
        Self {
            squash_title: args.squash_title,
            squash_message: args.squash_message,
            merge_title: args.merge_title,
            merge_message: args.merge_message,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let cli = Cli::parse();

    // Run the main logic. Per-repository failures are part of a normal
    // report; only fatal errors (no token, target not found) exit non-zero.
    match run(cli).await {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Repos(command) => run_repos(command).await,
    }
}

async fn run_repos(command: ReposCommand) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ReposCommand::List { common, verbose } => {
            // Audit against the standard baseline; never applies anything.
            let report = audit(common, DesiredSettings::standard(), false).await?;
            if verbose {
                println!("{}", render_verbose(&report));
            } else {
                println!("{}", render_compact(&report));
            }
        }
        ReposCommand::FixSquash { common, mode } => {
            let report = audit(common, DesiredSettings::fix_squash(), mode.apply).await?;
            println!("{}", render_compact(&report));
        }
        ReposCommand::UpdateMerge {
            common,
            desired,
            mode,
        } => {
            let report = audit(common, desired.into(), mode.apply).await?;
            println!("{}", render_compact(&report));
        }
    }

    Ok(())
}

/// Resolves credentials, builds a runner, and executes one run.
async fn audit(
    common: CommonArgs,
    desired: DesiredSettings,
    apply: bool,
) -> Result<RunReport, Box<dyn std::error::Error>> {
    let resolved = resolve_token(common.token)?;
    info!(source = %resolved.source, "Resolved GitHub token");

    let mut config = RunnerConfig::new(common.target, resolved.token, desired, apply)
        .with_include_archived(common.include_archived)
        .with_include_forks(common.include_forks);
    if let Some(url) = common.github_api_url {
        config = config.with_base_uri(url);
    }

    let runner = Runner::new(config)?;
    Ok(runner.run().await?)
}
