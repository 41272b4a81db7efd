//! # orbita CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; the API endpoint and session file come from
//! flags or the environment.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use orbita_cli::dashboard::run_dashboard;
use orbita_cli::intake::{run_quote, QuoteArgs};
use orbita_cli::projects::{run_projects, ProjectsArgs};
use orbita_cli::quotes::{run_quotes, QuotesArgs};
use orbita_cli::session::{run_login, run_logout, LoginArgs};

use orbita_client::{CredentialStore, SiteClient, SiteConfig};

/// Orbita Agency Console
///
/// Submit quote requests to the agency and, with an admin session,
/// manage leads and the project portfolio.
#[derive(Parser, Debug)]
#[command(name = "orbita", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base URL (overrides ORBITA_API_URL).
    #[arg(long, global = true)]
    api_url: Option<Url>,

    /// Session file path (overrides ORBITA_SESSION_FILE).
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a quote request (public, no session needed).
    Quote(QuoteArgs),

    /// Log in to the admin console and persist the session.
    Login(LoginArgs),

    /// Log out and clear the persisted session.
    Logout,

    /// Show lead and portfolio totals.
    Dashboard,

    /// Manage leads: list, set-status, delete.
    Quotes(QuotesArgs),

    /// Manage portfolio projects: list, create, edit, delete.
    Projects(ProjectsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let config = match cli.api_url {
        Some(url) => SiteConfig::new(url),
        None => SiteConfig::from_env()?,
    };
    tracing::debug!(base_url = %config.base_url, "resolved backend endpoint");

    let client = SiteClient::new(config)?;
    let store = cli
        .session_file
        .map(CredentialStore::new)
        .unwrap_or_else(CredentialStore::from_env);

    match cli.command {
        Commands::Quote(args) => run_quote(&args, &client).await,
        Commands::Login(args) => run_login(&args, &client, &store).await,
        Commands::Logout => run_logout(&store),
        Commands::Dashboard => run_dashboard(&client, &store).await,
        Commands::Quotes(args) => run_quotes(&args, &client, &store).await,
        Commands::Projects(args) => run_projects(&args, &client, &store).await,
    }
}
