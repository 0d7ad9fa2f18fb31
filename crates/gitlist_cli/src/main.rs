//! Gitlist CLI - audit the repositories of GitHub organizations.

mod commands;
mod config;
mod progress;
mod shutdown;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::Term;
use tracing_subscriber::EnvFilter;

use crate::commands::audit::AuditArgs;

/// Exit status after Ctrl+C.
const INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "gitlist")]
#[command(version)]
#[command(about = "Audit GitHub organization repositories by activity")]
#[command(
    long_about = "Gitlist fetches every repository of a list of GitHub organizations, \
works out when each one was last active, and labels it with a maintenance status \
(archive, delete, or keep). The result is a semicolon separated CSV report or a raw \
JSON dump of the fetched records."
)]
#[command(after_long_help = r#"EXAMPLES
    Write a classified report for the organizations in orgs.txt:
        $ gitlist audit --orgs orgs.txt --outputcsv report.csv

    Dump the raw repository records as JSON:
        $ gitlist audit --orgs orgs.txt --rawjson > repos.json

    Generate shell completions:
        $ gitlist completions bash > ~/.local/share/bash-completion/completions/gitlist

CONFIGURATION
    Gitlist reads configuration from:
      1. ~/.config/gitlist/config.toml (or $XDG_CONFIG_HOME/gitlist/config.toml)
      2. ./gitlist.toml
      3. Environment variables (GITLIST_* prefix, e.g., GITLIST_GITHUB__TOKEN)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    GITLIST_GITHUB__TOKEN        GitHub personal access token
    GITHUB_TOKEN                 Used when no token is configured otherwise
    GITLIST_GITHUB__API_URL      GitHub Enterprise API root
    GITLIST_QUERY__PAGE_SIZE     Repositories per GraphQL page (default: 20)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, classify and report the repositories of a list of organizations
    #[command(after_long_help = commands::audit::AUDIT_AFTER_HELP)]
    Audit(AuditArgs),
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Generate man page(s)
    Man {
        /// Output directory for man pages (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Structured logging only when not attached to a terminal; on a TTY
    // progress bars take its place. Logs go to stderr, stdout carries JSON.
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("gitlist=info,gitlist_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    let result = tokio::select! {
        result = run(cli) => result,
        () = shutdown::interrupted() => return ExitCode::from(INTERRUPTED),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Audit(args) => {
            let config = config::Config::load()
                .map_err(|e| format!("Invalid configuration: {e}"))?;
            commands::audit::handle_audit(args, &config).await
        }
        Commands::Completions { shell } => commands::meta::handle_completions(shell),
        Commands::Man { output } => commands::meta::handle_man(output),
    }
}
