//! Cageside main entry point
//!
//! Command-line interface over the scraper: one subcommand per extractor,
//! JSON on stdout.

use cageside::config::load_config;
use cageside::scrape::DEFAULT_FIGHTER;
use cageside::{Config, Scraper};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cageside: UFC athlete and rankings scraper
///
/// Scrapes fighter bios, career stats, divisional rankings, current
/// titleholders, and career record leaderboards, printing each as JSON.
#[derive(Parser, Debug)]
#[command(name = "cageside")]
#[command(version)]
#[command(about = "UFC athlete and rankings scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

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
    /// Scrape a fighter's bio and stats together
    Fighter {
        /// Fighter display name, e.g. "max holloway"
        name: Option<String>,
    },
    /// Scrape a fighter's bio only
    Info {
        /// Fighter display name, e.g. "max holloway"
        name: Option<String>,
    },
    /// Scrape a fighter's stats only
    Stats {
        /// Fighter display name, e.g. "max holloway"
        name: Option<String>,
    },
    /// Scrape the divisional rankings
    Rankings,
    /// Scrape the current titleholders
    Titleholders,
    /// Scrape the career record leaderboards
    Records,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let scraper = Scraper::new(config)?;

    match cli.command {
        Command::Fighter { name } => {
            let fighter = scraper.fighter(&fighter_name(name)).await?;
            print_json(&fighter)?;
        }
        Command::Info { name } => {
            let info = scraper.fighter_info(&fighter_name(name)).await?;
            print_json(&info)?;
        }
        Command::Stats { name } => {
            let stats = scraper.fighter_stats(&fighter_name(name)).await?;
            print_json(&stats)?;
        }
        Command::Rankings => {
            let rankings = scraper.rankings().await?;
            print_json(&rankings)?;
        }
        Command::Titleholders => {
            let titleholders = scraper.titleholders().await?;
            print_json(&titleholders)?;
        }
        Command::Records => {
            let records = scraper.records().await?;
            print_json(&records)?;
        }
    }

    Ok(())
}

/// Applies the default fighter name when the argument is omitted
fn fighter_name(arg: Option<String>) -> String {
    arg.unwrap_or_else(|| DEFAULT_FIGHTER.to_string())
}

/// Pretty-prints a record as JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cageside=warn"),
            1 => EnvFilter::new("cageside=info,warn"),
            2 => EnvFilter::new("cageside=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
