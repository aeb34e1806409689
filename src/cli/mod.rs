use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Exchange Stream Profiler
#[derive(Parser)]
#[command(name = "market-feed-profiler")]
#[command(about = "Discover field paths, presence and value statistics in raw market feed NDJSON")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Profile NDJSON records from a file, directory or glob pattern
    Profile(commands::profile::ProfileCommand),
    /// Look up or list field dictionary entries
    Dictionary(commands::dictionary::DictionaryCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Profile(command) => command.run().await,
        Commands::Dictionary(command) => command.run(),
    }
}
