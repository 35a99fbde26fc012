//! faqdex CLI
//!
//! Main entry point for the faqdex command-line tool.
//! Matches free-text questions against an FAQ corpus and generates
//! answers from the best-matching entry.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, CorpusCommand, QueryCommand};
use faqdex_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// faqdex - FAQ matching with LLM answer generation
#[derive(Parser, Debug)]
#[command(name = "faqdex")]
#[command(about = "Match questions against an FAQ corpus and generate answers", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the FAQ corpus JSON file
    #[arg(short = 'C', long, global = true, env = "FAQDEX_CORPUS")]
    corpus: Option<PathBuf>,

    /// Path to config file
    #[arg(short = 'c', long, global = true, env = "FAQDEX_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// LLM provider (openai, ollama)
    #[arg(short, long, global = true, env = "FAQDEX_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "FAQDEX_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question and generate an answer from the best FAQ match
    Ask(AskCommand),

    /// Match a question against the corpus without calling an LLM
    Query(QueryCommand),

    /// Corpus inspection and validation
    Corpus(CorpusCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from config file and environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.corpus,
        cli.config,
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("faqdex starting");
    tracing::debug!("Corpus: {:?}", config.corpus_file);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Query(_) => "query",
        Commands::Corpus(_) => "corpus",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Query(cmd) => cmd.execute(&config).await,
        Commands::Corpus(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
