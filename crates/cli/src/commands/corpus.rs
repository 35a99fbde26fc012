//! Corpus command handler.
//!
//! Inspection tooling for a corpus file: eager validation and summary
//! statistics.

use clap::{Args, Subcommand};
use faqdex_core::{config::AppConfig, AppError, AppResult};
use faqdex_matcher::{corpus_stats, load_corpus};

/// Corpus inspection and validation
#[derive(Args, Debug)]
pub struct CorpusCommand {
    #[command(subcommand)]
    pub action: CorpusAction,
}

#[derive(Subcommand, Debug)]
pub enum CorpusAction {
    /// Validate the corpus file and report problems
    Validate(CorpusValidateCommand),
    /// Show corpus statistics
    Stats(CorpusStatsCommand),
}

impl CorpusCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.action {
            CorpusAction::Validate(cmd) => cmd.execute(config).await,
            CorpusAction::Stats(cmd) => cmd.execute(config).await,
        }
    }
}

/// Validate the corpus file
#[derive(Args, Debug)]
pub struct CorpusValidateCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CorpusValidateCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing corpus validate command");

        let corpus_path = config.require_corpus_file()?;
        let corpus = load_corpus(corpus_path)?;

        // Building the index surfaces an empty flattened variant list,
        // which record-level parsing alone cannot catch.
        let stats = corpus_stats(&corpus)?;

        if self.json {
            let output = serde_json::json!({
                "valid": true,
                "path": corpus_path,
                "records": stats.records,
                "variants": stats.variants,
            });
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            println!(
                "{:?} is valid: {} records, {} variants",
                corpus_path, stats.records, stats.variants
            );
        }

        Ok(())
    }
}

/// Show corpus statistics
#[derive(Args, Debug)]
pub struct CorpusStatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CorpusStatsCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing corpus stats command");

        let corpus_path = config.require_corpus_file()?;
        let corpus = load_corpus(corpus_path)?;
        let stats = corpus_stats(&corpus)?;

        if self.json {
            let output = serde_json::json!({
                "path": corpus_path,
                "records": stats.records,
                "variants": stats.variants,
                "vocabularySize": stats.vocabulary_size,
            });
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("Corpus:           {:?}", corpus_path);
            println!("Records:          {}", stats.records);
            println!("Variants:         {}", stats.variants);
            println!("Vocabulary terms: {}", stats.vocabulary_size);
        }

        Ok(())
    }
}
