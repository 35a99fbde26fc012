//! Query command handler.
//!
//! Runs the matching pipeline only: load the corpus, score the
//! question, and print the winning variant and its record. No LLM is
//! involved, which makes this the primary surface for inspecting
//! matcher behavior.

use clap::Args;
use faqdex_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;

/// Match a question against the corpus without calling an LLM
#[derive(Args, Debug)]
pub struct QueryCommand {
    /// The question to match
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl QueryCommand {
    /// Execute the query command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing query command");

        let question = self
            .get_question()
            .ok_or_else(|| AppError::Config("No question provided".to_string()))?;

        let corpus_path = config.require_corpus_file()?;
        let result = faqdex_matcher::load_and_match(corpus_path, &question)?;

        if self.json {
            let output = serde_json::json!({
                "question": question,
                "variant": result.variant,
                "recordIndex": result.record_index,
                "score": result.score,
                "canonicalQuestion": result.record.canonical_question,
                "answer": result.record.answer_text,
                "notes": result.record.notes,
            });

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("Matched variant:  {}", result.variant);
            println!("Canonical:        {}", result.record.canonical_question);
            println!("Score:            {:.3}", result.score);
            println!("Answer:           {}", result.record.answer_text);
            if !result.record.notes.is_empty() {
                println!("Notes:            {}", result.record.notes);
            }
        }

        Ok(())
    }

    /// Get the question text from the positional argument or a file.
    fn get_question(&self) -> Option<String> {
        self.question.clone().or_else(|| {
            self.file.as_ref().and_then(|path| {
                std::fs::read_to_string(path)
                    .map_err(|e| tracing::error!("Failed to read question file: {}", e))
                    .ok()
                    .map(|s| s.trim().to_string())
            })
        })
    }
}
