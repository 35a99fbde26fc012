//! Ask command handler.
//!
//! Runs the full flow: match the question against the corpus, assemble
//! the generation prompt from the winning entry, call the configured
//! provider, and print the answer.

use clap::Args;
use faqdex_core::{config::AppConfig, AppError, AppResult};
use faqdex_llm::{create_client, LlmRequest};
use faqdex_prompt::{build_prompt, load_prompt, match_variables};
use std::path::PathBuf;

/// Ask a question and generate an answer from the best FAQ match
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Maximum tokens in the generated answer
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Temperature for answer generation (0.0-2.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Output as JSON with match metadata
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let question = self
            .get_question()
            .ok_or_else(|| AppError::Config("No question provided".to_string()))?;

        config.validate()?;

        // Match the question against the corpus
        let corpus_path = config.require_corpus_file()?;
        let result = faqdex_matcher::load_and_match(corpus_path, &question)?;

        tracing::info!(
            "Matched variant {:?} (record {}, score {:.3})",
            result.variant,
            result.record_index,
            result.score
        );

        // Assemble the generation prompt from the winning entry
        let prompt_def = load_prompt(config.prompt_file.as_deref())?;
        let variables = match_variables(
            &question,
            &result.record.canonical_question,
            &result.record.notes,
            &result.record.answer_text,
        );
        let built_prompt = build_prompt(&prompt_def, variables)?;

        // Create the LLM client and send the request
        let endpoint = config.resolve_endpoint(&config.provider);
        let api_key = config.resolve_api_key(&config.provider);
        let client = create_client(&config.provider, endpoint.as_deref(), api_key.as_deref())?;

        let mut request = LlmRequest::new(built_prompt.user, &config.model)
            .with_max_tokens(self.max_tokens.unwrap_or(config.max_tokens))
            .with_temperature(self.temperature.unwrap_or(config.temperature));

        if let Some(system) = built_prompt.system {
            request = request.with_system(system);
        }

        let response = client.complete(&request).await?;

        if self.json {
            let output = serde_json::json!({
                "answer": response.content.trim(),
                "model": response.model,
                "provider": config.provider,
                "match": {
                    "variant": result.variant,
                    "canonicalQuestion": result.record.canonical_question,
                    "recordIndex": result.record_index,
                    "score": result.score,
                },
                "usage": {
                    "promptTokens": response.usage.prompt_tokens,
                    "completionTokens": response.usage.completion_tokens,
                    "totalTokens": response.usage.total_tokens,
                },
            });

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("{}", response.content.trim());

            tracing::debug!(
                "Token usage - Prompt: {}, Completion: {}, Total: {}",
                response.usage.prompt_tokens,
                response.usage.completion_tokens,
                response.usage.total_tokens
            );
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
