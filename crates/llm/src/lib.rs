//! LLM integration crate for faqdex.
//!
//! Provides a provider-agnostic abstraction for the answer-generation
//! call at the end of the ask flow.
//!
//! # Providers
//! - **OpenAI**: text completions API (default)
//! - **Ollama**: local LLM runtime
//!
//! # Example
//! ```no_run
//! use faqdex_llm::{create_client, LlmRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_client("ollama", None, None)?;
//! let request = LlmRequest::new("Answer the question.", "llama3.2");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{OllamaClient, OpenAiClient};
