//! Prompt assembly crate for faqdex.
//!
//! Turns a matched FAQ entry and the user's question into the prompt
//! sent to the generation provider. Templates use Handlebars syntax; a
//! built-in definition is used unless a YAML override file is
//! configured.

pub mod builder;
pub mod loader;
pub mod types;

// Re-export main API
pub use builder::{build_prompt, match_variables};
pub use loader::{default_prompt, load_prompt, DEFAULT_PROMPT_ID};
pub use types::{BuiltPrompt, BuiltPromptMetadata, PromptDefinition};
