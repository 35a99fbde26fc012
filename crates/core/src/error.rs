//! Error types for faqdex.
//!
//! A single unified error enum covers every failure category in the
//! application: corpus loading, index construction, match resolution,
//! configuration, LLM calls, and prompt rendering.

use thiserror::Error;

/// Unified error type for faqdex.
///
/// All fallible functions return `Result<T, AppError>`. Errors are
/// propagated, never swallowed; matcher failures are not retried since
/// they are deterministic given the same inputs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Corpus source unreadable or malformed (missing required fields,
    /// invalid structure). Fatal, surfaced to the caller.
    #[error("Corpus data source error: {0}")]
    DataSource(String),

    /// The flattened variant list is empty, so there is nothing to
    /// index. Vectorization over zero documents is undefined.
    #[error("Corpus contains no question variants to index")]
    EmptyCorpus,

    /// A selected variant could not be mapped back to an owning record.
    /// The index and the resolver are out of sync; this is an internal
    /// invariant violation, not a normal runtime condition.
    #[error("Selected variant could not be resolved to a record: {0}")]
    UnresolvedMatch(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt assembly errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
