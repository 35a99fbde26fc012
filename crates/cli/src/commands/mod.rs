//! Command handlers for the faqdex CLI.

pub mod ask;
pub mod corpus;
pub mod query;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use corpus::CorpusCommand;
pub use query::QueryCommand;
