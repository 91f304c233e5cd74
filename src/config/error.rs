//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric environment variable could not be parsed.
    #[error("failed to parse {var}='{value}': {source}")]
    ParseInt {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A tolerance was negative or not an integer.
    #[error("invalid tolerance '{value}': must be an integer >= 0")]
    InvalidTolerance { value: String },

    /// The harness cannot build an empty tree.
    #[error("tree size must be greater than zero")]
    ZeroTreeSize,

    /// No tolerance to run queries at.
    #[error("at least one tolerance is required")]
    EmptyTolerances,
}
