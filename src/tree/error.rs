use thiserror::Error;

/// Errors raised by the checked search entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Tolerance below zero; no distance can satisfy it.
    #[error("invalid tolerance {tolerance}: must be >= 0")]
    NegativeTolerance { tolerance: i64 },
}

pub type SearchResult<T> = Result<T, SearchError>;
