use thiserror::Error;

use crate::config::ConfigError;
use crate::metric::Distance;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "verification failed at tolerance {tolerance} for query {query:#018x}: \
         linear scan found {expected} matches, tree returned {actual}"
    )]
    VerificationFailed {
        tolerance: Distance,
        query: u64,
        expected: usize,
        actual: usize,
    },
}

pub type HarnessResult<T> = Result<T, HarnessError>;
