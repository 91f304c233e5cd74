//! Environment-backed configuration for the benchmark harness.
//!
//! Most settings have defaults. Override with `BKTREE_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;

use crate::metric::Distance;

/// Tolerances queried when `BKTREE_TOLERANCES` is not set.
pub const DEFAULT_TOLERANCES: [Distance; 5] = [0, 1, 2, 8, 32];

/// Harness configuration loaded from environment variables.
///
/// Use [`HarnessConfig::from_env`] to read `BKTREE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Number of random items indexed. Default: `10_000`.
    pub tree_size: usize,

    /// Number of random queries per tolerance. Default: `1_000`.
    pub queries: usize,

    /// Tolerances to query at. Default: `0,1,2,8,32`.
    pub tolerances: Vec<Distance>,

    /// RNG seed for items and queries. Default: `42`.
    pub seed: u64,

    /// Check every query against a linear scan. Default: `false`.
    pub verify: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tree_size: 10_000,
            queries: 1_000,
            tolerances: DEFAULT_TOLERANCES.to_vec(),
            seed: 42,
            verify: false,
        }
    }
}

impl HarnessConfig {
    const ENV_TREE_SIZE: &'static str = "BKTREE_TREE_SIZE";
    const ENV_QUERIES: &'static str = "BKTREE_QUERIES";
    const ENV_TOLERANCES: &'static str = "BKTREE_TOLERANCES";
    const ENV_SEED: &'static str = "BKTREE_SEED";
    const ENV_VERIFY: &'static str = "BKTREE_VERIFY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let tree_size = Self::parse_usize_from_env(Self::ENV_TREE_SIZE, defaults.tree_size)?;
        let queries = Self::parse_usize_from_env(Self::ENV_QUERIES, defaults.queries)?;
        let tolerances = Self::parse_tolerances_from_env(defaults.tolerances)?;
        let seed = Self::parse_u64_from_env(Self::ENV_SEED, defaults.seed)?;
        let verify = Self::parse_bool_from_env(Self::ENV_VERIFY, defaults.verify);

        Ok(Self {
            tree_size,
            queries,
            tolerances,
            seed,
            verify,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tree_size == 0 {
            return Err(ConfigError::ZeroTreeSize);
        }
        if self.tolerances.is_empty() {
            return Err(ConfigError::EmptyTolerances);
        }
        Ok(())
    }

    /// Parses a comma-separated tolerance list such as `"0, 1,2"`.
    ///
    /// Empty segments are skipped. Negative or non-integer values are rejected.
    pub fn parse_tolerances(value: &str) -> Result<Vec<Distance>, ConfigError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<Distance>()
                    .map_err(|_| ConfigError::InvalidTolerance {
                        value: part.to_string(),
                    })
            })
            .collect()
    }

    fn parse_tolerances_from_env(default: Vec<Distance>) -> Result<Vec<Distance>, ConfigError> {
        match env::var(Self::ENV_TOLERANCES) {
            Ok(value) => Self::parse_tolerances(&value),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::ParseInt { var, value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::ParseInt { var, value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var: &str, default: bool) -> bool {
        match env::var(var) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => default,
            },
            Err(_) => default,
        }
    }
}
