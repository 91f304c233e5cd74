//! BK-tree library crate (used by the harness binary, benchmarks and integration tests).
//!
//! # Public API Surface
//!
//! ## Core
//! - [`BkTree`] - the index: [`insert`](BkTree::insert) and [`search`](BkTree::search)
//! - [`Metric`], [`Distance`] - the distance capability indexed items provide
//! - [`Match`], [`SearchStats`], [`SearchError`] - query results and errors
//! - [`SharedBkTree`] - cloneable `RwLock` handle for multi-threaded callers
//!
//! ## Metrics
//! - Hamming distance for `u8`..`u128`, `usize` and `[u8; N]`
//! - [`BinaryCode`], [`quantize_to_binary`], [`hamming_distance`] - bit-packed codes
//!
//! ## Harness
//! - [`HarnessConfig`], [`ConfigError`] - `BKTREE_*` environment configuration
//! - [`harness::run`], [`HarnessReport`] - timed build/search against a linear scan

pub mod config;
pub mod harness;
pub mod metric;
pub mod tree;

pub use config::{ConfigError, DEFAULT_TOLERANCES, HarnessConfig};
pub use harness::{HarnessError, HarnessReport, HarnessResult, ToleranceRun, linear_scan};
pub use metric::{BinaryCode, Distance, Metric, hamming_distance, quantize_to_binary};
pub use tree::{BkTree, Match, Node, SearchError, SearchResult, SearchStats, SharedBkTree};
