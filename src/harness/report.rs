use serde::{Deserialize, Serialize};

use crate::config::HarnessConfig;
use crate::metric::Distance;

/// Outcome of a full harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessReport {
    /// Configuration the run used.
    pub config: HarnessConfig,
    /// Wall time of the bulk insertion, in microseconds.
    pub insert_micros: u64,
    /// Levels in the resulting tree.
    pub depth: usize,
    /// One entry per configured tolerance, in configuration order.
    pub runs: Vec<ToleranceRun>,
}

impl HarnessReport {
    /// Returns the run for `tolerance`, if it was measured.
    pub fn run_for(&self, tolerance: Distance) -> Option<&ToleranceRun> {
        self.runs.iter().find(|run| run.tolerance == tolerance)
    }
}

/// Measurements for one tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceRun {
    pub tolerance: Distance,
    pub queries: usize,
    /// Sum of result lengths across all queries.
    pub total_matches: usize,
    /// Mean nodes visited per query.
    pub mean_visited: f64,
    /// `mean_visited` as a fraction of the tree size.
    pub visited_fraction: f64,
    pub search_micros: u64,
    /// Same queries answered by a linear scan.
    pub linear_micros: u64,
    /// Whether every query was checked against the linear scan.
    pub verified: bool,
}

impl ToleranceRun {
    /// Linear-scan time over tree-search time. `None` when the search took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        if self.search_micros == 0 {
            return None;
        }
        Some(self.linear_micros as f64 / self.search_micros as f64)
    }
}
