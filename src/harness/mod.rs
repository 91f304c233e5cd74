//! Benchmark harness: random 64-bit items under Hamming distance.
//!
//! Builds a [`BkTree<u64>`] from seeded random items, times bulk insertion, then times
//! random queries at each configured tolerance next to a linear-scan baseline. With
//! `verify` set, every query is also checked against the linear scan.

pub mod error;
pub mod report;


pub use error::{HarnessError, HarnessResult};
pub use report::{HarnessReport, ToleranceRun};

use rand::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::metric::{Distance, Metric};
use crate::tree::BkTree;

/// Draws `count` uniformly random `u64`s.
pub fn random_items<R: RngCore + ?Sized>(rng: &mut R, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.next_u64()).collect()
}

/// Answers a tolerance query by checking every item.
///
/// This is the reference the tree must agree with.
pub fn linear_scan<T: Metric + Clone>(
    items: &[T],
    query: &T,
    tolerance: Distance,
) -> Vec<(T, Distance)> {
    items
        .iter()
        .filter_map(|item| {
            let distance = item.distance(query);
            (distance <= tolerance).then(|| (item.clone(), distance))
        })
        .collect()
}

/// Runs the harness end to end.
pub fn run(config: &HarnessConfig) -> HarnessResult<HarnessReport> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let items = random_items(&mut rng, config.tree_size);

    info!(
        tree_size = config.tree_size,
        seed = config.seed,
        "Building tree"
    );

    let start = Instant::now();
    let tree: BkTree<u64> = items.iter().copied().collect();
    let insert_micros = start.elapsed().as_micros() as u64;
    let depth = tree.depth();

    info!(insert_micros, depth, "Tree built");

    let mut runs = Vec::with_capacity(config.tolerances.len());
    for &tolerance in &config.tolerances {
        let needles = random_items(&mut rng, config.queries);
        let run = measure_tolerance(&tree, &items, &needles, tolerance, config.verify)?;

        info!(
            tolerance,
            total_matches = run.total_matches,
            mean_visited = run.mean_visited,
            search_micros = run.search_micros,
            linear_micros = run.linear_micros,
            "Tolerance measured"
        );

        runs.push(run);
    }

    Ok(HarnessReport {
        config: config.clone(),
        insert_micros,
        depth,
        runs,
    })
}

fn measure_tolerance(
    tree: &BkTree<u64>,
    items: &[u64],
    needles: &[u64],
    tolerance: Distance,
    verify: bool,
) -> HarnessResult<ToleranceRun> {
    let mut total_matches = 0usize;
    let mut total_visited = 0usize;

    let start = Instant::now();
    for needle in needles {
        let (hits, stats) = tree.search_with_stats(needle, tolerance);
        total_matches += hits.len();
        total_visited += stats.visited;
    }
    let search_micros = start.elapsed().as_micros() as u64;

    let start = Instant::now();
    let mut linear_matches = 0usize;
    for needle in needles {
        linear_matches += items
            .iter()
            .filter(|&item| item.distance(needle) <= tolerance)
            .count();
    }
    let linear_micros = start.elapsed().as_micros() as u64;

    debug!(tolerance, total_matches, linear_matches, "Match totals");

    if verify {
        for needle in needles {
            verify_query(tree, items, needle, tolerance)?;
        }
    }

    let mean_visited = if needles.is_empty() {
        0.0
    } else {
        total_visited as f64 / needles.len() as f64
    };
    let visited_fraction = if tree.is_empty() {
        0.0
    } else {
        mean_visited / tree.len() as f64
    };

    Ok(ToleranceRun {
        tolerance,
        queries: needles.len(),
        total_matches,
        mean_visited,
        visited_fraction,
        search_micros,
        linear_micros,
        verified: verify,
    })
}

fn verify_query(
    tree: &BkTree<u64>,
    items: &[u64],
    needle: &u64,
    tolerance: Distance,
) -> HarnessResult<()> {
    let mut expected = linear_scan(items, needle, tolerance);
    let mut actual: Vec<(u64, Distance)> = tree
        .search(needle, tolerance)
        .iter()
        .map(|hit| hit.cloned())
        .collect();

    expected.sort_unstable();
    actual.sort_unstable();

    if expected != actual {
        return Err(HarnessError::VerificationFailed {
            tolerance,
            query: *needle,
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}
