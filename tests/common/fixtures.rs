//! Test fixtures for integration tests.

use bktree::{BkTree, Distance, Match, Metric};
use rand::prelude::*;

pub const FIXED_SEED: u64 = 0x5EED;

/// Random 64-bit items from a fixed seed.
pub fn seeded_items(seed: u64, count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.next_u64()).collect()
}

/// Random items squeezed into a narrow bit range so tolerances actually hit.
pub fn clustered_items(seed: u64, count: usize, bits: u32) -> Vec<u64> {
    let mask = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };
    seeded_items(seed, count)
        .into_iter()
        .map(|v| v & mask)
        .collect()
}

/// Owned, sorted copy of a search result for multiset comparison.
pub fn sorted_matches<T: Clone + Ord>(hits: &[Match<'_, T>]) -> Vec<(T, Distance)> {
    let mut owned: Vec<_> = hits.iter().map(|hit| hit.cloned()).collect();
    owned.sort();
    owned
}

/// Sorted linear-scan answer for the same query.
pub fn sorted_scan<T: Metric + Clone + Ord>(
    items: &[T],
    query: &T,
    tolerance: Distance,
) -> Vec<(T, Distance)> {
    let mut expected = bktree::linear_scan(items, query, tolerance);
    expected.sort();
    expected
}

pub struct TreeBuilder<T> {
    items: Vec<T>,
}

impl<T: Metric + Clone> TreeBuilder<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn build(self) -> (BkTree<T>, Vec<T>) {
        let tree = self.items.iter().cloned().collect();
        (tree, self.items)
    }
}
