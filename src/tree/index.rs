use std::collections::btree_map::Entry;

use tracing::{debug, trace};

use crate::metric::{Distance, Metric};

use super::error::{SearchError, SearchResult};
use super::node::Node;
use super::types::{Match, SearchStats};

/// A BK-tree over items implementing [`Metric`].
///
/// Each node partitions its descendants by their exact distance to the node's item. A
/// search for everything within `tolerance` of a query only descends into children whose
/// edge value lies in `[d - tolerance, d + tolerance]`, where `d` is the query's distance
/// to the current node.
///
/// # Correctness
///
/// Results are exact provided `T::distance` is a metric (see [`crate::metric`]). A
/// distance that breaks the triangle inequality produces silent false negatives.
///
/// # Duplicates
///
/// Items are never rejected or merged. An item equal to one already indexed is stored as
/// another node and is reported once per copy.
///
/// # Example
///
/// ```
/// use bktree::BkTree;
///
/// let tree: BkTree<u64> = (0..100).collect();
///
/// let exact = tree.search(&5, 0);
/// assert_eq!(exact.len(), 1);
/// assert_eq!(*exact[0].item, 5);
///
/// for hit in tree.search(&5, 2) {
///     assert!(hit.distance <= 2);
/// }
/// ```
#[derive(Clone)]
pub struct BkTree<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> BkTree<T> {
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of indexed items (duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Number of levels in the tree; `0` when empty, `1` for a lone root.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root.as_ref() else {
            return 0;
        };

        let mut deepest = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.values().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Iterates every indexed item, depth-first. Order is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.iter().collect(),
            remaining: self.len,
        }
    }
}

impl<T: Metric> BkTree<T> {
    /// Adds `item` to the tree.
    ///
    /// Starting at the root, the item descends through the child at its exact distance
    /// from each visited node until it reaches a node with no child at that distance,
    /// where it is attached.
    pub fn insert(&mut self, item: T) {
        self.len += 1;

        let Some(mut current) = self.root.as_mut() else {
            self.root = Some(Node::new(item));
            trace!(depth = 0, "inserted root");
            return;
        };

        let mut depth = 1usize;
        loop {
            let distance = current.item.distance(&item);
            match current.children.entry(distance) {
                Entry::Occupied(slot) => {
                    current = slot.into_mut();
                    depth += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(Node::new(item));
                    trace!(depth, distance, "inserted item");
                    return;
                }
            }
        }
    }

    /// Returns every indexed item within `tolerance` of `query`, with its distance.
    ///
    /// The result order is unspecified. An empty tree yields an empty vector.
    pub fn search<'a>(&'a self, query: &T, tolerance: Distance) -> Vec<Match<'a, T>> {
        self.search_with_stats(query, tolerance).0
    }

    /// Same as [`search`](Self::search), also reporting how much of the tree was walked.
    pub fn search_with_stats<'a>(
        &'a self,
        query: &T,
        tolerance: Distance,
    ) -> (Vec<Match<'a, T>>, SearchStats) {
        let mut results = Vec::new();
        let mut stats = SearchStats::default();

        let Some(root) = self.root.as_ref() else {
            return (results, stats);
        };

        let mut candidates = vec![root];
        while let Some(node) = candidates.pop() {
            stats.visited += 1;

            let distance = node.item.distance(query);
            if distance <= tolerance {
                results.push(Match::new(&node.item, distance));
            }

            let low = distance.saturating_sub(tolerance);
            let high = distance.saturating_add(tolerance);

            let before = candidates.len();
            candidates.extend(node.children.range(low..=high).map(|(_, child)| child));
            stats.pruned += node.children.len() - (candidates.len() - before);
        }

        debug!(
            tolerance,
            matches = results.len(),
            visited = stats.visited,
            pruned = stats.pruned,
            "search complete"
        );

        (results, stats)
    }

    /// Search entry point for signed tolerances.
    ///
    /// Negative values are rejected. Values above [`Distance::MAX`] are clamped.
    pub fn search_checked<'a>(
        &'a self,
        query: &T,
        tolerance: i64,
    ) -> SearchResult<Vec<Match<'a, T>>> {
        if tolerance < 0 {
            return Err(SearchError::NegativeTolerance { tolerance });
        }
        let tolerance = Distance::try_from(tolerance).unwrap_or(Distance::MAX);
        Ok(self.search(query, tolerance))
    }
}

impl<T> Default for BkTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for BkTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BkTree")
            .field("len", &self.len)
            .field("depth", &self.depth())
            .finish()
    }
}

impl<T: Metric> Extend<T> for BkTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Metric> FromIterator<T> for BkTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BkTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over the items of a [`BkTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.values());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
