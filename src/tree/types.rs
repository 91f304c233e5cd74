use crate::metric::Distance;

/// One search hit: an indexed item and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match<'a, T> {
    /// The indexed item.
    pub item: &'a T,
    /// Distance from `item` to the query.
    pub distance: Distance,
}

impl<'a, T> Match<'a, T> {
    /// Creates a new match record.
    #[inline]
    pub fn new(item: &'a T, distance: Distance) -> Self {
        Self { item, distance }
    }

    /// Returns `true` for a zero-distance hit.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }

    /// Clones the item out of the tree.
    pub fn cloned(&self) -> (T, Distance)
    where
        T: Clone,
    {
        (self.item.clone(), self.distance)
    }
}

/// Traversal counters for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose distance to the query was computed.
    pub visited: usize,
    /// Children skipped by the triangle-inequality range test.
    pub pruned: usize,
}

impl SearchStats {
    /// Fraction of a tree of `len` items that was visited.
    pub fn visited_fraction(&self, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }
        self.visited as f64 / len as f64
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "visited={} pruned={}", self.visited, self.pruned)
    }
}
