//! Shared, lock-guarded handle to a [`BkTree`].
//!
//! The tree itself has no internal synchronization. This handle is the caller-side
//! read-write lock around the whole index: searches share the lock, inserts take it
//! exclusively, so the tree is never mutated concurrently.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::metric::{Distance, Metric};

use super::index::BkTree;

/// Cloneable handle to a [`BkTree`] behind an `Arc<RwLock<_>>`.
pub struct SharedBkTree<T> {
    inner: Arc<RwLock<BkTree<T>>>,
}

impl<T> SharedBkTree<T> {
    /// Creates a handle over an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::from_tree(BkTree::new())
    }

    /// Wraps an existing tree.
    #[inline]
    pub fn from_tree(tree: BkTree<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Returns the number of indexed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the tree.
    pub fn with_tree<R>(&self, f: impl FnOnce(&BkTree<T>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Returns the number of strong references to the underlying tree.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: Metric> SharedBkTree<T> {
    /// Inserts an item under the write lock.
    #[inline]
    pub fn insert(&self, item: T) {
        self.inner.write().insert(item);
    }

    /// Inserts many items under a single write lock.
    pub fn extend<I: IntoIterator<Item = T>>(&self, items: I) {
        self.inner.write().extend(items);
    }
}

impl<T: Metric + Clone> SharedBkTree<T> {
    /// Searches under the read lock, cloning matches out of the tree.
    pub fn search(&self, query: &T, tolerance: Distance) -> Vec<(T, Distance)> {
        self.inner
            .read()
            .search(query, tolerance)
            .iter()
            .map(|hit| hit.cloned())
            .collect()
    }
}

impl<T> Clone for SharedBkTree<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedBkTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BkTree<T>> for SharedBkTree<T> {
    fn from(tree: BkTree<T>) -> Self {
        Self::from_tree(tree)
    }
}

impl<T> std::fmt::Debug for SharedBkTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedBkTree")
            .field("len", &self.len())
            .field("strong_count", &self.strong_count())
            .finish()
    }
}
