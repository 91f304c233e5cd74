//! The BK-tree index.
//!
//! [`BkTree`] supports two core operations: [`insert`](BkTree::insert) and
//! [`search`](BkTree::search). It is append-only: there is no removal and no
//! rebalancing, and the shape is fully determined by the pairwise distances computed
//! during insertion.
//!
//! The tree is single-threaded. Wrap it in [`SharedBkTree`] when several threads need it.

pub mod error;
pub mod handle;
pub mod index;
pub mod node;
pub mod types;


pub use error::{SearchError, SearchResult};
pub use handle::SharedBkTree;
pub use index::{BkTree, Iter};
pub use node::Node;
pub use types::{Match, SearchStats};
