//! The distance capability consumed by [`BkTree`](crate::tree::BkTree).
//!
//! Indexed items implement [`Metric`] themselves. The tree is only correct when the
//! implementation is a true metric on the item type:
//!
//! - `x.distance(&x) == 0`
//! - `x.distance(&y) == y.distance(&x)`
//! - `x.distance(&z) <= x.distance(&y) + y.distance(&z)`
//!
//! None of this is checked at runtime. A distance that breaks the triangle inequality
//! makes the tree prune subtrees that still hold matches, so searches silently miss items.
//!
//! Ready-made metrics live here as well: population-count Hamming distance for the
//! unsigned integer types and for bit-packed [`BinaryCode`]s.

pub mod binary;


pub use binary::{BinaryCode, hamming_distance, quantize_to_binary};

/// Result type of every distance computation in this crate.
///
/// Unsigned, so non-negativity holds by construction.
pub type Distance = u32;

/// An item that can report its distance to another item of the same type.
pub trait Metric {
    /// Computes the distance between `self` and `other`.
    fn distance(&self, other: &Self) -> Distance;
}

macro_rules! impl_popcount_metric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Metric for $ty {
                /// Hamming distance: the number of differing bits.
                #[inline]
                fn distance(&self, other: &Self) -> Distance {
                    (self ^ other).count_ones()
                }
            }
        )*
    };
}

impl_popcount_metric!(u8, u16, u32, u64, u128, usize);

impl<const N: usize> Metric for [u8; N] {
    /// Hamming distance over fixed-width byte fingerprints.
    #[inline]
    fn distance(&self, other: &Self) -> Distance {
        hamming_distance(self, other)
    }
}
