//! Bit-packed binary codes compared by Hamming distance.

use bitvec::prelude::*;

use super::{Distance, Metric};

/// Sign-quantizes a float vector: one bit per dimension, set when the value is positive.
///
/// Bits are packed least-significant first, so dimension `i` lives in byte `i / 8`.
pub fn quantize_to_binary(vector: &[f32]) -> Vec<u8> {
    let mut bv = BitVec::<u8, Lsb0>::with_capacity(vector.len());
    for &val in vector {
        bv.push(val > 0.0);
    }
    bv.into_vec()
}

/// Counts differing bits between two byte strings.
///
/// The shorter input is treated as zero-padded to the length of the longer one, which
/// keeps the result a metric even for mismatched lengths.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Distance {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let shared: Distance = short
        .iter()
        .zip(long.iter())
        .map(|(&x, &y)| (x ^ y).count_ones())
        .sum();
    let tail: Distance = long[short.len()..].iter().map(|b| b.count_ones()).sum();

    shared + tail
}

/// A bit-packed binary code, e.g. the sign quantization of an embedding.
///
/// Codes of different lengths compare as if the shorter one were padded with zero bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BinaryCode {
    bits: BitVec<u8, Lsb0>,
}

impl BinaryCode {
    /// Creates an all-zero code of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, len),
        }
    }

    /// Builds a code from explicit bits.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Sign-quantizes a float vector (see [`quantize_to_binary`]).
    pub fn quantize(vector: &[f32]) -> Self {
        Self::from_bits(vector.iter().map(|&v| v > 0.0))
    }

    /// Number of bits in the code.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the code holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns bit `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|b| *b)
    }

    /// Sets bit `index`, growing the code with zero bits when needed.
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits.set(index, value);
    }

    /// Returns the underlying bits.
    #[inline]
    pub fn as_bitslice(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }
}

impl Metric for BinaryCode {
    fn distance(&self, other: &Self) -> Distance {
        let (short, long) = if self.len() <= other.len() {
            (&self.bits, &other.bits)
        } else {
            (&other.bits, &self.bits)
        };

        let shared = short
            .iter()
            .by_vals()
            .zip(long.iter().by_vals())
            .filter(|(x, y)| x != y)
            .count();
        let tail = long[short.len()..].count_ones();

        (shared + tail) as Distance
    }
}

impl From<&[f32]> for BinaryCode {
    fn from(vector: &[f32]) -> Self {
        Self::quantize(vector)
    }
}

impl FromIterator<bool> for BinaryCode {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}
