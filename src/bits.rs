//! Bit-level helpers shared by the graph store and the graph6 codec.

/// Number of vertex slots in a [`Graph`](crate::graph::Graph).
pub const MAX_VERTICES: usize = 64;

/// Reduces an arbitrary vertex id to its slot in `0..64`.
#[inline(always)]
pub const fn slot(v: u64) -> usize {
    (v % MAX_VERTICES as u64) as usize
}

/// Returns the single-bit mask for vertex `v` (taken modulo 64).
#[inline(always)]
pub const fn bit(v: u64) -> u64 {
    1u64 << slot(v)
}

/// Returns a mask with the lowest `n` bits set.
#[inline(always)]
pub const fn all_bits(n: usize) -> u64 {
    if n >= MAX_VERTICES {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Number of set bits in `mask`.
#[inline(always)]
pub const fn popcount(mask: u64) -> u32 {
    mask.count_ones()
}

/// Iterator over the indices of the set bits of a `u64`, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitIter(u64);

impl BitIter {
    /// Creates an iterator over the set bits of `mask`.
    #[inline]
    pub const fn new(mask: u64) -> Self {
        Self(mask)
    }
}

impl Iterator for BitIter {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros();
        self.0 &= self.0 - 1; // clear lowest set bit
        Some(u64::from(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter {}

impl std::iter::FusedIterator for BitIter {}
