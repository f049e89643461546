//! Enumeration of set bits in ascending order.
//!
//! Scans word by word, skipping zero words, and peels bits off the current
//! word with the `word & (word - 1)` trick.

use alloc::vec::Vec;

use crate::bitmap::trailing_zeros;
use crate::bitset::BitSet;
use crate::constants::{Word, BITS_PER_WORD};

/// Iterator over the indices of set bits, lowest first.
///
/// Covers the whole backing storage, so padding bits set by
/// [`BitSet::set_all`] are yielded too.
///
/// # Example
/// ```rust
/// use dense_bitset::BitSet;
///
/// let set = BitSet::from_indices(100, [64, 3, 31]);
/// let members: Vec<usize> = set.iter().collect();
/// assert_eq!(members, vec![3, 31, 64]);
/// ```
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    /// Words not yet loaded
    words: core::slice::Iter<'a, Word>,

    /// Bit index of bit 0 of `remaining_bits`
    base: usize,

    /// Unvisited set bits of the current word
    remaining_bits: Word,
}

impl<'a> Ones<'a> {
    fn new(words: &'a [Word]) -> Self {
        let mut words = words.iter();
        let remaining_bits = words.next().copied().unwrap_or(0);
        Self {
            words,
            base: 0,
            remaining_bits,
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.remaining_bits == 0 {
            self.remaining_bits = *self.words.next()?;
            self.base += BITS_PER_WORD;
        }

        let bit = trailing_zeros(self.remaining_bits) as usize;
        self.remaining_bits &= self.remaining_bits - 1;
        Some(self.base + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.remaining_bits.count_ones() as usize + self.words.len() * BITS_PER_WORD;
        (0, Some(upper))
    }
}

impl core::iter::FusedIterator for Ones<'_> {}

impl BitSet {
    /// Iterate over set bits in strictly increasing order.
    #[inline]
    pub fn iter(&self) -> Ones<'_> {
        Ones::new(self.words())
    }

    /// Call `f` with every set bit, in strictly increasing order.
    pub fn for_each<F: FnMut(usize)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Set bits in strictly increasing order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Lowest set bit.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        crate::bitmap::first_set_bit(self.words())
    }

    /// Lowest set bit at or after `from`.
    #[inline]
    pub fn next_set(&self, from: usize) -> Option<usize> {
        crate::bitmap::next_set_bit(self.words(), from)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter()
    }
}
