//! Word-level bit arithmetic: popcount, bit scanning and index splitting.

use crate::constants::{Word, ADDRESS_BITS_PER_WORD, BIT_INDEX_MASK};

/// Count set bits in a word.
///
/// Branchless SWAR reduction: pairs, then nibbles, then a multiply folds the
/// four byte counts into the top byte.
///
/// # Arguments
/// * `word` - 32-bit word
///
/// # Returns
/// Number of set bits (0-32)
///
/// # Performance
/// O(1) - 12 arithmetic ops, no branches, no table
#[inline]
pub fn popcount(word: Word) -> u32 {
    let mut v = word;
    v = v - ((v >> 1) & 0x5555_5555);
    v = (v & 0x3333_3333) + ((v >> 2) & 0x3333_3333);
    (((v + (v >> 4)) & 0x0F0F_0F0F).wrapping_mul(0x0101_0101)) >> 24
}

/// Count trailing zeros (position of the lowest set bit).
///
/// # Returns
/// Number of trailing zeros (0-32)
///
/// # Performance
/// O(1) - single CPU instruction (TZCNT)
#[inline]
pub fn trailing_zeros(word: Word) -> u32 {
    word.trailing_zeros()
}

/// Split a domain index into `(word index, single-bit mask)`.
#[inline]
pub fn split_index(index: usize) -> (usize, Word) {
    (
        index >> ADDRESS_BITS_PER_WORD,
        1 << (index & BIT_INDEX_MASK),
    )
}

/// Mask of the bits of the final word that fall inside `[0, length)`.
///
/// Returns a full word when `length` is a multiple of the word width.
#[inline]
pub fn tail_mask(length: usize) -> Word {
    match length & BIT_INDEX_MASK {
        0 => Word::MAX,
        bits => (1 << bits) - 1,
    }
}
