//! Counting and scanning for set bits.

use crate::bitmap::{popcount, trailing_zeros};
use crate::constants::{Word, ADDRESS_BITS_PER_WORD, BITS_PER_WORD, BIT_INDEX_MASK};

/// Count all set bits in bitmap.
///
/// # Returns
/// Total number of set bits, padding included
///
/// # Performance
/// O(n) in words - one SWAR popcount per word
#[inline]
pub fn count_all(words: &[Word]) -> usize {
    words.iter().map(|&word| popcount(word) as usize).sum()
}

/// Find first set bit (minimum).
///
/// # Returns
/// Index of first set bit, or None if bitmap is empty
#[inline]
pub fn first_set_bit(words: &[Word]) -> Option<usize> {
    words
        .iter()
        .position(|&word| word != 0)
        .map(|word_idx| {
            (word_idx << ADDRESS_BITS_PER_WORD) + trailing_zeros(words[word_idx]) as usize
        })
}

/// Find the first set bit at or after `from`.
///
/// # Returns
/// Index of next set bit, or None if no set bits found
///
/// # Performance
/// O(n) in words worst case, O(1) per hit inside a word (TZCNT)
#[inline]
pub fn next_set_bit(words: &[Word], from: usize) -> Option<usize> {
    let start_word = from >> ADDRESS_BITS_PER_WORD;
    if start_word >= words.len() {
        return None;
    }

    // Remaining bits in start word
    let masked = words[start_word] & (Word::MAX << (from & BIT_INDEX_MASK));
    if masked != 0 {
        return Some(start_word * BITS_PER_WORD + trailing_zeros(masked) as usize);
    }

    // Subsequent words
    words[start_word + 1..]
        .iter()
        .position(|&word| word != 0)
        .map(|offset| {
            let word_idx = start_word + 1 + offset;
            word_idx * BITS_PER_WORD + trailing_zeros(words[word_idx]) as usize
        })
}
