//! Read-only comparisons over word slices.

use crate::constants::Word;

/// Check if two bitmaps are bit-identical.
///
/// # Returns
/// `false` if the slices differ in length or in any word
#[inline]
pub fn words_equal(words: &[Word], other: &[Word]) -> bool {
    words == other
}

/// Check if `other` is a subset of `words`.
///
/// Tested per word as `(word | theirs) == word`.
///
/// # Returns
/// `false` if the slices differ in length or any bit of `other` is missing
///
/// # Performance
/// O(n) in words, exits at the first word with a missing bit
#[inline]
pub fn words_contain(words: &[Word], other: &[Word]) -> bool {
    words.len() == other.len()
        && words
            .iter()
            .zip(other)
            .all(|(&ours, &theirs)| ours | theirs == ours)
}

/// Check if bitmap is empty (no bits set).
#[inline]
pub fn is_empty(words: &[Word]) -> bool {
    words.iter().all(|&word| word == 0)
}
