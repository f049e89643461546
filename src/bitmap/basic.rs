//! Single-bit operations on word slices.
//!
//! Mutating primitives return the change delta (`old ^ new`) of the word they
//! touched, so callers can track staleness without a second read.

use crate::bitmap::split_index;
use crate::constants::Word;

/// Set a bit in the bitmap at the given index.
///
/// # Arguments
/// * `words` - Backing words
/// * `idx` - Bit index, must be `< words.len() * 32`
///
/// # Returns
/// `old ^ new` for the touched word (zero if the bit was already set)
///
/// # Performance
/// O(1) - one load, one OR, one store
#[inline]
pub fn set_bit(words: &mut [Word], idx: usize) -> Word {
    let (word, mask) = split_index(idx);
    let old = words[word];
    let new = old | mask;
    words[word] = new;
    old ^ new
}

/// Clear a bit in the bitmap at the given index.
///
/// # Returns
/// `old ^ new` for the touched word (zero if the bit was already clear)
///
/// # Performance
/// O(1) - one load, one AND, one store
#[inline]
pub fn clear_bit(words: &mut [Word], idx: usize) -> Word {
    let (word, mask) = split_index(idx);
    let old = words[word];
    let new = old & !mask;
    words[word] = new;
    old ^ new
}

/// Check if a bit is set in the bitmap.
///
/// # Returns
/// `true` if bit is set, `false` otherwise
#[inline]
pub fn is_set(words: &[Word], idx: usize) -> bool {
    let (word, mask) = split_index(idx);
    words[word] & mask != 0
}
