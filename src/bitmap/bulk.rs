//! Word-parallel bulk operations.
//!
//! Binary operations zip the receiver with the operand; both slices are
//! expected to have the same length. Every mutating operation returns the OR
//! of `old ^ new` over all words it touched.

use crate::constants::{Word, FULL_WORD};

#[inline(always)]
fn combine(words: &mut [Word], other: &[Word], op: impl Fn(Word, Word) -> Word) -> Word {
    let mut delta = 0;
    for (word, &theirs) in words.iter_mut().zip(other) {
        let old = *word;
        let new = op(old, theirs);
        *word = new;
        delta |= old ^ new;
    }
    delta
}

/// `words[i] |= other[i]` for every word.
///
/// # Performance
/// O(n) in words, branch-free loop body
#[inline]
pub fn union_words(words: &mut [Word], other: &[Word]) -> Word {
    combine(words, other, |a, b| a | b)
}

/// `words[i] &= other[i]` for every word.
#[inline]
pub fn intersect_words(words: &mut [Word], other: &[Word]) -> Word {
    combine(words, other, |a, b| a & b)
}

/// `words[i] &= !other[i]` for every word (relative complement).
#[inline]
pub fn subtract_words(words: &mut [Word], other: &[Word]) -> Word {
    combine(words, other, |a, b| a & !b)
}

/// `words[i] = !words[i]` for every word, padding included.
#[inline]
pub fn negate_words(words: &mut [Word]) -> Word {
    let mut delta = 0;
    for word in words.iter_mut() {
        let old = *word;
        *word = !old;
        delta |= old ^ *word;
    }
    delta
}

/// Set every bit of every word.
///
/// # Performance
/// O(n) in words - compiles to a memset
#[inline]
pub fn fill_words(words: &mut [Word]) {
    words.fill(FULL_WORD);
}

/// Clear every bit of every word.
#[inline]
pub fn zero_words(words: &mut [Word]) {
    words.fill(0);
}

/// AND the last word with `mask`, returning the delta.
///
/// Used to force padding bits back to zero.
#[inline]
pub fn mask_tail(words: &mut [Word], mask: Word) -> Word {
    match words.last_mut() {
        Some(last) => {
            let old = *last;
            *last &= mask;
            old ^ *last
        }
        None => 0,
    }
}
