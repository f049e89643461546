//! Low-level bitmap operations over slices of 32-bit words.
//!
//! These functions carry no domain length: they operate on whole words and
//! leave padding policy to `BitSet`.

mod basic;
mod bulk;
mod check;
mod intrinsics;
mod search;

// Re-export all public functions
pub use basic::{clear_bit, is_set, set_bit};
pub use bulk::{
    fill_words, intersect_words, mask_tail, negate_words, subtract_words, union_words, zero_words,
};
pub use check::{is_empty, words_contain, words_equal};
pub use intrinsics::{popcount, split_index, tail_mask, trailing_zeros};
pub use search::{count_all, first_set_bit, next_set_bit};
