//! Word layout constants shared by the bitmap primitives and `BitSet`.

/// Storage unit backing 32 consecutive domain bits.
pub type Word = u32;

/// log2 of [`BITS_PER_WORD`]; `index >> ADDRESS_BITS_PER_WORD` is the word index.
pub const ADDRESS_BITS_PER_WORD: usize = 5;

/// Number of bits in a [`Word`].
pub const BITS_PER_WORD: usize = 1 << ADDRESS_BITS_PER_WORD;

/// `index & BIT_INDEX_MASK` is the bit position inside its word.
pub const BIT_INDEX_MASK: usize = BITS_PER_WORD - 1;

/// Word with every bit set.
pub const FULL_WORD: Word = Word::MAX;

/// Number of words needed to back a domain of `length` bits.
#[inline]
pub const fn words_for(length: usize) -> usize {
    (length + BIT_INDEX_MASK) >> ADDRESS_BITS_PER_WORD
}

/// `length` rounded up to the next multiple of [`BITS_PER_WORD`].
#[inline]
pub const fn size_for(length: usize) -> usize {
    words_for(length) << ADDRESS_BITS_PER_WORD
}
