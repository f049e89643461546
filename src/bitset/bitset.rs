//! Main BitSet structure: storage, point and bulk mutation, cardinality cache.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitmap;
use crate::constants::{size_for, words_for, Word};

/// Fixed-size set of small integers packed into 32-bit words.
///
/// Represents a subset of the domain `{0, 1, ..., len - 1}`. The domain
/// length is fixed at construction; storage is `len` rounded up to the next
/// multiple of 32 bits.
///
/// # Fast tier
/// `set`, `clear`, `get`, `union`, `intersect`, `subtract` and `negate` do no
/// range or size validation beyond `debug_assert!`. Indices must be below
/// `len()` and binary operands must have the same `size()`. Use the `try_*`
/// methods where the caller cannot guarantee that.
///
/// # Cardinality
/// The population count is cached. Mutations that actually flip a bit mark
/// the cache dirty; [`recount`](Self::recount) refreshes it. Redundant writes
/// (setting a set bit, clearing a clear bit) leave the cache valid.
///
/// # Example
/// ```rust
/// use dense_bitset::BitSet;
///
/// let mut live = BitSet::new(40);
/// live.set(0);
/// live.set(39);
/// assert_eq!(live.recount(), 2);
/// assert_eq!(live.to_vec(), vec![0, 39]);
/// ```
#[derive(Clone)]
pub struct BitSet {
    /// Logical domain length
    length: usize,

    /// Backing words; word `i` holds bits `[32 * i, 32 * i + 32)`
    words: Vec<Word>,

    /// Cached set-bit count, valid only while `dirty` is false
    count: usize,

    /// Set when a bit changed since the last recount
    dirty: bool,
}

impl BitSet {
    /// Create an empty set over the domain `[0, length)`.
    ///
    /// # Performance
    /// O(n) in words - one zeroed allocation
    pub fn new(length: usize) -> Self {
        let words = words_for(length);
        tracing::trace!(length, size = size_for(length), words, "bitset created");
        Self {
            length,
            words: vec![0; words],
            count: 0,
            dirty: false,
        }
    }

    /// Create a set over `[0, length)` containing every index in `indices`.
    pub fn from_indices<I>(length: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(length);
        set.extend(indices);
        set
    }

    /// Logical domain length.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Backing capacity in bits (`len()` rounded up to a multiple of 32).
    #[inline]
    pub fn size(&self) -> usize {
        self.words.len() * crate::constants::BITS_PER_WORD
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Read-only view of the backing words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Set bit `index`.
    ///
    /// # Performance
    /// O(1); does not dirty the count if the bit was already set
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.length, "index {index} out of bounds");
        self.dirty |= bitmap::set_bit(&mut self.words, index) != 0;
    }

    /// Clear bit `index`.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.length, "index {index} out of bounds");
        self.dirty |= bitmap::clear_bit(&mut self.words, index) != 0;
    }

    /// Check whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.length, "index {index} out of bounds");
        bitmap::is_set(&self.words, index)
    }

    /// Set every bit of the backing storage, padding included.
    ///
    /// The count becomes `size()`, not `len()`. Enumeration afterwards also
    /// yields the padding indices `len()..size()`. Use [`fill`](Self::fill)
    /// to set only the logical domain.
    pub fn set_all(&mut self) {
        bitmap::fill_words(&mut self.words);
        self.count = self.size();
        self.dirty = false;
    }

    /// Set every bit in `[0, len())`, leaving padding clear.
    pub fn fill(&mut self) {
        bitmap::fill_words(&mut self.words);
        bitmap::mask_tail(&mut self.words, bitmap::tail_mask(self.length));
        self.count = self.length;
        self.dirty = false;
    }

    /// Clear every bit.
    pub fn clear_all(&mut self) {
        bitmap::zero_words(&mut self.words);
        self.count = 0;
        self.dirty = false;
    }

    /// `self = self | other`.
    ///
    /// # Performance
    /// O(n) in words; the dirty flag is committed once after the loop
    #[inline]
    pub fn union(&mut self, other: &BitSet) {
        self.debug_assert_same_size(other);
        let delta = bitmap::union_words(&mut self.words, &other.words);
        self.dirty |= delta != 0;
    }

    /// `self = self & other`.
    #[inline]
    pub fn intersect(&mut self, other: &BitSet) {
        self.debug_assert_same_size(other);
        let delta = bitmap::intersect_words(&mut self.words, &other.words);
        self.dirty |= delta != 0;
    }

    /// `self = self & !other`: remove every member of `other`.
    #[inline]
    pub fn subtract(&mut self, other: &BitSet) {
        self.debug_assert_same_size(other);
        let delta = bitmap::subtract_words(&mut self.words, &other.words);
        self.dirty |= delta != 0;
    }

    /// Complement within `[0, len())`.
    ///
    /// Padding bits are cleared after flipping, so a negated set never
    /// reports members at or beyond `len()`.
    #[inline]
    pub fn negate(&mut self) {
        let mut delta = bitmap::negate_words(&mut self.words);
        delta |= bitmap::mask_tail(&mut self.words, bitmap::tail_mask(self.length));
        self.dirty |= delta != 0;
    }

    /// Refresh the cached count if stale and return it.
    ///
    /// Counts the whole backing storage, so padding bits set by
    /// [`set_all`](Self::set_all) are included.
    ///
    /// # Performance
    /// O(1) when clean, O(n) in words otherwise (SWAR popcount per word)
    pub fn recount(&mut self) -> usize {
        if self.dirty {
            self.count = bitmap::count_all(&self.words);
            self.dirty = false;
            tracing::trace!(count = self.count, "bitset recounted");
        }
        self.count
    }

    /// Cached count, or `None` if a mutation happened since the last recount.
    #[inline]
    pub fn cached_count(&self) -> Option<usize> {
        (!self.dirty).then_some(self.count)
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        bitmap::is_empty(&self.words)
    }

    /// Bit-for-bit equality. `false` when the sizes differ.
    #[inline]
    pub fn equals(&self, other: &BitSet) -> bool {
        bitmap::words_equal(&self.words, &other.words)
    }

    /// `true` if every member of `other` is also a member of `self`.
    ///
    /// Returns `false` when the sizes differ.
    #[inline]
    pub fn contains(&self, other: &BitSet) -> bool {
        bitmap::words_contain(&self.words, &other.words)
    }

    #[inline(always)]
    fn debug_assert_same_size(&self, other: &BitSet) {
        debug_assert_eq!(
            self.words.len(),
            other.words.len(),
            "bit set size mismatch"
        );
    }
}

/// Equality compares the backing words only; `count` and `dirty` are
/// bookkeeping.
impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for BitSet {}

impl Extend<usize> for BitSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for index in iter {
            self.set(index);
        }
    }
}
