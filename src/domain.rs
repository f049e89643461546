//! A fixed integer domain shared by a family of compatible bit sets.

use crate::bitset::BitSet;
use crate::constants::{size_for, words_for};

/// Domain `[0, len)` from which compatible [`BitSet`]s are created.
///
/// Every set created from the same `Domain` has the same length and word
/// count, so they can be combined with the fast-tier binary operations
/// without size checks. Typical use is one domain per analysed function,
/// with one set per program point.
///
/// # Example
/// ```rust
/// use dense_bitset::Domain;
///
/// let vars = Domain::new(40);
/// let mut live_in = vars.create();
/// let mut live_out = vars.create();
/// live_out.set(3);
/// live_in.union(&live_out);
/// assert!(live_in.equals(&live_out));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    length: usize,
}

impl Domain {
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Backing capacity in bits of every set of this domain.
    #[inline]
    pub const fn size(&self) -> usize {
        size_for(self.length)
    }

    #[inline]
    pub const fn word_count(&self) -> usize {
        words_for(self.length)
    }

    /// New empty set over this domain.
    pub fn create(&self) -> BitSet {
        BitSet::new(self.length)
    }

    /// New set containing every index of this domain, padding clear.
    pub fn create_full(&self) -> BitSet {
        let mut set = self.create();
        set.fill();
        set
    }

    /// `true` if `set` was built over a domain of this length.
    #[inline]
    pub fn owns(&self, set: &BitSet) -> bool {
        set.len() == self.length
    }
}
