//! Checked tier: validated counterparts of the fast-tier operations.
//!
//! Index checks use the logical length; binary checks compare backing size.
//! A rejected call leaves the receiver untouched.

use crate::bitset::BitSet;
use crate::error::{BitSetError, Result};

impl BitSet {
    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            tracing::debug!(index, length = self.len(), "index rejected");
            Err(BitSetError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
        }
    }

    #[inline]
    fn check_size(&self, other: &BitSet) -> Result<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.size(),
                found = other.size(),
                "operand rejected"
            );
            Err(BitSetError::SizeMismatch {
                expected: self.size(),
                found: other.size(),
            })
        }
    }

    /// [`set`](Self::set) with a range check.
    pub fn try_set(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.set(index);
        Ok(())
    }

    /// [`clear`](Self::clear) with a range check.
    pub fn try_clear(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.clear(index);
        Ok(())
    }

    /// [`get`](Self::get) with a range check.
    pub fn try_get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.get(index))
    }

    /// [`union`](Self::union) with a size check.
    pub fn try_union(&mut self, other: &BitSet) -> Result<()> {
        self.check_size(other)?;
        self.union(other);
        Ok(())
    }

    /// [`intersect`](Self::intersect) with a size check.
    pub fn try_intersect(&mut self, other: &BitSet) -> Result<()> {
        self.check_size(other)?;
        self.intersect(other);
        Ok(())
    }

    /// [`subtract`](Self::subtract) with a size check.
    pub fn try_subtract(&mut self, other: &BitSet) -> Result<()> {
        self.check_size(other)?;
        self.subtract(other);
        Ok(())
    }
}
