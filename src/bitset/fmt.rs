//! Diagnostic rendering. Not a stable interchange format.

use alloc::string::String;
use core::fmt;

use crate::bitset::BitSet;

impl BitSet {
    /// One `'1'`/`'0'` character per index in `[0, len())`, index 0 first.
    pub fn to_bit_string(&self) -> String {
        (0..self.len())
            .map(|index| if self.get(index) { '1' } else { '0' })
            .collect()
    }
}

/// Members in `[0, len())`, joined with `", "`.
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.iter().take_while(|&index| index < self.len());
        if let Some(first) = members.next() {
            write!(f, "{first}")?;
            for index in members {
                write!(f, ", {index}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("len", &self.len())
            .field("members", &DebugMembers(self))
            .finish()
    }
}

struct DebugMembers<'a>(&'a BitSet);

impl fmt::Debug for DebugMembers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
