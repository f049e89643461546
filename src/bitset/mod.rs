//! The `BitSet` value type and its API tiers.

#[allow(clippy::module_inception)]
mod bitset;
mod checked;
mod fmt;
mod iter;

pub use bitset::BitSet;
pub use iter::Ones;

#[cfg(test)]
mod proptests;
