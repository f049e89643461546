//! # dense-bitset
//!
//! Fixed-size, word-packed bit set over a small integer domain.
//! Built for dataflow passes (liveness, reachability, worklist membership)
//! that mutate the same sets millions of times.
//!
//! ## Features
//! - O(1) set/clear/get with no allocation
//! - O(words) union, intersect, subtract and negate
//! - Lazily recomputed population count; redundant writes keep it valid
//! - Fast unchecked tier plus a `try_*` checked tier
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use dense_bitset::{BitSet, BitSetError};
//!
//! let mut set = BitSet::new(40);
//! set.set(0);
//! set.set(31);
//! set.set(32);
//! set.set(39);
//! assert_eq!(set.to_vec(), vec![0, 31, 32, 39]);
//! assert_eq!(set.recount(), 4);
//! assert_eq!(set.to_string(), "0, 31, 32, 39");
//!
//! assert_eq!(
//!     set.try_set(40),
//!     Err(BitSetError::IndexOutOfBounds { index: 40, length: 40 })
//! );
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bitmap;
mod bitset;
mod constants;
mod domain;
mod error;

pub use bitset::{BitSet, Ones};
pub use constants::{Word, ADDRESS_BITS_PER_WORD, BITS_PER_WORD, BIT_INDEX_MASK};
pub use domain::Domain;
pub use error::{BitSetError, Result};
