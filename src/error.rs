//! Errors reported by the checked `try_*` operations.

use thiserror::Error;

/// Precondition violations caught by the checked tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitSetError {
    /// Index outside the logical domain `[0, length)`.
    #[error("index {index} out of bounds for domain of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Binary operation on sets with different backing sizes.
    #[error("bit set size mismatch: expected {expected} bits, found {found}")]
    SizeMismatch { expected: usize, found: usize },
}

pub type Result<T> = core::result::Result<T, BitSetError>;
