//! Errors reported by the checked `Mem256` operations.

use std::fmt::{Display, Formatter, Result};

/// Errors that may occur in the checked variants of `Mem256` operations.
///
/// The unchecked operations treat the same conditions as precondition
/// violations and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mem256Error {
    /// A bit index was not in `0..256`.
    IndexOutOfRange { index: usize },
    /// A fill range did not satisfy `start <= end <= 256`.
    InvalidRange { start: usize, end: usize },
    /// A narrowing conversion would drop set bits.
    Truncation,
}

impl Display for Mem256Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mem256Error::IndexOutOfRange { index } => {
                write!(f, "bit index {} out of range 0..256", index)
            }
            Mem256Error::InvalidRange { start, end } => {
                write!(f, "invalid bit range {}..{}", start, end)
            }
            Mem256Error::Truncation => f.write_str("value does not fit in target type"),
        }
    }
}

impl std::error::Error for Mem256Error {}
