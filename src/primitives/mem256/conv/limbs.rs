//! Conversions between `Mem256` and raw limb arrays.

use crate::primitives::Mem256;

/// Converts a `Mem256` into its four limbs, least significant first.
impl From<Mem256> for [u64; 4] {
    fn from(value: Mem256) -> Self {
        value.0
    }
}

/// Converts four limbs, least significant first, into a `Mem256`.
impl From<[u64; 4]> for Mem256 {
    fn from(value: [u64; 4]) -> Self {
        Mem256(value)
    }
}

/// Borrows the underlying limb array of a `Mem256`.
impl AsRef<[u64; 4]> for Mem256 {
    fn as_ref(&self) -> &[u64; 4] {
        &self.0
    }
}
