//! Conversions between `Mem256` and 128-bit integers.

use super::super::core::make_double;
use crate::primitives::{Mem256, Mem256Error};

/// Attempts to convert a `Mem256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the block are zero.
impl TryFrom<Mem256> for u128 {
    type Error = Mem256Error;

    fn try_from(value: Mem256) -> Result<Self, Self::Error> {
        let [low, high, rest @ ..] = value.0;

        if rest.iter().any(|&l| l != 0) {
            return Err(Mem256Error::Truncation);
        }

        Ok(make_double(low, high))
    }
}

/// Converts a `u128` into the two least significant limbs of a `Mem256`.
impl From<u128> for Mem256 {
    fn from(value: u128) -> Self {
        Mem256([value as u64, (value >> 64) as u64, 0, 0])
    }
}
