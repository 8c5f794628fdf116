use crate::primitives::{Mem256, Mem256Error};

/// Attempts to convert a `Mem256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the block are zero.
impl TryFrom<Mem256> for u64 {
    type Error = Mem256Error;

    fn try_from(value: Mem256) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(1);

        if high.iter().any(|&l| l != 0) {
            return Err(Mem256Error::Truncation);
        }

        Ok(low[0])
    }
}

/// Converts a `u64` into the least significant limb of a `Mem256`.
impl From<u64> for Mem256 {
    fn from(value: u64) -> Self {
        Mem256([value, 0, 0, 0])
    }
}
