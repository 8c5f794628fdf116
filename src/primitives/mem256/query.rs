//! Bit queries over `Mem256`
//!
//! Read-only inspection of single bits and whole-block bit statistics.

use super::core::{BITS, LIMB_BITS, Mem256};
use super::error::Mem256Error;

impl Mem256 {
    /// Returns whether the bit at absolute position `index` is set.
    ///
    /// # Panics
    /// Panics if `index >= 256`. With the `speed` feature the check is only
    /// performed in debug builds.
    pub fn get(&self, index: usize) -> bool {
        #[cfg(not(feature = "speed"))]
        assert!(index < BITS, "bit index out of range");

        #[cfg(feature = "speed")]
        debug_assert!(index < BITS, "bit index out of range");

        self.0[index / LIMB_BITS] & (1u64 << (index % LIMB_BITS)) != 0
    }

    /// Like [`Mem256::get`], but reports an out-of-range index as an error.
    pub fn checked_get(&self, index: usize) -> Result<bool, Mem256Error> {
        if index >= BITS {
            return Err(Mem256Error::IndexOutOfRange { index });
        }

        Ok(self.get(index))
    }

    /// Counts the set bits over the whole block.
    ///
    /// # Returns
    /// A count in the range `0..=256`.
    pub fn popcnt(&self) -> u32 {
        self.0.iter().map(|limb| limb.count_ones()).sum()
    }

    /// Returns the number of bits needed to represent the block.
    ///
    /// This is the 1-based position of the most significant set bit, or 0
    /// when the block is zero. Limbs are scanned from the most significant
    /// down and the first non-zero one decides the result.
    pub fn highbit(&self) -> u32 {
        for (i, &limb) in self.0.iter().enumerate().rev() {
            if limb != 0 {
                return (i * LIMB_BITS) as u32 + (u64::BITS - limb.leading_zeros());
            }
        }

        0
    }

    /// Counts the number of leading zero bits in the block.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        Mem256::BITS - self.highbit()
    }
}
