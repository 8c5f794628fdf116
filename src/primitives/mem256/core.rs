//! 256-bit memory block primitive
//!
//! This module defines a fixed-size 256-bit block (`Mem256`) stored as four
//! 64-bit limbs.
//!
//! It is designed as a **plain, copyable value type**, not as a big-integer
//! arithmetic library. Its primary use cases include:
//! - wide bitmasks and bitboards
//! - flag sets exceeding 64 bits
//! - a foundation for wider-than-native integer code
//!
//! The internal representation is little-endian at limb granularity: limb 0
//! holds bits 0..64, limb 3 holds bits 192..256. Absolute bit `i` lives in
//! limb `i / 64` at position `i % 64`.

use std::fmt::{Display, Formatter, Result};

/// Number of limbs in a `Mem256`.
pub(crate) const LIMBS: usize = 4;

/// Number of bits in a single limb.
pub(crate) const LIMB_BITS: usize = u64::BITS as usize;

/// Number of bits in a `Mem256`.
pub(crate) const BITS: usize = LIMBS * LIMB_BITS;

/// Fixed-size 256-bit memory block.
///
/// Limbs are stored least significant first. Every bit pattern is a valid,
/// distinct value and equality is bitwise equality of all four limbs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Mem256(pub(crate) [u64; LIMBS]);

impl Mem256 {
    /// Index of the least significant limb (bits 0..64).
    pub const LOW: usize = 0;

    /// Index of limb holding bits 64..128.
    pub const MID_LOW: usize = 1;

    /// Index of limb holding bits 128..192.
    pub const MID_HIGH: usize = 2;

    /// Index of the most significant limb (bits 192..256).
    pub const HIGH: usize = 3;

    /// Width of the block in bits.
    pub const BITS: u32 = BITS as u32;

    /// The all-zero block.
    pub const ZERO: Self = Self([0; LIMBS]);

    /// The all-ones block.
    pub const MAX: Self = Self([u64::MAX; LIMBS]);

    /// Builds a block from limbs in storage order (index 0 is least significant).
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// Builds a block with every limb set to `value`.
    pub const fn splat(value: u64) -> Self {
        Self([value; LIMBS])
    }

    /// Returns a copy of the limbs in storage order.
    pub const fn limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Mutable access to the limbs in storage order.
    pub fn limbs_mut(&mut self) -> &mut [u64; LIMBS] {
        &mut self.0
    }

    /// Returns the limb at `index`, see [`Mem256::LOW`] .. [`Mem256::HIGH`].
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    pub const fn limb(&self, index: usize) -> u64 {
        self.0[index]
    }

    pub const fn is_zero(&self) -> bool {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0
    }
}

/// Joins two limbs into one double-width word, `high` in the upper half.
#[inline(always)]
pub(crate) const fn make_double(low: u64, high: u64) -> u128 {
    (low as u128) | ((high as u128) << LIMB_BITS)
}

/// Synthesizes the mask of bits in the half-open range `start..end`.
///
/// Both bounds are clamped to `0..=256`, an empty or inverted range yields
/// the zero mask. Callers validate their own preconditions before this.
pub(crate) const fn range_mask(start: usize, end: usize) -> [u64; LIMBS] {
    let mut out = [0u64; LIMBS];

    let mut i = 0;
    while i < LIMBS {
        let base = i * LIMB_BITS;
        let lo = clamp_to_limb(start, base);
        let hi = clamp_to_limb(end, base);

        if hi > lo {
            out[i] = (u64::MAX >> (LIMB_BITS - (hi - lo))) << lo;
        }

        i += 1;
    }

    out
}

#[inline(always)]
const fn clamp_to_limb(bit: usize, base: usize) -> usize {
    if bit <= base {
        0
    } else if bit - base >= LIMB_BITS {
        LIMB_BITS
    } else {
        bit - base
    }
}

impl Display for Mem256 {
    /// Formats the block as colon-separated hexadecimal limbs.
    ///
    /// Limbs are printed from most to least significant, each as sixteen
    /// uppercase hexadecimal characters.
    ///
    /// Example:
    /// `0000000000000000:0000000000000001:0000000000000000:0000000000000000`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, limb) in self.0.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:016X}", limb)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_mask_within_one_limb() {
        assert_eq!(range_mask(4, 8), [0xF0, 0, 0, 0]);
        assert_eq!(range_mask(64, 65), [0, 1, 0, 0]);
    }

    #[test]
    fn range_mask_across_limbs() {
        assert_eq!(range_mask(60, 68), [0xF << 60, 0xF, 0, 0]);
        assert_eq!(range_mask(0, 256), [u64::MAX; 4]);
        assert_eq!(range_mask(63, 193), [1 << 63, u64::MAX, u64::MAX, 1]);
    }

    #[test]
    fn range_mask_empty() {
        assert_eq!(range_mask(17, 17), [0; 4]);
        assert_eq!(range_mask(256, 256), [0; 4]);
        assert_eq!(range_mask(90, 10), [0; 4]);
    }

    #[test]
    fn make_double_places_high_half() {
        assert_eq!(make_double(1, 2), (2u128 << 64) | 1);
    }
}
