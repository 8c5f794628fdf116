//! Shift engine for `Mem256`
//!
//! Logical shifts over the whole 256-bit block. Bits are redistributed across
//! limb boundaries for any distance in `0..256` and the caller learns whether
//! set bits fell off either end.
//!
//! The unsigned entry points only look at the low 8 bits of the distance, so
//! a shift by `n` is the same as a shift by `n % 256`. Sign handling lives
//! exclusively in [`Mem256::shift`].

use super::core::{BITS, LIMB_BITS, LIMBS, Mem256, make_double, range_mask};

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

/// Splits a reduced distance into whole limbs and the intra-limb remainder.
#[inline(always)]
const fn split_distance(shift: u32) -> (usize, u32) {
    let shift = (shift & 255) as usize;
    (shift / LIMB_BITS, (shift % LIMB_BITS) as u32)
}

/// Destination limb of a left shift by `bits` (< 64), fed by `high` and the
/// top `bits` of the limb below it.
#[inline(always)]
const fn funnel_left(high: u64, low: u64, bits: u32) -> u64 {
    (make_double(low, high) << bits >> LIMB_BITS) as u64
}

/// Destination limb of a right shift by `bits` (< 64), fed by `low` and the
/// bottom `bits` of the limb above it.
#[inline(always)]
const fn funnel_right(low: u64, high: u64, bits: u32) -> u64 {
    (make_double(low, high) >> bits) as u64
}

impl Mem256 {
    /// Returns `true` if any bit inside `start..end` is set.
    #[inline]
    fn any_in_range(&self, start: usize, end: usize) -> bool {
        let mask = range_mask(start, end);
        self.0.iter().zip(mask.iter()).any(|(l, m)| l & m != 0)
    }

    /// Shifts the block left by `shift & 255` bits.
    ///
    /// Vacated low bits are zero. Destination limbs are rebuilt from the most
    /// significant one down, so every source limb is read before it is
    /// overwritten.
    ///
    /// # Returns
    /// `true` if a set bit was pushed past bit 255.
    #[must_use = "the overflow flag reports lost bits"]
    pub fn lshift(&mut self, shift: u32) -> bool {
        let reduced = (shift & 255) as usize;
        if reduced == 0 {
            return false;
        }

        let overflow = self.any_in_range(BITS - reduced, BITS);
        let (limbs, bits) = split_distance(shift);

        for dst in (0..LIMBS).rev() {
            self.0[dst] = match dst.checked_sub(limbs) {
                Some(0) => self.0[0] << bits,
                Some(src) => funnel_left(self.0[src], self.0[src - 1], bits),
                None => 0,
            };
        }

        if overflow {
            log::trace!("lshift by {} dropped set bits past the top", reduced);
        }

        overflow
    }

    /// Shifts the block right by `shift & 255` bits.
    ///
    /// Vacated high bits are zero. Destination limbs are rebuilt from the
    /// least significant one up.
    ///
    /// # Returns
    /// `true` if a set bit was pushed below bit 0.
    #[must_use = "the underflow flag reports lost bits"]
    pub fn rshift(&mut self, shift: u32) -> bool {
        let reduced = (shift & 255) as usize;
        if reduced == 0 {
            return false;
        }

        let underflow = self.any_in_range(0, reduced);
        let (limbs, bits) = split_distance(shift);

        for dst in 0..LIMBS {
            let src = dst + limbs;
            self.0[dst] = if src + 1 < LIMBS {
                funnel_right(self.0[src], self.0[src + 1], bits)
            } else if src < LIMBS {
                self.0[src] >> bits
            } else {
                0
            };
        }

        if underflow {
            log::trace!("rshift by {} dropped set bits below the bottom", reduced);
        }

        underflow
    }

    /// Shifts by a signed distance: positive moves bits up, negative down.
    ///
    /// A zero distance is a no-op. Negative distances are negated with
    /// `unsigned_abs`, then reduced like any other [`Mem256::rshift`] distance.
    ///
    /// # Returns
    /// `true` if set bits were lost off either end.
    #[must_use = "the flag reports lost bits"]
    pub fn shift(&mut self, n: i32) -> bool {
        match n {
            0 => false,
            n if n > 0 => self.lshift(n.unsigned_abs()),
            n => self.rshift(n.unsigned_abs()),
        }
    }
}

impl Shl<u32> for Mem256 {
    type Output = Mem256;

    /// Left shift modulo 256 in the distance, discarding the overflow flag.
    fn shl(mut self, rhs: u32) -> Self::Output {
        let _ = self.lshift(rhs);
        self
    }
}

impl Shr<u32> for Mem256 {
    type Output = Mem256;

    /// Right shift modulo 256 in the distance, discarding the underflow flag.
    fn shr(mut self, rhs: u32) -> Self::Output {
        let _ = self.rshift(rhs);
        self
    }
}

impl ShlAssign<u32> for Mem256 {
    fn shl_assign(&mut self, rhs: u32) {
        let _ = self.lshift(rhs);
    }
}

impl ShrAssign<u32> for Mem256 {
    fn shr_assign(&mut self, rhs: u32) {
        let _ = self.rshift(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_left_carries_top_bits() {
        assert_eq!(funnel_left(0, 1 << 63, 1), 1);
        assert_eq!(funnel_left(1, u64::MAX, 4), 0x1F);
        assert_eq!(funnel_left(5, 7, 0), 5);
    }

    #[test]
    fn funnel_right_carries_bottom_bits() {
        assert_eq!(funnel_right(0, 1, 1), 1 << 63);
        assert_eq!(funnel_right(0xF0, 0, 4), 0xF);
        assert_eq!(funnel_right(5, 7, 0), 5);
    }

    #[test]
    fn split_distance_reduces_modulo_256() {
        assert_eq!(split_distance(0), (0, 0));
        assert_eq!(split_distance(65), (1, 1));
        assert_eq!(split_distance(255), (3, 63));
        assert_eq!(split_distance(256 + 130), (2, 2));
    }

    #[test]
    fn any_in_range_sees_single_bit() {
        let v = Mem256::from_limbs([0, 0, 1 << 5, 0]);
        assert!(v.any_in_range(133, 134));
        assert!(!v.any_in_range(134, 256));
        assert!(!v.any_in_range(0, 133));
    }
}
