//! Range fill for `Mem256`

use super::core::{BITS, Mem256, range_mask};
use super::error::Mem256Error;

impl Mem256 {
    /// Sets every bit in the half-open range `start..end` to one.
    ///
    /// Bits outside the range are left untouched. The range may span any
    /// number of limbs; `start == end` is an empty range.
    ///
    /// # Panics
    /// Panics unless `start <= end <= 256`. With the `speed` feature the
    /// check is only performed in debug builds.
    pub fn fillones(&mut self, start: usize, end: usize) {
        #[cfg(not(feature = "speed"))]
        assert!(start <= end && end <= BITS, "invalid bit range");

        #[cfg(feature = "speed")]
        debug_assert!(start <= end && end <= BITS, "invalid bit range");

        let mask = range_mask(start, end);

        self.0
            .iter_mut()
            .zip(mask.iter())
            .for_each(|(limb, m)| *limb |= m);
    }

    /// Like [`Mem256::fillones`], but reports an invalid range as an error
    /// and leaves the block unchanged.
    pub fn try_fillones(&mut self, start: usize, end: usize) -> Result<(), Mem256Error> {
        if start > end || end > BITS {
            return Err(Mem256Error::InvalidRange { start, end });
        }

        self.fillones(start, end);

        Ok(())
    }
}
