use super::core::Mem256;

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

impl Mem256 {
    /// Stores the bitwise OR of `self` and `op` in `self`.
    pub fn ior(&mut self, op: &Mem256) {
        self.0
            .iter_mut()
            .zip(op.0.iter())
            .for_each(|(r, o)| *r |= o);
    }

    /// Stores the bitwise AND of `self` and `op` in `self`.
    pub fn and(&mut self, op: &Mem256) {
        self.0
            .iter_mut()
            .zip(op.0.iter())
            .for_each(|(r, o)| *r &= o);
    }

    /// Stores the bitwise XOR of `self` and `op` in `self`.
    pub fn xor(&mut self, op: &Mem256) {
        self.0
            .iter_mut()
            .zip(op.0.iter())
            .for_each(|(r, o)| *r ^= o);
    }
}

impl BitOr<Mem256> for Mem256 {
    type Output = Mem256;

    fn bitor(mut self, rhs: Mem256) -> Self::Output {
        self.ior(&rhs);
        self
    }
}

impl BitAnd<Mem256> for Mem256 {
    type Output = Mem256;

    fn bitand(mut self, rhs: Mem256) -> Self::Output {
        self.and(&rhs);
        self
    }
}

impl BitXor<Mem256> for Mem256 {
    type Output = Mem256;

    fn bitxor(mut self, rhs: Mem256) -> Self::Output {
        self.xor(&rhs);
        self
    }
}

impl BitOrAssign<Mem256> for Mem256 {
    fn bitor_assign(&mut self, rhs: Mem256) {
        self.ior(&rhs);
    }
}

impl BitAndAssign<Mem256> for Mem256 {
    fn bitand_assign(&mut self, rhs: Mem256) {
        self.and(&rhs);
    }
}

impl BitXorAssign<Mem256> for Mem256 {
    fn bitxor_assign(&mut self, rhs: Mem256) {
        self.xor(&rhs);
    }
}

impl Not for Mem256 {
    type Output = Mem256;

    fn not(self) -> Self::Output {
        Mem256(self.0.map(|limb| !limb))
    }
}
