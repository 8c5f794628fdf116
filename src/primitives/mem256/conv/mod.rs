//! Integer conversion utilities
//!
//! Explicit conversions between `Mem256` and native integer types, split by
//! width. Widening conversions zero-extend into the low limbs; narrowing
//! conversions are fallible and never truncate silently.

mod limbs;
mod u128;
mod u64;
