//! Fixed-width 256-bit memory blocks
//!
//! This crate provides `Mem256`, a 256-bit value stored as four 64-bit limbs,
//! together with the bit-level operations needed to use it as a wide bit
//! vector or as the foundation of wider-than-native unsigned integers.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! operation is a synchronous, in-place transform of a caller-owned value;
//! nothing allocates and no global state exists.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Mem256` type and its operations:
//!   - logical shifts across limb boundaries, reporting lost bits
//!   - single-bit access, population count and bit length
//!   - contiguous range fill
//!   - element-wise OR, AND and XOR
//!
//! # Design goals
//!
//! - No heap allocations
//! - Minimal and explicit APIs
//! - Lost bits reported as plain return values, never as panics
//! - Preconditions on bit indices and ranges checked fail-fast, with
//!   `Result`-returning variants where a caller prefers to recover
//!
//! # Features
//!
//! - `speed`
//!   Demotes the precondition checks of `get` and `fillones` to debug
//!   assertions.
//!
//! # Logging
//!
//! Shifts that drop set bits emit a `trace` record through the `log` facade.
//! The crate never installs a logger itself.

pub mod primitives;

pub use primitives::{Mem256, Mem256Error};
