//! Primitive types
//!
//! Primitives are simple, fixed-size, dependency-free building blocks with
//! well-defined semantics and predictable behavior. They do not attempt to
//! replicate full standard library abstractions or big-integer libraries.
//!
//! Current primitives include:
//! - `Mem256`: a fixed-size 256-bit memory block of four 64-bit limbs

mod mem256;

pub use mem256::{Mem256, Mem256Error};
