//! 256-bit memory block
//!
//! The block is split by responsibility:
//!
//! - `core`  
//!   Limb layout, constructors, accessors, formatting and the shared
//!   range-mask helper.
//!
//! - `shift`  
//!   The shift engine: `lshift`, `rshift` and the signed `shift`
//!   dispatcher, each reporting bits lost off the ends.
//!
//! - `query`  
//!   Single-bit access, population count and bit length.
//!
//! - `fill`  
//!   Setting a contiguous bit range to one.
//!
//! - `ops`  
//!   Element-wise OR, AND and XOR over the limbs.
//!
//! - `conv`  
//!   Conversions to and from native integers and limb arrays.

mod conv;
mod core;
mod error;
mod fill;
mod ops;
mod query;
mod shift;

pub use self::core::Mem256;
pub use error::Mem256Error;
