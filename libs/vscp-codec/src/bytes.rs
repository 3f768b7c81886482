//! Raw byte buffer conversions
//!
//! Reinterprets caller-owned byte buffers as IEEE-754 values and widens
//! 1-8 byte integers to `f64`.
//!
//! - `bounds`: width constants and shared validation
//! - `fixed`: 4-byte `f32` and 8-byte `f64`, native byte order
//! - `widen`: 1-8 byte integers, most significant byte first
//!
//! Every function here returns a tagged [`crate::Result`]. None of them keep
//! state, so they can be called from any number of threads at once.

pub mod bounds;
pub mod fixed;
pub mod widen;

pub use bounds::{
    require_buffer, require_buffer_mut, require_capacity, IntWidth, DOUBLE_WIDTH, FLOAT_WIDTH,
    MAX_INT_WIDTH,
};
pub use fixed::*;
pub use widen::*;
