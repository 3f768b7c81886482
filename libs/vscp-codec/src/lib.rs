//! VSCP Numeric Codec
//!
//! Conversions between raw VSCP payload bytes and numbers.
//!
//! # Architecture
//!
//! - **Bytes**: tagged-result core. Fixed-width `f32`/`f64` reinterpretation
//!   and 1-8 byte integer widening, with shared bounds validation
//! - **Compat**: the legacy helper surface, where failures read as `0.0`/`None`
//! - **Host**: adapter that coerces dynamically typed host arguments into
//!   byte buffers before calling the core
//!
//! All conversions are pure functions over caller-owned buffers and are safe
//! to call concurrently without synchronization.
//!
//! ```
//! use vscp_codec::bytes::{read_uint, int_to_f64, SignMode};
//!
//! assert_eq!(read_uint(&[0x01, 0x00], 2).unwrap(), 256);
//! assert_eq!(int_to_f64(&[0xFF, 0xFE], 2, SignMode::TwosComplement).unwrap(), -2.0);
//! ```

pub mod bytes;
pub mod compat;
pub mod error;
pub mod host;

pub use bytes::{IntWidth, SignMode};
pub use error::{CodecError, Result};
pub use host::{BindingError, HostBinding};
