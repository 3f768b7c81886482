//! Fixed-width IEEE-754 conversions
//!
//! Bytes are the in-memory representation of the value in platform-native
//! order: `f64::from_ne_bytes` / `to_ne_bytes` reinterpret the bit pattern
//! directly, so there is no alignment requirement on the input slice.
//! NaN payloads and infinities pass through unchanged.

use super::bounds::{leading, require_capacity, DOUBLE_WIDTH, FLOAT_WIDTH};
use crate::error::Result;

// ============================================================================
// Double precision
// ============================================================================

/// Reinterpret the first 8 bytes of `buf` as an `f64`
///
/// Bytes past the eighth are ignored.
pub fn read_f64(buf: &[u8]) -> Result<f64> {
    leading::<DOUBLE_WIDTH>(buf).map(f64::from_ne_bytes)
}

/// Write the 8-byte representation of `value` into the start of `out`
///
/// Bytes past the eighth are left untouched. Nothing is written on failure.
pub fn write_f64(value: f64, out: &mut [u8]) -> Result<()> {
    require_capacity(out.len(), DOUBLE_WIDTH)?;
    out[..DOUBLE_WIDTH].copy_from_slice(&value.to_ne_bytes());
    Ok(())
}

/// Native representation of `value`
#[inline]
pub fn encode_f64(value: f64) -> [u8; DOUBLE_WIDTH] {
    value.to_ne_bytes()
}

// ============================================================================
// Single precision
// ============================================================================

/// Reinterpret the first 4 bytes of `buf` as an `f32`
pub fn read_f32(buf: &[u8]) -> Result<f32> {
    leading::<FLOAT_WIDTH>(buf).map(f32::from_ne_bytes)
}

/// Write the 4-byte representation of `value` into the start of `out`
pub fn write_f32(value: f32, out: &mut [u8]) -> Result<()> {
    require_capacity(out.len(), FLOAT_WIDTH)?;
    out[..FLOAT_WIDTH].copy_from_slice(&value.to_ne_bytes());
    Ok(())
}

/// Native representation of `value`
#[inline]
pub fn encode_f32(value: f32) -> [u8; FLOAT_WIDTH] {
    value.to_ne_bytes()
}
