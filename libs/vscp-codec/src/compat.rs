//! Legacy sentinel API
//!
//! The function surface of the VSCP helper: failed reads come back as `0.0`,
//! failed writes as `None`. Callers that need to tell an invalid buffer apart
//! from a genuine zero should use [`crate::bytes`] directly.

use tracing::debug;

use crate::bytes::{self, require_buffer, require_buffer_mut, SignMode};
use crate::error::Result;

fn or_zero<T: Default>(op: &'static str, result: Result<T>) -> T {
    result.unwrap_or_else(|err| {
        debug!(op, kind = err.kind(), "{}", err);
        T::default()
    })
}

fn or_none<T>(op: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(op, kind = err.kind(), "{}", err);
            None
        },
    }
}

/// Usable prefix of `out`: `capacity` never extends past the slice itself
fn limit(out: &mut [u8], capacity: usize) -> &mut [u8] {
    let end = capacity.min(out.len());
    &mut out[..end]
}

/// 8 bytes to `f64`, `0.0` on failure
pub fn mem_to_double(buf: Option<&[u8]>) -> f64 {
    or_zero("mem_to_double", require_buffer(buf).and_then(bytes::read_f64))
}

/// `f64` to the first 8 bytes of `buf`
///
/// Returns `buf` on success, `None` if it is absent or `capacity < 8`.
pub fn double_to_mem(value: f64, buf: Option<&mut [u8]>, capacity: usize) -> Option<&mut [u8]> {
    let result = require_buffer_mut(buf).and_then(|out| {
        bytes::write_f64(value, limit(out, capacity))?;
        Ok(out)
    });
    or_none("double_to_mem", result)
}

/// 4 bytes to `f32`, `0.0` on failure
pub fn mem_to_float(buf: Option<&[u8]>) -> f32 {
    or_zero("mem_to_float", require_buffer(buf).and_then(bytes::read_f32))
}

/// `f32` to the first 4 bytes of `buf`
pub fn float_to_mem(value: f32, buf: Option<&mut [u8]>, capacity: usize) -> Option<&mut [u8]> {
    let result = require_buffer_mut(buf).and_then(|out| {
        bytes::write_f32(value, limit(out, capacity))?;
        Ok(out)
    });
    or_none("float_to_mem", result)
}

/// 1-8 byte signed integer to `f64` using the sign-bit convention
pub fn mem_to_signed_double(buf: Option<&[u8]>, size: usize) -> f64 {
    let result = require_buffer(buf).and_then(|b| bytes::int_to_f64(b, size, SignMode::SignBit));
    or_zero("mem_to_signed_double", result)
}

/// 1-8 byte unsigned integer to `f64`
pub fn mem_to_unsigned_double(buf: Option<&[u8]>, size: usize) -> f64 {
    let result = require_buffer(buf).and_then(|b| bytes::uint_to_f64(b, size));
    or_zero("mem_to_unsigned_double", result)
}
