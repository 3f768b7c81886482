//! Variable-width integer widening
//!
//! VSCP measurement payloads carry integers of 1 to 8 bytes, most significant
//! byte first. They are right-aligned into a zero-filled 8-byte working buffer
//! and read back as a 64-bit integer, then widened to `f64`.
//!
//! `f64` holds 53 bits of exact integer mantissa. Wider magnitudes are rounded
//! to the nearest representable double.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bounds::{require_capacity, IntWidth, MAX_INT_WIDTH};
use crate::error::Result;

const SIGN_BIT: u8 = 0x80;

/// How the sign of a variable-width integer is reconstructed
///
/// For 8-byte input both modes agree. They differ for narrower input:
///
/// | input    | size | `SignBit`            | `TwosComplement` |
/// |----------|------|----------------------|------------------|
/// | `[0x7F]` | 1    | 127                  | 127              |
/// | `[0x80]` | 1    | -9223372036854775808 | -128             |
/// | `[0xFF]` | 1    | -9223372036854775681 | -1               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignMode {
    /// VSCP helper convention: bit 7 of the first byte moves to bit 63 of
    /// the working buffer, the remaining bits are read as magnitude bits of a
    /// two's complement `i64`. Upper bytes are not sign-extended.
    #[default]
    #[serde(alias = "legacy")]
    SignBit,

    /// Standard sign extension from the top bit of the `size`-byte value
    #[serde(alias = "twos")]
    TwosComplement,
}

impl SignMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignBit => "sign-bit",
            Self::TwosComplement => "twos-complement",
        }
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "sign-bit" | "signbit" | "legacy" => Ok(Self::SignBit),
            "twos-complement" | "twoscomplement" | "twos" => Ok(Self::TwosComplement),
            other => Err(format!(
                "unknown sign mode '{}' (expected sign-bit or twos-complement)",
                other
            )),
        }
    }
}

// ============================================================================
// Working buffer
// ============================================================================

/// Right-align the first `width` bytes of `buf` into a zero-filled 8-byte buffer
///
/// Byte 0 of the result is the most significant byte.
pub fn working_buffer(buf: &[u8], width: IntWidth) -> Result<[u8; MAX_INT_WIDTH]> {
    let size = width.get();
    require_capacity(buf.len(), size)?;

    let mut wrk = [0u8; MAX_INT_WIDTH];
    wrk[MAX_INT_WIDTH - size..].copy_from_slice(&buf[..size]);
    Ok(wrk)
}

// ============================================================================
// Integer reads
// ============================================================================

/// Read `size` bytes as an unsigned integer
pub fn read_uint(buf: &[u8], size: usize) -> Result<u64> {
    let wrk = working_buffer(buf, IntWidth::new(size)?)?;
    Ok(u64::from_be_bytes(wrk))
}

/// Read `size` bytes as a signed integer
///
/// The caller's buffer is never modified.
pub fn read_int(buf: &[u8], size: usize, mode: SignMode) -> Result<i64> {
    let width = IntWidth::new(size)?;
    let mut wrk = working_buffer(buf, width)?;

    match mode {
        SignMode::SignBit => {
            let msb = MAX_INT_WIDTH - width.get();
            if wrk[msb] & SIGN_BIT != 0 {
                wrk[msb] &= !SIGN_BIT;
                wrk[0] |= SIGN_BIT;
            }
            Ok(i64::from_be_bytes(wrk))
        },
        SignMode::TwosComplement => {
            let shift = 64 - width.bits();
            Ok(((u64::from_be_bytes(wrk) << shift) as i64) >> shift)
        },
    }
}

// ============================================================================
// Widening to f64
// ============================================================================

/// Widen a `size`-byte unsigned integer to `f64`
pub fn uint_to_f64(buf: &[u8], size: usize) -> Result<f64> {
    read_uint(buf, size).map(|v| v as f64)
}

/// Widen a `size`-byte signed integer to `f64`
pub fn int_to_f64(buf: &[u8], size: usize, mode: SignMode) -> Result<f64> {
    read_int(buf, size, mode).map(|v| v as f64)
}
