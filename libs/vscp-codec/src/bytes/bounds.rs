//! Buffer bounds validation shared by the fixed and variable width codecs

use crate::error::{CodecError, Result};

/// Width of an encoded `f32`
pub const FLOAT_WIDTH: usize = 4;

/// Width of an encoded `f64`
pub const DOUBLE_WIDTH: usize = 8;

/// Widest integer the widening conversions accept
pub const MAX_INT_WIDTH: usize = 8;

/// Integer width in bytes, always within `1..=MAX_INT_WIDTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntWidth(usize);

impl IntWidth {
    /// Validate a declared integer size
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_INT_WIDTH {
            return Err(CodecError::InvalidSize(size));
        }
        Ok(Self(size))
    }

    /// Number of bytes
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of bits
    #[inline]
    pub fn bits(self) -> u32 {
        (self.0 * 8) as u32
    }
}

impl TryFrom<usize> for IntWidth {
    type Error = CodecError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

/// Reject an absent buffer
pub fn require_buffer(buf: Option<&[u8]>) -> Result<&[u8]> {
    buf.ok_or(CodecError::InvalidBuffer)
}

/// Reject an absent output buffer
pub fn require_buffer_mut(buf: Option<&mut [u8]>) -> Result<&mut [u8]> {
    buf.ok_or(CodecError::InvalidBuffer)
}

/// Ensure `available` bytes cover `required`
#[inline]
pub fn require_capacity(available: usize, required: usize) -> Result<()> {
    if available < required {
        return Err(CodecError::insufficient_capacity(required, available));
    }
    Ok(())
}

/// Borrow exactly `N` leading bytes of `buf`
pub(crate) fn leading<const N: usize>(buf: &[u8]) -> Result<[u8; N]> {
    require_capacity(buf.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[..N]);
    Ok(out)
}
