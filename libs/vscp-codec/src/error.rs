//! Codec Error Types
//!
//! Tagged failure kinds for every conversion. The core never collapses these
//! into sentinels; that only happens in [`crate::compat`].

use thiserror::Error;

/// Result type for vscp-codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Conversion failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Absent (null) buffer
    #[error("Invalid buffer: no buffer supplied")]
    InvalidBuffer,

    /// Buffer shorter than the width the conversion needs
    #[error("Insufficient capacity: {required} bytes required, {available} available")]
    InsufficientCapacity { required: usize, available: usize },

    /// Variable-width integer size outside 1..=8
    #[error("Invalid size: {0} (expected 1..=8 bytes)")]
    InvalidSize(usize),
}

impl CodecError {
    /// Buffer of `available` bytes where `required` were needed
    pub fn insufficient_capacity(required: usize, available: usize) -> Self {
        CodecError::InsufficientCapacity {
            required,
            available,
        }
    }

    /// Stable short name, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::InvalidBuffer => "invalid_buffer",
            CodecError::InsufficientCapacity { .. } => "insufficient_capacity",
            CodecError::InvalidSize(_) => "invalid_size",
        }
    }
}
