//! Host argument adapter
//!
//! Marshals dynamically typed host arguments (modelled as `serde_json::Value`)
//! into fixed byte buffers before calling the codec, and results back out.
//! Host type errors are raised here; the codec itself never sees malformed
//! arguments.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::bytes::{self, SignMode, DOUBLE_WIDTH, FLOAT_WIDTH, MAX_INT_WIDTH};
use crate::error::CodecError;

/// Host-level argument errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Array expected")]
    ArrayExpected,

    #[error("Number expected")]
    NumberExpected,

    #[error("Two arguments expected. Array and size expected")]
    ArrayAndSizeExpected,

    #[error("Conversion failed: {0}")]
    Conversion(#[from] CodecError),
}

pub type BindingResult<T> = std::result::Result<T, BindingError>;

// ============================================================================
// Coercion
// ============================================================================

/// Coerce one host value to a byte
///
/// Numbers are truncated toward zero. Anything that is not a number, or lands
/// outside 0..=255 after truncation, becomes 0.
pub fn coerce_byte(value: &Value) -> u8 {
    match value.as_f64() {
        Some(n) if n.is_finite() => {
            let t = n.trunc();
            if (0.0..=255.0).contains(&t) {
                t as u8
            } else {
                0
            }
        },
        _ => 0,
    }
}

/// Coerce the first `N` host values into a zero-padded buffer
pub fn coerce_bytes<const N: usize>(values: &[Value]) -> [u8; N] {
    let mut buf = [0u8; N];
    for (slot, value) in buf.iter_mut().zip(values) {
        *slot = coerce_byte(value);
    }
    buf
}

/// Bytes back out as a host array of numbers
pub fn to_value(bytes: &[u8]) -> Value {
    Value::Array(bytes.iter().map(|&b| Value::from(b)).collect())
}

fn array_arg(args: &[Value], missing: BindingError) -> BindingResult<&[Value]> {
    match args.first().and_then(Value::as_array) {
        Some(values) => Ok(values.as_slice()),
        None => {
            debug!(error = %missing, "rejected host arguments");
            Err(missing)
        },
    }
}

fn number_arg(args: &[Value]) -> BindingResult<f64> {
    match args.first().and_then(Value::as_f64) {
        Some(n) => Ok(n),
        None => {
            debug!(error = %BindingError::NumberExpected, "rejected host arguments");
            Err(BindingError::NumberExpected)
        },
    }
}

// ============================================================================
// Binding
// ============================================================================

/// Host-facing conversion entry points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostBinding {
    sign_mode: SignMode,
}

impl HostBinding {
    pub fn new(sign_mode: SignMode) -> Self {
        Self { sign_mode }
    }

    pub fn sign_mode(&self) -> SignMode {
        self.sign_mode
    }

    /// `[bytes]` to `f64`; short arrays are zero-padded
    pub fn mem_to_double(&self, args: &[Value]) -> BindingResult<f64> {
        let values = array_arg(args, BindingError::ArrayExpected)?;
        let buf = coerce_bytes::<DOUBLE_WIDTH>(values);
        Ok(bytes::read_f64(&buf)?)
    }

    /// `number` to 8 bytes
    ///
    /// JSON has no NaN or infinity; hosts holding those call
    /// [`HostBinding::encode_double`] instead.
    pub fn double_to_mem(&self, args: &[Value]) -> BindingResult<Vec<u8>> {
        self.encode_double(number_arg(args)?)
    }

    /// `f64` to 8 bytes, any bit pattern including NaN and infinities
    pub fn encode_double(&self, value: f64) -> BindingResult<Vec<u8>> {
        let mut buf = [0u8; DOUBLE_WIDTH];
        bytes::write_f64(value, &mut buf)?;
        Ok(buf.to_vec())
    }

    /// `[bytes]` to `f32`
    pub fn mem_to_single(&self, args: &[Value]) -> BindingResult<f32> {
        let values = array_arg(args, BindingError::ArrayExpected)?;
        let buf = coerce_bytes::<FLOAT_WIDTH>(values);
        Ok(bytes::read_f32(&buf)?)
    }

    /// `number` narrowed to `f32`, then to 4 bytes
    pub fn single_to_mem(&self, args: &[Value]) -> BindingResult<Vec<u8>> {
        self.encode_single(number_arg(args)? as f32)
    }

    /// `f32` to 4 bytes, any bit pattern including NaN and infinities
    pub fn encode_single(&self, value: f32) -> BindingResult<Vec<u8>> {
        let mut buf = [0u8; FLOAT_WIDTH];
        bytes::write_f32(value, &mut buf)?;
        Ok(buf.to_vec())
    }

    /// `[bytes]` as an unsigned integer, width taken from the array length
    pub fn mem_uint_to_double(&self, args: &[Value]) -> BindingResult<f64> {
        let values = array_arg(args, BindingError::ArrayAndSizeExpected)?;
        let (buf, size) = Self::int_buffer(values);
        if size == 0 {
            return Ok(0.0);
        }
        Ok(bytes::uint_to_f64(&buf, size)?)
    }

    /// `[bytes]` as a signed integer using the configured [`SignMode`]
    pub fn mem_int_to_double(&self, args: &[Value]) -> BindingResult<f64> {
        let values = array_arg(args, BindingError::ArrayAndSizeExpected)?;
        let (buf, size) = Self::int_buffer(values);
        if size == 0 {
            return Ok(0.0);
        }
        Ok(bytes::int_to_f64(&buf, size, self.sign_mode)?)
    }

    fn int_buffer(values: &[Value]) -> ([u8; MAX_INT_WIDTH], usize) {
        (
            coerce_bytes::<MAX_INT_WIDTH>(values),
            values.len().min(MAX_INT_WIDTH),
        )
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_byte() {
        let cases = [
            (json!(0), 0u8),
            (json!(255), 255),
            (json!(12.9), 12),
            (json!(-0.5), 0),
            (json!(256), 0),
            (json!(-1), 0),
            (json!("7"), 0),
            (json!(null), 0),
            (json!(true), 0),
            (json!([1]), 0),
        ];

        for (input, expected) in cases {
            assert_eq!(coerce_byte(&input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_coerce_bytes_pad_and_truncate() {
        let short = [json!(1), json!(2)];
        assert_eq!(coerce_bytes::<4>(&short), [1, 2, 0, 0]);

        let long: Vec<Value> = (1..=10).map(Value::from).collect();
        assert_eq!(coerce_bytes::<4>(&long), [1, 2, 3, 4]);
    }

    #[test]
    fn test_to_value() {
        assert_eq!(to_value(&[0, 127, 255]), json!([0, 127, 255]));
    }

    #[test]
    fn test_double_round_trip_through_host() {
        let binding = HostBinding::default();
        let bytes = binding.double_to_mem(&[json!(-42.125)]).unwrap();
        assert_eq!(bytes.len(), 8);

        let value = binding.mem_to_double(&[to_value(&bytes)]).unwrap();
        assert_eq!(value, -42.125);
    }

    #[test]
    fn test_single_narrows() {
        let binding = HostBinding::default();
        let bytes = binding.single_to_mem(&[json!(0.1)]).unwrap();
        assert_eq!(bytes, 0.1f32.to_ne_bytes().to_vec());
        assert_eq!(binding.mem_to_single(&[to_value(&bytes)]).unwrap(), 0.1f32);
    }

    #[test]
    fn test_argument_errors() {
        let binding = HostBinding::default();
        assert_eq!(binding.mem_to_double(&[]), Err(BindingError::ArrayExpected));
        assert_eq!(
            binding.mem_to_single(&[json!(3)]),
            Err(BindingError::ArrayExpected)
        );
        assert_eq!(
            binding.double_to_mem(&[json!([1, 2])]),
            Err(BindingError::NumberExpected)
        );
        assert_eq!(
            binding.single_to_mem(&[json!("1.5")]),
            Err(BindingError::NumberExpected)
        );
        assert_eq!(
            binding.mem_uint_to_double(&[json!({})]),
            Err(BindingError::ArrayAndSizeExpected)
        );
        assert_eq!(
            binding.mem_int_to_double(&[]),
            Err(BindingError::ArrayAndSizeExpected)
        );
    }

    #[test]
    fn test_integer_width_from_array_length() {
        let binding = HostBinding::default();
        assert_eq!(binding.mem_uint_to_double(&[json!([0x01, 0x00])]).unwrap(), 256.0);
        assert_eq!(binding.mem_uint_to_double(&[json!([])]).unwrap(), 0.0);

        // Entries past the eighth are dropped
        let nine = json!([0, 0, 0, 0, 0, 0, 0, 1, 99]);
        assert_eq!(binding.mem_uint_to_double(&[nine]).unwrap(), 1.0);
    }

    #[test]
    fn test_signed_follows_configured_mode() {
        let args = [json!([0x80])];
        assert_eq!(
            HostBinding::default().mem_int_to_double(&args).unwrap(),
            i64::MIN as f64
        );
        assert_eq!(
            HostBinding::new(SignMode::TwosComplement)
                .mem_int_to_double(&args)
                .unwrap(),
            -128.0
        );
    }

    #[test]
    fn test_special_values_encode() {
        let binding = HostBinding::default();
        let nan = f64::from_bits(0x7FF8_0000_0000_0042);

        let bytes = binding.encode_double(nan).unwrap();
        assert_eq!(bytes, 0x7FF8_0000_0000_0042u64.to_ne_bytes().to_vec());
        assert_eq!(
            binding.encode_double(f64::INFINITY).unwrap(),
            f64::INFINITY.to_ne_bytes().to_vec()
        );
        assert_eq!(
            binding.encode_double(f64::NEG_INFINITY).unwrap(),
            f64::NEG_INFINITY.to_ne_bytes().to_vec()
        );

        let bytes = binding.encode_single(f32::NAN).unwrap();
        assert_eq!(bytes, f32::NAN.to_bits().to_ne_bytes().to_vec());
        assert_eq!(
            binding.encode_single(f32::NEG_INFINITY).unwrap(),
            f32::NEG_INFINITY.to_ne_bytes().to_vec()
        );
    }

    #[test]
    fn test_special_values_decode() {
        let binding = HostBinding::default();
        let inf = to_value(&f64::INFINITY.to_ne_bytes());
        assert_eq!(binding.mem_to_double(&[inf]).unwrap(), f64::INFINITY);

        let nan = to_value(&0x7FF8_0000_0000_0042u64.to_ne_bytes());
        let value = binding.mem_to_double(&[nan]).unwrap();
        assert_eq!(value.to_bits(), 0x7FF8_0000_0000_0042);

        let neg_inf = to_value(&f32::NEG_INFINITY.to_ne_bytes());
        assert_eq!(binding.mem_to_single(&[neg_inf]).unwrap(), f32::NEG_INFINITY);
    }

    #[test]
    fn test_non_numeric_entries_become_zero() {
        let binding = HostBinding::default();
        let args = [json!(["x", 0x01])];
        assert_eq!(binding.mem_uint_to_double(&args).unwrap(), 1.0);
    }
}
