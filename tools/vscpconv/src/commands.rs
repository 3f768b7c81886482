//! Conversion commands
//!
//! Byte arguments go through the same host adapter a scripting runtime would
//! use, so fixed-width input is zero-padded or truncated, and out of range
//! entries read as 0.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::{json, Value};
use tracing::debug;
use vscp_codec::host::to_value;
use vscp_codec::{HostBinding, SignMode};

use crate::config::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode 8 bytes (native order) as a double
    DecodeDouble {
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<String>,
    },

    /// Decode 4 bytes (native order) as a single precision float
    DecodeFloat {
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<String>,
    },

    /// Encode a number as 8 double precision bytes
    EncodeDouble {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Encode a number as 4 single precision bytes
    EncodeFloat {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Widen a 1-8 byte unsigned integer (MSB first)
    DecodeUint {
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<String>,
    },

    /// Widen a 1-8 byte signed integer (MSB first)
    DecodeInt {
        /// sign-bit or twos-complement (defaults to the configured mode)
        #[arg(long)]
        sign_mode: Option<SignMode>,

        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<String>,
    },
}

/// A conversion result ready for printing
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Double(f64),
    Single(f32),
    Bytes(Vec<u8>),
}

impl Rendered {
    pub fn render(&self, format: OutputFormat) -> String {
        match (self, format) {
            (Rendered::Double(v), OutputFormat::Json) => {
                json!({ "value": json_number(v.to_string()) }).to_string()
            },
            (Rendered::Single(v), OutputFormat::Json) => {
                json!({ "value": json_number(v.to_string()) }).to_string()
            },
            (Rendered::Bytes(b), OutputFormat::Json) => json!({ "bytes": to_value(b) }).to_string(),
            (Rendered::Double(v), _) => v.to_string(),
            (Rendered::Single(v), _) => v.to_string(),
            (Rendered::Bytes(b), OutputFormat::Hex) => b
                .iter()
                .map(|x| format!("{:02X}", x))
                .collect::<Vec<_>>()
                .join(" "),
            (Rendered::Bytes(b), OutputFormat::Plain) => b
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// JSON number from a `Display` rendering
///
/// Non-finite values have no JSON number form and stay strings (`"NaN"`,
/// `"inf"`, `"-inf"`). Going through `Display` keeps an `f32` at its own
/// shortest form instead of its widened `f64` digits.
fn json_number(text: String) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::from(n),
        _ => Value::String(text),
    }
}

/// Parse one byte argument into a host number
///
/// `0x`-prefixed values are always hex; bare values are hex when `hex` is set
/// and decimal otherwise.
pub fn parse_byte_arg(arg: &str, hex: bool) -> Result<Value> {
    let trimmed = arg.trim();
    let hex_digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or(if hex { Some(trimmed) } else { None });

    if let Some(digits) = hex_digits {
        let n = u64::from_str_radix(digits, 16)
            .with_context(|| format!("Invalid hex byte: {}", arg))?;
        return Ok(Value::from(n));
    }

    let n: f64 = trimmed
        .parse()
        .with_context(|| format!("Invalid byte: {}", arg))?;
    Ok(json!(n))
}

fn byte_args(args: &[String], hex: bool) -> Result<Vec<Value>> {
    let values = args
        .iter()
        .map(|a| parse_byte_arg(a, hex))
        .collect::<Result<Vec<_>>>()?;
    Ok(vec![Value::Array(values)])
}

pub fn execute(command: &Commands, binding: HostBinding, hex: bool) -> Result<Rendered> {
    debug!(?command, sign_mode = %binding.sign_mode(), "executing");

    let rendered = match command {
        Commands::DecodeDouble { bytes } => {
            Rendered::Double(binding.mem_to_double(&byte_args(bytes, hex)?)?)
        },
        Commands::DecodeFloat { bytes } => {
            Rendered::Single(binding.mem_to_single(&byte_args(bytes, hex)?)?)
        },
        Commands::EncodeDouble { value } => Rendered::Bytes(binding.encode_double(*value)?),
        Commands::EncodeFloat { value } => Rendered::Bytes(binding.encode_single(*value as f32)?),
        Commands::DecodeUint { bytes } => {
            Rendered::Double(binding.mem_uint_to_double(&byte_args(bytes, hex)?)?)
        },
        Commands::DecodeInt { sign_mode, bytes } => {
            let binding = sign_mode.map(HostBinding::new).unwrap_or(binding);
            Rendered::Double(binding.mem_int_to_double(&byte_args(bytes, hex)?)?)
        },
    };

    Ok(rendered)
}
