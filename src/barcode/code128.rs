//! # Code 128 Subset B Encoder
//!
//! Turns label data into the sequence of code values that the rasterizer
//! paints:
//!
//! ```text
//! [START B, v1, v2, ..., vn, checksum symbol, STOP]
//! ```
//!
//! ## Checksum
//!
//! ```text
//! sum      = 104 + Σ value(i) × (i + 1)     (i is the 0-based position)
//! checksum = sum mod 103
//! ```
//!
//! How the checksum becomes a code value is selected by [`ChecksumSymbol`].
//! Labels printed so far use [`ChecksumSymbol::TableKey`], which picks the
//! symbol at position `checksum mod 94` in the storefront key order
//! ([`tables::table_keys`], digits first):
//!
//! | Checksum | Appended value |
//! |----------|----------------|
//! | 0-9 | 16-25 (`0`-`9`) |
//! | 10-25 | 0-15 (space through `/`) |
//! | 26-93 | unchanged |
//! | 94-102 | 16-24 (`0`-`8`) |
//!
//! [`ChecksumSymbol::CodeValue`] appends the checksum value itself.
//!
//! ## Example
//!
//! ```
//! use hangtag::barcode::code128::{self, START_B, STOP};
//!
//! let message = code128::encode("A00001_ffffff_S ");
//! assert_eq!(message.data(), "A00001_ffffff_S");
//! assert_eq!(message.values().first(), Some(&START_B));
//! assert_eq!(message.values().last(), Some(&STOP));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::sanitize::sanitize;
use super::tables::{self, PATTERN_WIDTH, PRINTABLE_COUNT};
use crate::error::HangtagError;

pub use super::tables::{START_B, STOP};

/// Modulus of the weighted Code 128 checksum.
pub const CHECKSUM_MODULUS: u64 = 103;

/// How the computed checksum is mapped to the appended code value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecksumSymbol {
    /// Index `checksum mod 94` into the storefront key order and append that
    /// key's code value. Matches labels already in circulation; differs from
    /// the true checksum for 0-25 and 94-102.
    #[default]
    TableKey,
    /// Append the checksum value directly.
    CodeValue,
}

impl ChecksumSymbol {
    /// Code value appended for a given checksum (0-102).
    pub fn symbol_value(self, checksum: u8) -> u8 {
        match self {
            ChecksumSymbol::TableKey => {
                let index = checksum as usize % (PRINTABLE_COUNT - 1);
                tables::table_keys()
                    .nth(index)
                    .and_then(tables::code_value)
                    .unwrap_or(0)
            }
            ChecksumSymbol::CodeValue => checksum,
        }
    }
}

impl fmt::Display for ChecksumSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumSymbol::TableKey => write!(f, "table-key"),
            ChecksumSymbol::CodeValue => write!(f, "code-value"),
        }
    }
}

impl FromStr for ChecksumSymbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table-key" | "table_key" | "key" => Ok(ChecksumSymbol::TableKey),
            "code-value" | "code_value" | "value" | "standard" => Ok(ChecksumSymbol::CodeValue),
            other => Err(format!(
                "unknown checksum symbol mode '{}' (expected table-key or code-value)",
                other
            )),
        }
    }
}

/// A fully encoded barcode message.
///
/// Built fresh per barcode and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedMessage {
    data: String,
    values: Vec<u8>,
    checksum: u8,
}

impl EncodedMessage {
    /// The data that was encoded (after any caller-side sanitization).
    pub fn data(&self) -> &str {
        &self.data
    }

    /// All code values, START B through STOP.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The raw mod-103 checksum. In [`ChecksumSymbol::TableKey`] mode this can
    /// differ from the appended symbol value.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The appended checksum symbol value (second to last code value).
    ///
    /// `None` only for hand-built messages shorter than two values.
    pub fn checksum_symbol(&self) -> Option<u8> {
        self.values
            .len()
            .checked_sub(2)
            .map(|i| self.values[i])
    }

    /// Number of modules in the concatenated pattern.
    pub fn module_count(&self) -> usize {
        self.values.len() * PATTERN_WIDTH
    }

    /// Always false for encoder output, which carries at least START B,
    /// the checksum and STOP.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Concatenated bar/space pattern of every code value.
    ///
    /// Fails on the first value that has no pattern (above 106), which only
    /// hand-built messages can contain.
    pub fn modules(&self) -> crate::error::Result<String> {
        let mut bits = String::with_capacity(self.module_count());
        for &value in &self.values {
            let p = tables::pattern(value).ok_or(HangtagError::InvalidCodeValue(value))?;
            bits.push_str(p);
        }
        Ok(bits)
    }

    /// Build a message from raw code values, bypassing the encoder.
    ///
    /// Used to feed hand-built sequences to the rasterizer. No validation is
    /// done here.
    pub fn from_values(values: Vec<u8>) -> Self {
        let checksum = values.len().checked_sub(2).map_or(0, |i| values[i]);
        Self {
            data: String::new(),
            values,
            checksum,
        }
    }
}

/// Code 128 subset B encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    checksum_symbol: ChecksumSymbol,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checksum_symbol(checksum_symbol: ChecksumSymbol) -> Self {
        Self { checksum_symbol }
    }

    pub fn checksum_symbol(&self) -> ChecksumSymbol {
        self.checksum_symbol
    }

    /// Encode `data` as-is.
    ///
    /// Does not sanitize. Characters outside the printable table encode as
    /// value 0 (space) rather than failing.
    pub fn encode(&self, data: &str) -> EncodedMessage {
        let mut values = Vec::with_capacity(data.len() + 3);
        values.push(START_B);

        let mut sum = START_B as u64;
        let mut checksum = (sum % CHECKSUM_MODULUS) as u8;

        for (i, c) in data.chars().enumerate() {
            let value = tables::code_value(c).unwrap_or(0);
            values.push(value);
            sum = (sum + value as u64 * (i as u64 + 1)) % CHECKSUM_MODULUS;
            checksum = sum as u8;
        }

        values.push(self.checksum_symbol.symbol_value(checksum));
        values.push(STOP);

        EncodedMessage {
            data: data.to_string(),
            values,
            checksum,
        }
    }

    /// Sanitize `input` and encode the result.
    pub fn encode_sanitized(&self, input: &str) -> EncodedMessage {
        self.encode(&sanitize(input))
    }
}

/// Sanitize and encode with the default encoder.
pub fn encode(input: &str) -> EncodedMessage {
    Encoder::new().encode_sanitized(input)
}
