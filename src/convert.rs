//! Parsing a number typed in one base and rendering it in the others.

use std::fmt;

use num_bigint::{BigInt, Sign};

use crate::base::Base;
use crate::error::{InvalidInput, Result};

/// One convert action: the raw field text and the base it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: String,
    pub base: Base,
}

impl ConversionRequest {
    pub fn new(input: impl Into<String>, base: Base) -> Self {
        Self {
            input: input.into(),
            base,
        }
    }
}

/// A parsed value with its binary, octal and hexadecimal renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub value: BigInt,
    pub binary: String,
    pub octal: String,
    pub hexadecimal: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Binary: {}\nOctal: {}\nHexadecimal: {}",
            self.binary, self.octal, self.hexadecimal
        )
    }
}

pub fn convert(request: &ConversionRequest) -> Result<Conversion> {
    convert_str(&request.input, request.base)
}

pub fn convert_str(input: &str, base: Base) -> Result<Conversion> {
    let value = parse(input, base)?;
    Ok(format(&value))
}

/// Reads `input` as an integer written in `base`.
///
/// Only a zero-length string counts as empty. Surrounding whitespace, one
/// leading sign and the base's own prefix (`0b`, `0o`, `0x`, any case) are
/// accepted; everything after them must be digits of the base.
pub fn parse(input: &str, base: Base) -> Result<BigInt> {
    if input.is_empty() {
        return Err(InvalidInput::empty());
    }

    let trimmed = input.trim();
    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (Sign::Minus, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (Sign::Plus, rest)
    } else {
        (Sign::Plus, trimmed)
    };

    let digits = strip_radix_prefix(unsigned, base);
    let radix = base.radix();

    // parse_bytes would take another sign or '_' separators, so check the alphabet first
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(InvalidInput::invalid_digits(base));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| InvalidInput::invalid_digits(base))?;

    Ok(match sign {
        Sign::Minus => -magnitude,
        _ => magnitude,
    })
}

fn strip_radix_prefix(s: &str, base: Base) -> &str {
    match base.prefix() {
        Some(prefix) => match s.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
            _ => s,
        },
        None => s,
    }
}

/// Negative values keep a leading `-`; hex digits are uppercase.
pub fn format(value: &BigInt) -> Conversion {
    Conversion {
        value: value.clone(),
        binary: value.to_str_radix(2),
        octal: value.to_str_radix(8),
        hexadecimal: value.to_str_radix(16).to_uppercase(),
    }
}
