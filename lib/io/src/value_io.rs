//! # value_io.rs
//!
//! Implements rendering and parsing of flag values and indices.
//!
//! Values render as `0x` prefixed lowercase hex padded to an even digit count
//! (`0x00`, `0x20`, `0x0100`), the byte-aligned form wallets and node
//! clients print big integers in. Parsing accepts that same hex form, upper
//! or lower case, as well as plain decimal. Input is checked against
//! precompiled patterns before it ever reaches the big integer parser, so a
//! parser failure past that point can only mean the number is too wide.

use bnum::types::U256;
use flags::FlagValue;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ParseError, Result};

lazy_static! {
    static ref HEX_PATTERN: Regex = Regex::new(
        r"^0[xX]([0-9a-fA-F]+)$"
    ).unwrap();
    static ref DEC_PATTERN: Regex = Regex::new(
        r"^([0-9]+)$"
    ).unwrap();
    static ref INDEX_PATTERN: Regex = Regex::new(
        r"^[+-]?[0-9]+$"
    ).unwrap();
}

const MAX_HEX_DIGITS: usize = 64;

pub fn format_value(value: &FlagValue) -> String {
    let digits = format!("{:x}", value);

    if digits.len() % 2 == 1 {
        format!("0x0{}", digits)                                                /* Pad to a whole byte               */
    } else {
        format!("0x{}", digits)
    }
}

pub fn format_flag(flag: bool) -> String {
    flag.to_string()
}

/// Parses a flag value from hex (`0x30`) or decimal (`48`) text.
///
/// # Examples
///
/// ```
/// use flags::FlagValue;
///
/// assert_eq!(io::parse_value("0x30"), Ok(FlagValue::from(48u64)));
/// assert_eq!(io::parse_value("48"), Ok(FlagValue::from(48u64)));
/// assert!(io::parse_value("-1").is_err());
/// ```
pub fn parse_value(input: &str) -> Result<FlagValue> {
    let input = input.trim();

    if let Some(cap) = HEX_PATTERN.captures(input) {
        let digits = strip_zeros(cap.get(1).map_or("", |m| m.as_str()));

        if digits.len() > MAX_HEX_DIGITS {
            log::debug!("rejecting {} hex digits in {input:?}", digits.len());
            return Err(ParseError::overflow(input));
        }

        return parse_radix(input, digits, 16);
    }

    if let Some(cap) = DEC_PATTERN.captures(input) {
        let digits = strip_zeros(cap.get(1).map_or("", |m| m.as_str()));
        return parse_radix(input, digits, 10);
    }

    log::debug!("rejecting malformed value {input:?}");
    Err(ParseError::malformed(input))
}

/// Parses a signed decimal index. Range reduction is left to the flag
/// operations, so any `i64` is accepted here.
pub fn parse_index(input: &str) -> Result<i64> {
    let input = input.trim();

    if !INDEX_PATTERN.is_match(input) {
        log::debug!("rejecting malformed index {input:?}");
        return Err(ParseError::malformed(input));
    }

    input.parse::<i64>().map_err(|_| ParseError::overflow(input))
}

fn strip_zeros(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

fn parse_radix(input: &str, digits: &str, radix: u32) -> Result<FlagValue> {
    if digits.is_empty() {
        return Ok(FlagValue::zero());                                           /* All zeros                         */
    }

    U256::from_str_radix(digits, radix)
        .map(FlagValue::from)
        .map_err(|_| ParseError::overflow(input))
}
