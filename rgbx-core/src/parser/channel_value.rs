//! Parser for manually typed channel values.
//!
//! A channel entry accepts decimal (`0`-`255`), prefixed hexadecimal
//! (`0x00`-`0xFF`) or bare hexadecimal of at most two digits (`00`-`FF`).
//! Input is trimmed and compared case-insensitively. Values outside 0-255
//! are rejected rather than clamped.

use std::num::IntErrorKind;

use tracing::debug;

use crate::error::ParseError;

/// Parse a channel entry into a 0-255 value.
pub fn parse_channel_value(text: &str) -> Result<u8, ParseError> {
    let value = text.trim().to_ascii_lowercase();
    let result = parse_normalized(&value);
    if let Err(e) = &result {
        debug!("Rejected channel entry {:?}: {}", text, e);
    }
    result
}

fn parse_normalized(value: &str) -> Result<u8, ParseError> {
    if value.is_empty() {
        return Err(ParseError::Empty);
    }

    if value.bytes().all(|b| b.is_ascii_digit()) {
        return to_channel(value, value, 10);
    }

    if let Some(digits) = value.strip_prefix("0x") {
        if !is_hex(digits) {
            return Err(malformed(value));
        }
        return to_channel(value, digits, 16);
    }

    if value.len() <= 2 && is_hex(value) {
        return to_channel(value, value, 16);
    }

    Err(malformed(value))
}

/// Non-empty and nothing but hex digits (no sign, no separators).
fn is_hex(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn to_channel(input: &str, digits: &str, radix: u32) -> Result<u8, ParseError> {
    match u8::from_str_radix(digits, radix) {
        Ok(v) => Ok(v),
        // Digits were validated above, so overflow is the only way to fail.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(ParseError::OutOfRange {
            input: input.to_string(),
        }),
        Err(_) => Err(malformed(input)),
    }
}

fn malformed(input: &str) -> ParseError {
    ParseError::Malformed {
        input: input.to_string(),
    }
}
