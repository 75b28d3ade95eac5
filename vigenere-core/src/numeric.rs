//! Lenient integer parsing for key tokens and numeric options

use crate::error::{Result, VigenereError};

/// Parses the integer at the start of `text`.
///
/// Leading whitespace is skipped and an optional sign is accepted. Anything
/// after the digit run is ignored, so `"12px"` parses as 12.
///
/// Returns `Ok(None)` when no digits follow the optional sign, and an error
/// when the value does not fit in 32 bits.
pub fn parse_leading_int(text: &str) -> Result<Option<i64>> {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Ok(None);
    }

    let digits = &rest[..digits_len];
    let mut value: i64 = 0;
    for digit in digits.bytes() {
        value = value * 10 + i64::from(digit - b'0');
        if value > i64::from(i32::MAX) + 1 {
            return Err(VigenereError::IntegerOutOfRange(text.to_string()));
        }
    }

    let value = if negative { -value } else { value };
    if value > i64::from(i32::MAX) || value < i64::from(i32::MIN) {
        return Err(VigenereError::IntegerOutOfRange(text.to_string()));
    }

    Ok(Some(value))
}
