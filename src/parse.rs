//! Integer parsing for string inputs.
//!
//! Two modes are provided:
//!
//! - [`parse_leading_int`]: lenient. Skips leading whitespace (including the U+FEFF byte order
//!   mark), accepts one optional sign, then reads the longest run of ASCII digits and ignores
//!   whatever follows (`"42abc"` parses as `42`). Only base 10 is recognized, so `"0x1A"` parses as `0` with an `x` remainder.
//! - [`parse_int_strict`]: the whole (trimmed) value must be an integer.

use crate::types::ParsedInt;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Lenient leading-integer parse.
///
/// Returns [`ParsedInt::invalid`] when no digits follow the optional sign. Magnitudes beyond
/// the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> ParsedInt {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        return ParsedInt::invalid();
    }

    let value = unsigned.as_bytes()[..digit_count]
        .iter()
        .fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            // Accumulate toward the sign so i64::MIN is reachable.
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        });

    ParsedInt::valid(value)
}

/// Strict integer parse of the whole value (surrounding whitespace allowed).
///
/// The error string is suitable for [`crate::error::TransformError::Parse`].
pub fn parse_int_strict(raw: &str) -> Result<i64, String> {
    raw.trim().parse::<i64>().map_err(|e| e.to_string())
}
