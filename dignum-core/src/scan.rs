//! Cursor-level scanning: blank skipping and the unsigned decimal lexer.
//!
//! Cursors are byte offsets into the input. The end of the input acts as the
//! terminator; it is never blank and never a digit, so every scan stops there.

use crate::{error::ErrorCode, ParseResult};

/// A lexed decimal magnitude and the offset just past its last digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedNumber {
    /// Numeric value of the digit run
    pub value: u64,
    /// Byte offset of the first character after the run
    pub end: usize,
}

/// `true` for space, tab, newline and carriage return.
pub const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// First offset at or after `pos` that is not blank.
pub const fn skip_blanks(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = pos;
    while pos < bytes.len() && is_blank(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Byte at `pos`, or `None` at (or past) the terminator.
pub(crate) const fn byte_at(text: &str, pos: usize) -> Option<u8> {
    let bytes = text.as_bytes();
    if pos < bytes.len() {
        Some(bytes[pos])
    } else {
        None
    }
}

/// Consume the maximal run of ASCII digits starting at `start`.
///
/// Fails with [`ErrorCode::Empty`] when `start` is at the terminator,
/// [`ErrorCode::InvalidCharacter`] when the first character is not a digit,
/// and [`ErrorCode::Overflow`] as soon as the next digit would take the value
/// past `u64::MAX`. Both overflow checks run before the arithmetic they guard.
pub const fn lex_unsigned(text: &str, start: usize) -> ParseResult<ParsedNumber> {
    let bytes = text.as_bytes();
    match byte_at(text, start) {
        None => return ParseResult::Unexpected(ErrorCode::Empty),
        Some(first) if !first.is_ascii_digit() => {
            return ParseResult::Unexpected(ErrorCode::InvalidCharacter)
        }
        Some(_) => {}
    }

    let mut value: u64 = 0;
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        let digit = (bytes[pos] - b'0') as u64;
        if value > u64::MAX / 10 {
            return ParseResult::Unexpected(ErrorCode::Overflow);
        }
        value *= 10;
        if value > u64::MAX - digit {
            return ParseResult::Unexpected(ErrorCode::Overflow);
        }
        value += digit;
        pos += 1;
    }

    ParseResult::Value(ParsedNumber { value, end: pos })
}
