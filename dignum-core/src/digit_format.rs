//! Recursive-descent parser for the digit-in-base notation.
//!
//! ```text
//! ("d" | "dig") WS ( "#" WS DIGITS WS "#" | "[" WS DIGITS WS "]" ) WS "B" WS DIGITS WS
//! ```
//!
//! `WS` is zero or more blanks. The parse is a single linear pass: prefix,
//! opening delimiter, digit, closing delimiter, base marker, base, range
//! check, trailing blanks. The first failing step ends the parse.

use crate::{
    digit::{Base, DigitResult},
    error::ErrorCode,
    scan::{byte_at, lex_unsigned, skip_blanks, ParsedNumber},
    ParseResult,
};

/// Delimiter pair enclosing the digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `#...#`
    Hash,
    /// `[...]`
    Bracket,
}

impl Delimiter {
    /// The pair opened by `byte`, if any.
    pub const fn from_opening(byte: u8) -> Option<Self> {
        match byte {
            b'#' => Some(Delimiter::Hash),
            b'[' => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    /// Opening character
    pub const fn opening(self) -> u8 {
        match self {
            Delimiter::Hash => b'#',
            Delimiter::Bracket => b'[',
        }
    }

    /// Closing character
    pub const fn closing(self) -> u8 {
        match self {
            Delimiter::Hash => b'#',
            Delimiter::Bracket => b']',
        }
    }
}

/// Lex a mandatory number slot. Overflow is reported as is; a missing or
/// non-digit start is reported as `absent`.
const fn number_slot(text: &str, pos: usize, absent: ErrorCode) -> ParseResult<ParsedNumber> {
    match lex_unsigned(text, pos) {
        ParseResult::Unexpected(ErrorCode::Overflow) => {
            ParseResult::Unexpected(ErrorCode::Overflow)
        }
        ParseResult::Unexpected(_) => ParseResult::Unexpected(absent),
        lexed => lexed,
    }
}

/// `true` iff `text` holds `expected` at `pos`.
const fn holds(text: &str, pos: usize, expected: u8) -> bool {
    matches!(byte_at(text, pos), Some(byte) if byte == expected)
}

/// Parse a complete digit-format expression such as `d#5#B3` or
/// `dig [15] B 16`.
pub const fn parse_digit_format(text: &str) -> ParseResult<DigitResult> {
    if text.is_empty() {
        return ParseResult::Unexpected(ErrorCode::Empty);
    }

    // Prefix, longest match first
    if !holds(text, 0, b'd') {
        return ParseResult::Unexpected(ErrorCode::InvalidPrefix);
    }
    let mut pos = 1;
    if holds(text, pos, b'i') && holds(text, pos + 1, b'g') {
        pos += 2;
    }

    pos = skip_blanks(text, pos);
    let delimiter = match byte_at(text, pos) {
        Some(byte) => match Delimiter::from_opening(byte) {
            Some(delimiter) => delimiter,
            None => return ParseResult::Unexpected(ErrorCode::MissingDelimiter),
        },
        None => return ParseResult::Unexpected(ErrorCode::MissingDelimiter),
    };
    pos += 1;

    pos = skip_blanks(text, pos);
    let digit = attempt!(number_slot(text, pos, ErrorCode::InvalidDigit));

    pos = skip_blanks(text, digit.end);
    if !holds(text, pos, delimiter.closing()) {
        return ParseResult::Unexpected(ErrorCode::MismatchedDelimiter);
    }
    pos += 1;

    pos = skip_blanks(text, pos);
    if !holds(text, pos, b'B') {
        return ParseResult::Unexpected(ErrorCode::MissingB);
    }
    pos += 1;

    pos = skip_blanks(text, pos);
    let base = attempt!(number_slot(text, pos, ErrorCode::InvalidBase));
    let checked = attempt!(Base::new(base.value));

    pos = skip_blanks(text, base.end);
    if pos != text.len() {
        return ParseResult::Unexpected(ErrorCode::InvalidCharacter);
    }

    ParseResult::Value(DigitResult::new(digit.value, checked))
}
