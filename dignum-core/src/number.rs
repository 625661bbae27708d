//! Whole-input unsigned decimal parsing

use crate::{
    error::ErrorCode,
    scan::{byte_at, lex_unsigned, skip_blanks},
    ParseResult,
};

/// Parse `text` as a single unsigned 64-bit decimal number.
///
/// Leading and trailing blanks are allowed. Blanks between two digit runs
/// are [`ErrorCode::BlankInterDigits`]; any other trailing character is
/// [`ErrorCode::InvalidCharacter`]. Input that is empty (or blank only) is
/// [`ErrorCode::Empty`].
pub const fn parse_unsigned(text: &str) -> ParseResult<u64> {
    let start = skip_blanks(text, 0);
    let number = attempt!(lex_unsigned(text, start));
    let after = skip_blanks(text, number.end);

    match byte_at(text, after) {
        None => ParseResult::Value(number.value),
        Some(next) if after > number.end && next.is_ascii_digit() => {
            ParseResult::Unexpected(ErrorCode::BlankInterDigits)
        }
        Some(_) => ParseResult::Unexpected(ErrorCode::InvalidCharacter),
    }
}
