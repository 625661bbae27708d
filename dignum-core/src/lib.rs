//! Deterministic parsers for unsigned decimals and the digit-in-base notation
//!
//! Two grammars are recognized:
//!
//! - plain unsigned decimal integers, optionally padded with blanks
//!   (`"  123  "`), via [`parse_unsigned`];
//! - the digit-format notation `d#N#B M` / `dig[N] B M`, which names a raw
//!   digit `N` and a base `M`, via [`parse_digit_format`].
//!
//! Every parser reports through [`Expected`], a two-variant container holding
//! either the parsed value or one [`ErrorCode`]. Parsing is all-or-nothing:
//! the first violation is returned verbatim and nothing partial survives.
//!
//! All parsers are `const fn`, so inputs known at compile time can be
//! checked at compile time.
//!
//! # Example
//!
//! ```rust
//! use dignum_core::{parse_digit_format, parse_unsigned, ErrorCode};
//!
//! let parsed = parse_digit_format("dig [7] B 10").into_result().unwrap();
//! assert_eq!(parsed.raw(), 7);
//! assert_eq!(parsed.base(), 10);
//! assert_eq!(parsed.reduced(), 7);
//!
//! assert_eq!(parse_unsigned("12 34").into_result(), Err(ErrorCode::BlankInterDigits));
//!
//! const FIVE_IN_THREE: u32 = match parse_digit_format("d#5#B3").as_value() {
//!     Some(digit) => digit.reduced(),
//!     None => panic!("literal must parse"),
//! };
//! assert_eq!(FIVE_IN_THREE, 2);
//! ```

#![warn(missing_docs)]

/// Propagate the error side of an [`Expected`] out of the enclosing
/// function. Usable inside `const fn`, unlike `?`.
macro_rules! attempt {
    ($expr:expr) => {
        match $expr {
            $crate::Expected::Value(value) => value,
            $crate::Expected::Unexpected(error) => return $crate::Expected::Unexpected(error),
        }
    };
}

pub mod digit;
pub mod digit_format;
pub mod error;
pub mod expected;
pub mod number;
pub mod scan;

pub use digit::{reduce_digit, Base, Digit, DigitResult};
pub use digit_format::{parse_digit_format, Delimiter};
pub use error::{error_to_string, BadExpectedAccess, ErrorCode};
pub use expected::{make_unexpected, Expected, Unexpected};
pub use number::parse_unsigned;
pub use scan::{is_blank, lex_unsigned, skip_blanks, ParsedNumber};

/// Result of every parser in this crate
pub type ParseResult<T> = Expected<T, ErrorCode>;
