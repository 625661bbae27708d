//! Error taxonomy for the number and digit-format parsers

use thiserror::Error;

/// Reason a parse was rejected.
///
/// The set is closed: every parser in this crate reports exactly one of these
/// codes, verbatim, for the first violation it encounters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// A character that the grammar does not allow at this position
    #[error("invalid character")]
    InvalidCharacter,

    /// Blanks splitting one decimal number into two digit runs
    #[error("blank characters between digits")]
    BlankInterDigits,

    /// Accumulated value would exceed `u64::MAX`
    #[error("number overflows 64-bit unsigned range")]
    Overflow,

    /// Input ended where a number was mandatory
    #[error("empty input")]
    Empty,

    /// Input does not start with `d` or `dig`
    #[error("expected prefix `d` or `dig`")]
    InvalidPrefix,

    /// Neither `#` nor `[` after the prefix
    #[error("expected opening delimiter `#` or `[`")]
    MissingDelimiter,

    /// Digit slot present but empty
    #[error("empty digit")]
    EmptyDigit,

    /// Closing delimiter does not pair with the opening one
    #[error("closing delimiter does not match opening delimiter")]
    MismatchedDelimiter,

    /// Digit slot does not start with a decimal digit
    #[error("invalid digit value")]
    InvalidDigit,

    /// The base marker `B` is absent
    #[error("expected base marker `B`")]
    MissingB,

    /// Base slot does not start with a decimal digit
    #[error("invalid base value")]
    InvalidBase,

    /// Base slot present but empty
    #[error("empty base")]
    EmptyBase,

    /// Blanks splitting the base into two digit runs
    #[error("blank characters between digits of the base")]
    BlankInterDigitsOfBase,

    /// Base is zero or `base - 1` exceeds `u32::MAX`
    #[error("base out of range")]
    BaseOutOfRange,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::InvalidCharacter,
        ErrorCode::BlankInterDigits,
        ErrorCode::Overflow,
        ErrorCode::Empty,
        ErrorCode::InvalidPrefix,
        ErrorCode::MissingDelimiter,
        ErrorCode::EmptyDigit,
        ErrorCode::MismatchedDelimiter,
        ErrorCode::InvalidDigit,
        ErrorCode::MissingB,
        ErrorCode::InvalidBase,
        ErrorCode::EmptyBase,
        ErrorCode::BlankInterDigitsOfBase,
        ErrorCode::BaseOutOfRange,
    ];

    /// Stable label for display, identical to the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidCharacter => "InvalidCharacter",
            ErrorCode::BlankInterDigits => "BlankInterDigits",
            ErrorCode::Overflow => "Overflow",
            ErrorCode::Empty => "Empty",
            ErrorCode::InvalidPrefix => "InvalidPrefix",
            ErrorCode::MissingDelimiter => "MissingDelimiter",
            ErrorCode::EmptyDigit => "EmptyDigit",
            ErrorCode::MismatchedDelimiter => "MismatchedDelimiter",
            ErrorCode::InvalidDigit => "InvalidDigit",
            ErrorCode::MissingB => "MissingB",
            ErrorCode::InvalidBase => "InvalidBase",
            ErrorCode::EmptyBase => "EmptyBase",
            ErrorCode::BlankInterDigitsOfBase => "BlankInterDigitsOfBase",
            ErrorCode::BaseOutOfRange => "BaseOutOfRange",
        }
    }
}

/// Stable label for `code`.
pub const fn error_to_string(code: ErrorCode) -> &'static str {
    code.as_str()
}

/// Which side of an [`Expected`](crate::Expected) was requested when the
/// other side was live.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadExpectedAccess {
    /// `value()` called on a container holding an error
    #[error("bad expected access: value requested but an error is held")]
    ValueOnError,

    /// `error()` called on a container holding a value
    #[error("bad expected access: error requested but a value is held")]
    ErrorOnValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_match_debug_names() {
        for code in ErrorCode::ALL {
            assert_eq!(code.as_str(), format!("{code:?}"));
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = ErrorCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_display_is_a_description_not_the_label() {
        assert_eq!(
            ErrorCode::MismatchedDelimiter.to_string(),
            "closing delimiter does not match opening delimiter"
        );
        assert_eq!(error_to_string(ErrorCode::MissingB), "MissingB");
    }

    #[test]
    fn test_bad_access_display() {
        assert!(BadExpectedAccess::ValueOnError
            .to_string()
            .contains("value requested"));
        let _: &dyn std::error::Error = &BadExpectedAccess::ErrorOnValue;
    }
}
