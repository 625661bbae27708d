//! Parsing one expression with a chosen grammar

use dignum_core::{
    error_to_string, parse_digit_format, parse_unsigned, DigitResult, ErrorCode, Expected,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammar used to interpret an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Unsigned decimal number, blanks allowed around it
    Number,
    /// Digit-in-base notation such as `d#5#B3` or `dig[15]B16`
    #[default]
    Digit,
}

impl Grammar {
    /// Every grammar, for listings
    pub const ALL: [Grammar; 2] = [Grammar::Number, Grammar::Digit];

    /// Name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Grammar::Number => "number",
            Grammar::Digit => "digit",
        }
    }

    /// One-line description with an example
    pub fn description(self) -> &'static str {
        match self {
            Grammar::Number => "unsigned 64-bit decimal, e.g. \"  123  \"",
            Grammar::Digit => "digit in base, e.g. \"d#5#B3\" or \"dig [7] B 10\"",
        }
    }

    /// Parse `text` under this grammar.
    pub fn parse(self, text: &str) -> Outcome {
        let result = match self {
            Grammar::Number => parse_unsigned(text).transform(Parsed::Number),
            Grammar::Digit => parse_digit_format(text).transform(Parsed::Digit),
        };
        log::trace!("{:?} {:?} -> {:?}", self, text, result);

        Outcome {
            input: text.to_string(),
            grammar: self,
            result,
        }
    }
}

/// Successful parse under either grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parsed {
    /// Output of the number grammar
    Number(u64),
    /// Output of the digit grammar
    Digit(DigitResult),
}

impl fmt::Display for Parsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parsed::Number(value) => write!(f, "value={value}"),
            Parsed::Digit(digit) => write!(
                f,
                "digit={} base={} value={}",
                digit.raw(),
                digit.base(),
                digit.reduced()
            ),
        }
    }
}

/// One parsed expression and what became of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Expression as given
    pub input: String,
    /// Grammar it was parsed with
    pub grammar: Grammar,
    /// Parsed value or error code
    pub result: Expected<Parsed, ErrorCode>,
}

impl Outcome {
    /// `true` when the expression parsed
    pub fn is_success(&self) -> bool {
        self.result.has_value()
    }

    /// Human-readable summary: the parsed fields, or the error label and
    /// its description.
    pub fn summary(&self) -> String {
        match &self.result {
            Expected::Value(parsed) => format!("ok {parsed}"),
            Expected::Unexpected(code) => format!("error {} ({code})", error_to_string(*code)),
        }
    }
}
