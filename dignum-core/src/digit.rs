//! Bases, parsed digits, and reduction of a raw digit modulo its base

use crate::{error::ErrorCode, ParseResult};

/// A validated base: nonzero, with `base - 1` fitting in a `u32`.
///
/// A base of 1 passes the range check; every digit reduces to 0 under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct Base(u64);

impl Base {
    /// Largest accepted base, `2^32`
    pub const MAX: u64 = u32::MAX as u64 + 1;

    /// Validate `raw` as a base.
    pub const fn new(raw: u64) -> ParseResult<Base> {
        if raw == 0 || raw - 1 > u32::MAX as u64 {
            ParseResult::Unexpected(ErrorCode::BaseOutOfRange)
        } else {
            ParseResult::Value(Base(raw))
        }
    }

    /// The base as a number
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Base {
    type Error = ErrorCode;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Base::new(raw).into_result()
    }
}

impl From<Base> for u64 {
    fn from(base: Base) -> Self {
        base.0
    }
}

/// `raw mod base`. Total: the base was validated on construction, so the
/// remainder always fits in a `u32`.
pub const fn reduce_digit(raw: u64, base: Base) -> u32 {
    (raw % base.0) as u32
}

/// A successfully parsed digit-format expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DigitResult {
    raw: u64,
    base: Base,
    reduced: u32,
}

impl DigitResult {
    /// Pair a raw digit with its base; the reduced digit is derived.
    pub const fn new(raw: u64, base: Base) -> Self {
        Self {
            raw,
            base,
            reduced: reduce_digit(raw, base),
        }
    }

    /// Digit as written, before reduction
    pub const fn raw(&self) -> u64 {
        self.raw
    }

    /// Declared base
    pub const fn base(&self) -> u64 {
        self.base.get()
    }

    /// `raw mod base`
    pub const fn reduced(&self) -> u32 {
        self.reduced
    }
}

/// A digit whose base is fixed at compile time.
///
/// Instantiating with `BASE < 2` or `BASE - 1 > u32::MAX` is a compile error:
///
/// ```compile_fail
/// let _ = dignum_core::Digit::<1>::new(0);
/// ```
///
/// ```
/// use dignum_core::Digit;
///
/// assert_eq!(Digit::<16>::new(35).value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit<const BASE: u64> {
    value: u32,
}

impl<const BASE: u64> Digit<BASE> {
    const VALID_BASE: () = assert!(
        BASE >= 2 && BASE - 1 <= u32::MAX as u64,
        "digit base must lie in 2..=2^32"
    );

    /// Reduce `raw` modulo `BASE`.
    pub const fn new(raw: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_BASE;
        Self {
            value: (raw % BASE) as u32,
        }
    }

    /// Re-reduce a parsed raw digit by this compile-time base, ignoring the
    /// base it was written with.
    pub const fn from_parsed(parsed: &DigitResult) -> Self {
        Self::new(parsed.raw)
    }

    /// Reduced value
    pub const fn value(self) -> u32 {
        self.value
    }

    /// The compile-time base
    pub const fn base() -> u64 {
        BASE
    }
}
