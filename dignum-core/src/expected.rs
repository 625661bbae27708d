//! Two-variant result container used as the output channel of every parser.
//!
//! [`Expected`] holds either a value or an error, never both and never
//! neither. It mirrors [`core::result::Result`] closely and converts to and
//! from it losslessly, but adds the checked observers and combinator names
//! the parsers are written against, and its inspection methods are `const`
//! so parse results can be examined in constant evaluation.
//!
//! Accessing the wrong side is always checked: [`Expected::value`] on an
//! error (or [`Expected::error`] on a value) returns
//! [`BadExpectedAccess`] instead of reading a payload that is not there.

use crate::error::BadExpectedAccess;

/// Either a successful value of type `T` or an error of type `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Expected` may hold an error, which should be handled"]
pub enum Expected<T, E> {
    /// Success
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    Value(T),
    /// Failure
    #[cfg_attr(feature = "serde", serde(rename = "error"))]
    Unexpected(E),
}

/// Error payload wrapper, convertible into any `Expected<T, E>` whose error
/// type can be built from `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unexpected<E> {
    error: E,
}

impl<E> Unexpected<E> {
    /// Wrap an error
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Borrow the wrapped error
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Unwrap the error
    pub fn into_error(self) -> E {
        self.error
    }

    /// Convert the wrapped error to another type
    pub fn map<G, F: FnOnce(E) -> G>(self, f: F) -> Unexpected<G> {
        Unexpected::new(f(self.error))
    }
}

/// Shorthand for [`Unexpected::new`].
pub const fn make_unexpected<E>(error: E) -> Unexpected<E> {
    Unexpected::new(error)
}

impl<T, E> Expected<T, E> {
    /// Container holding `value`
    pub const fn new_value(value: T) -> Self {
        Expected::Value(value)
    }

    /// Container holding `error`
    pub const fn new_error(error: E) -> Self {
        Expected::Unexpected(error)
    }

    /// Build the value in place from `f`.
    pub fn from_fn<F: FnOnce() -> T>(f: F) -> Self {
        Expected::Value(f())
    }

    /// `true` iff a value is held
    pub const fn has_value(&self) -> bool {
        matches!(self, Expected::Value(_))
    }

    /// `true` iff an error is held
    pub const fn has_error(&self) -> bool {
        matches!(self, Expected::Unexpected(_))
    }

    /// The value, if one is held
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Expected::Value(value) => Some(value),
            Expected::Unexpected(_) => None,
        }
    }

    /// The error, if one is held
    pub const fn as_error(&self) -> Option<&E> {
        match self {
            Expected::Value(_) => None,
            Expected::Unexpected(error) => Some(error),
        }
    }

    /// Checked access to the value.
    pub const fn value(&self) -> Result<&T, BadExpectedAccess> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Unexpected(_) => Err(BadExpectedAccess::ValueOnError),
        }
    }

    /// Checked access to the error.
    pub const fn error(&self) -> Result<&E, BadExpectedAccess> {
        match self {
            Expected::Value(_) => Err(BadExpectedAccess::ErrorOnValue),
            Expected::Unexpected(error) => Ok(error),
        }
    }

    /// Checked, consuming access to the value.
    pub fn into_value(self) -> Result<T, BadExpectedAccess> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Unexpected(_) => Err(BadExpectedAccess::ValueOnError),
        }
    }

    /// Checked, consuming access to the error.
    pub fn into_error(self) -> Result<E, BadExpectedAccess> {
        match self {
            Expected::Value(_) => Err(BadExpectedAccess::ErrorOnValue),
            Expected::Unexpected(error) => Ok(error),
        }
    }

    /// The held value, or `default` when an error is held.
    pub fn value_or(self, default: T) -> T {
        match self {
            Expected::Value(value) => value,
            Expected::Unexpected(_) => default,
        }
    }

    /// The held value, or the result of `f` applied to the held error.
    pub fn value_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Expected::Value(value) => value,
            Expected::Unexpected(error) => f(error),
        }
    }

    /// Chain a fallible step on the value; an error propagates unchanged.
    pub fn and_then<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        match self {
            Expected::Value(value) => f(value),
            Expected::Unexpected(error) => Expected::Unexpected(error),
        }
    }

    /// Recover from an error; a value passes through unchanged.
    pub fn or_else<G, F>(self, f: F) -> Expected<T, G>
    where
        F: FnOnce(E) -> Expected<T, G>,
    {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Unexpected(error) => f(error),
        }
    }

    /// Map the value; an error propagates unchanged.
    pub fn transform<U, F: FnOnce(T) -> U>(self, f: F) -> Expected<U, E> {
        match self {
            Expected::Value(value) => Expected::Value(f(value)),
            Expected::Unexpected(error) => Expected::Unexpected(error),
        }
    }

    /// Map the error; a value passes through unchanged.
    pub fn transform_error<G, F: FnOnce(E) -> G>(self, f: F) -> Expected<T, G> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Unexpected(error) => Expected::Unexpected(f(error)),
        }
    }

    /// Borrow both sides, so the combinators can be used without consuming.
    pub const fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Unexpected(error) => Expected::Unexpected(error),
        }
    }

    /// Convert into the standard library result.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<E> Expected<(), E> {
    /// Unit success: no payload, only the absence of an error
    pub const fn success() -> Self {
        Expected::Value(())
    }

    /// The unit counterpart of [`Expected::value`]: succeeds without touching
    /// any payload when no error is held.
    pub const fn check(&self) -> Result<(), BadExpectedAccess> {
        match self {
            Expected::Value(()) => Ok(()),
            Expected::Unexpected(_) => Err(BadExpectedAccess::ValueOnError),
        }
    }
}

impl<E> Default for Expected<(), E> {
    fn default() -> Self {
        Self::success()
    }
}

impl<T, E, G: Into<E>> From<Unexpected<G>> for Expected<T, E> {
    fn from(unexpected: Unexpected<G>) -> Self {
        Expected::Unexpected(unexpected.error.into())
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Expected::Value(value),
            Err(error) => Expected::Unexpected(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        match expected {
            Expected::Value(value) => Ok(value),
            Expected::Unexpected(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Payload that counts how many times it has been dropped.
    #[derive(Debug)]
    struct Tracked {
        label: &'static str,
        drops: Rc<Cell<usize>>,
    }

    impl Tracked {
        fn new(label: &'static str, drops: &Rc<Cell<usize>>) -> Self {
            Self {
                label,
                drops: Rc::clone(drops),
            }
        }
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            Self::new(self.label, &self.drops)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn assert_exactly_one_side<T, E>(e: &Expected<T, E>) {
        assert_ne!(e.has_value(), e.has_error());
        assert_eq!(e.as_value().is_some(), e.has_value());
        assert_eq!(e.as_error().is_some(), e.has_error());
    }

    #[test]
    fn test_construction_and_access() {
        let e1: Expected<i32, String> = Expected::new_value(42);
        assert!(e1.has_value());
        assert_eq!(e1.value(), Ok(&42));
        assert_eq!(e1.as_value(), Some(&42));

        let e2: Expected<i32, String> = make_unexpected("error".to_string()).into();
        assert!(!e2.has_value());
        assert_eq!(e2.error().map(String::as_str), Ok("error"));

        let e3 = e1.clone();
        assert_eq!(e3.value(), Ok(&42));

        let e4 = e2.clone();
        assert_eq!(e4.error(), Ok(&"error".to_string()));
    }

    #[test]
    fn test_wrong_side_access_is_checked() {
        let ok: Expected<i32, String> = Expected::new_value(42);
        let err: Expected<i32, String> = Expected::new_error("error".into());

        assert_eq!(ok.error(), Err(BadExpectedAccess::ErrorOnValue));
        assert_eq!(err.value(), Err(BadExpectedAccess::ValueOnError));
        assert_eq!(
            err.clone().into_value(),
            Err(BadExpectedAccess::ValueOnError)
        );
        assert_eq!(ok.clone().into_error(), Err(BadExpectedAccess::ErrorOnValue));

        assert_eq!(ok.value_or(0), 42);
        assert_eq!(err.value_or(0), 0);
    }

    #[test]
    fn test_unexpected_error_conversion() {
        let narrow = make_unexpected(7u8);
        let wide: Expected<(), u32> = narrow.into();
        assert_eq!(wide.error(), Ok(&7u32));

        let mapped = make_unexpected("abc").map(str::len);
        assert_eq!(*mapped.error(), 3);
        assert_eq!(mapped.into_error(), 3);
    }

    #[test]
    fn test_reassignment_drops_previous_payload_once() {
        let drops = Rc::new(Cell::new(0));

        let mut slot: Expected<Tracked, Tracked> = Expected::new_value(Tracked::new("v", &drops));
        assert_exactly_one_side(&slot);

        slot = Expected::new_error(Tracked::new("e", &drops));
        assert_eq!(drops.get(), 1);
        assert_exactly_one_side(&slot);
        assert_eq!(slot.error().map(|t| t.label), Ok("e"));

        slot = Expected::new_value(Tracked::new("v2", &drops));
        assert_eq!(drops.get(), 2);
        assert_eq!(slot.value().map(|t| t.label), Ok("v2"));

        let copy = slot.clone();
        assert_exactly_one_side(&copy);
        drop(copy);
        assert_eq!(drops.get(), 3);

        let moved = slot;
        assert_eq!(drops.get(), 3);
        assert_exactly_one_side(&moved);
        drop(moved);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_monadic_ops() {
        let e_val: Expected<i32, String> = Expected::new_value(5);
        let e_err: Expected<i32, String> = Expected::new_error("error".into());

        let doubled = e_val
            .clone()
            .and_then(|i| Expected::<f64, String>::new_value(f64::from(i) * 2.0));
        assert_eq!(doubled.value(), Ok(&10.0));
        let doubled = e_err
            .clone()
            .and_then(|i| Expected::<f64, String>::new_value(f64::from(i) * 2.0));
        assert_eq!(doubled.error().map(String::as_str), Ok("error"));

        let kept = e_val
            .clone()
            .or_else(|_| Expected::<i32, String>::new_error("new_error".into()));
        assert_eq!(kept.value(), Ok(&5));
        let recovered = e_err
            .clone()
            .or_else(|s| Expected::<i32, String>::new_value(s.len() as i32));
        assert_eq!(recovered.value(), Ok(&5));

        let shown = e_val.clone().transform(|i| i.to_string());
        assert_eq!(shown.value().map(String::as_str), Ok("5"));
        let shown = e_err.clone().transform(|i| i.to_string());
        assert_eq!(shown.error().map(String::as_str), Ok("error"));

        let measured = e_err.transform_error(|s| s.len());
        assert_eq!(measured.error(), Ok(&5));
        let untouched = e_val.transform_error(|s| s.len());
        assert_eq!(untouched.value(), Ok(&5));
    }

    #[test]
    fn test_combinators_by_reference() {
        let e: Expected<String, u8> = Expected::new_value("abc".into());
        let len = e.as_ref().transform(|s| s.len());
        assert_eq!(len.value(), Ok(&3));
        assert!(e.has_value());
    }

    #[test]
    fn test_unit_specialization() {
        let ok: Expected<(), i32> = Expected::success();
        let err: Expected<(), i32> = make_unexpected(42).into();

        assert!(ok.has_value());
        assert_eq!(ok.check(), Ok(()));
        assert_eq!(Expected::<(), i32>::default(), ok);

        assert!(!err.has_value());
        assert_eq!(err.error(), Ok(&42));
        assert_eq!(err.check(), Err(BadExpectedAccess::ValueOnError));

        let chained = ok.and_then(|()| Expected::<i32, i32>::new_value(123));
        assert_eq!(chained.value(), Ok(&123));
        let chained = err.and_then(|()| Expected::<i32, i32>::new_value(123));
        assert_eq!(chained.error(), Ok(&42));
    }

    #[test]
    fn test_in_place_construction() {
        let e: Expected<String, i32> = Expected::from_fn(|| "c".repeat(5));
        assert_eq!(e.value().map(String::as_str), Ok("ccccc"));
    }

    #[test]
    fn test_result_round_trip() {
        let ok: Result<u8, &str> = Ok(1);
        let err: Result<u8, &str> = Err("bad");
        assert_eq!(Expected::from(ok).into_result(), ok);
        assert_eq!(Expected::from(err).into_result(), err);
    }

    #[test]
    fn test_const_inspection() {
        const HELD: Expected<u32, u8> = Expected::new_value(9);
        const HAS: bool = HELD.has_value();
        const INNER: u32 = match HELD.as_value() {
            Some(v) => *v,
            None => 0,
        };
        assert!(HAS);
        assert_eq!(INNER, 9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let ok: Expected<u32, String> = Expected::new_value(3);
        let err: Expected<u32, String> = Expected::new_error("x".into());
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"value":3}"#);
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"error":"x"}"#);
        let back: Expected<u32, String> = serde_json::from_str(r#"{"error":"x"}"#).unwrap();
        assert_eq!(back, err);
    }
}
