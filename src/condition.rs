//! Argument validation helpers.
//!
//! Each check returns `Err(Error::InvalidArgument(message))` if the condition does not hold,
//! so it composes with `?`:
//!
//! ```
//! use sorted_collections::condition::ensure_at_least;
//! fn capacity(n: usize) -> sorted_collections::Result<usize> {
//!     ensure_at_least(n, 1, "capacity must be at least 1")?;
//!     Ok(n)
//! }
//! assert!(capacity(0).is_err());
//! ```
use crate::error::{Error, Result};
use crate::text;

fn check(condition: bool, message: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message))
    }
}

pub fn ensure_true(expression: bool, message: &'static str) -> Result<()> {
    check(expression, message)
}

pub fn ensure_false(expression: bool, message: &'static str) -> Result<()> {
    check(!expression, message)
}

pub fn ensure_equal<T: PartialEq + ?Sized>(a: &T, b: &T, message: &'static str) -> Result<()> {
    check(a == b, message)
}

pub fn ensure_not_equal<T: PartialEq + ?Sized>(a: &T, b: &T, message: &'static str) -> Result<()> {
    check(a != b, message)
}

/// Unwraps `value`, or fails with `message`
pub fn ensure_some<T>(value: Option<T>, message: &'static str) -> Result<T> {
    value.ok_or(Error::InvalidArgument(message))
}

/// Fails if `text` is empty
pub fn ensure_not_empty(text: &str, message: &'static str) -> Result<()> {
    check(text::is_not_empty(text), message)
}

/// Fails if `text` is empty or consists of whitespace only
pub fn ensure_has_text(text: &str, message: &'static str) -> Result<()> {
    check(text::has_text(text), message)
}

/// Fails unless `value >= reference`
pub fn ensure_at_least<T: PartialOrd>(value: T, reference: T, message: &'static str) -> Result<()> {
    check(value >= reference, message)
}

/// Fails unless `value <= reference`
pub fn ensure_at_maximum<T: PartialOrd>(value: T, reference: T, message: &'static str) -> Result<()> {
    check(value <= reference, message)
}

/// Fails unless `value > reference`
pub fn ensure_greater<T: PartialOrd>(value: T, reference: T, message: &'static str) -> Result<()> {
    check(value > reference, message)
}

/// Fails unless `value < reference`
pub fn ensure_smaller<T: PartialOrd>(value: T, reference: T, message: &'static str) -> Result<()> {
    check(value < reference, message)
}
