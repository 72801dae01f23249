//! `len`, `min`, and `max`
//!
//! The three rules share one measurement: strings are measured in Unicode
//! scalar values, collections by element count, and numbers by their own
//! value. They differ only in which comparison counts as a violation and
//! which [`RuleError`] variant reports it.
//!
//! Pointers always pass: these rules never dereference and never validate
//! the pointee. Only `nonzero` looks at null-ness.

use super::observed;
use crate::error::{Comparison, RuleError};
use crate::param::{as_float, as_int, as_uint};
use crate::value::Value;

/// Which side of the parameter a value must fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    AtLeast,
    AtMost,
}

impl Bound {
    /// Returns `true` when `actual` breaks the bound.
    ///
    /// Written as the violating comparison so that an unordered float (NaN)
    /// only fails `Exact`.
    #[inline]
    fn violated_by<T: PartialOrd>(self, actual: T, expected: T) -> bool {
        match self {
            Self::Exact => actual != expected,
            Self::AtLeast => actual < expected,
            Self::AtMost => actual > expected,
        }
    }

    fn error(self, comparison: Comparison) -> RuleError {
        match self {
            Self::Exact => RuleError::Length(comparison),
            Self::AtLeast => RuleError::BelowMin(comparison),
            Self::AtMost => RuleError::AboveMax(comparison),
        }
    }

    fn check(self, value: &Value, param: &str) -> Result<(), RuleError> {
        let comparison = match value {
            Value::String(_) | Value::Seq(_) | Value::Array(_) | Value::Map(_) => {
                let expected = as_int(param)?;
                let actual = value.len().map_or(0, |n| n as i64);
                if !self.violated_by(actual, expected) {
                    return Ok(());
                }
                if matches!(value, Value::String(_)) {
                    Comparison::StringLength { expected, actual }
                } else {
                    Comparison::CollectionLength { expected, actual }
                }
            }
            Value::Int(actual) => {
                let expected = as_int(param)?;
                if !self.violated_by(*actual, expected) {
                    return Ok(());
                }
                Comparison::Integer {
                    expected: i128::from(expected),
                    actual: i128::from(*actual),
                }
            }
            Value::Uint(actual) => {
                // Compared in unsigned space, reported in signed space.
                let expected = as_uint(param)?;
                if !self.violated_by(*actual, expected) {
                    return Ok(());
                }
                Comparison::Integer {
                    expected: i128::from(expected),
                    actual: i128::from(*actual),
                }
            }
            Value::Float(actual) => {
                let expected = as_float(param)?;
                if !self.violated_by(*actual, expected) {
                    return Ok(());
                }
                Comparison::Float {
                    expected,
                    actual: *actual,
                }
            }
            Value::Pointer(_) => return Ok(()),
            Value::Invalid
            | Value::Bool(_)
            | Value::Record(_)
            | Value::Unsupported(_) => return Err(RuleError::Unsupported),
        };
        Err(self.error(comparison))
    }
}

/// Checks that a value's size equals the parameter.
///
/// Size is the character count of a string, the element count of a
/// collection, or the value itself for numbers. Floats compare exactly.
///
/// # Examples
///
/// ```
/// use tagcheck_validator::rules::len;
/// use tagcheck_validator::{Comparison, RuleError, Value};
///
/// assert!(len(&Value::from(vec![1, 2, 3]), "3").is_ok());
/// assert_eq!(
///     len(&Value::from(vec![1, 2, 3]), "2"),
///     Err(RuleError::Length(Comparison::CollectionLength { expected: 2, actual: 3 })),
/// );
/// ```
pub fn len(value: &Value, param: &str) -> Result<(), RuleError> {
    observed("len", value, Bound::Exact.check(value, param))
}

/// Checks that a value (or its size) is at least the parameter.
pub fn min(value: &Value, param: &str) -> Result<(), RuleError> {
    observed("min", value, Bound::AtLeast.check(value, param))
}

/// Checks that a value (or its size) is at most the parameter.
pub fn max(value: &Value, param: &str) -> Result<(), RuleError> {
    observed("max", value, Bound::AtMost.check(value, param))
}
