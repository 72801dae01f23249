//! `regexp`: the string must match a regular expression

use regex::Regex;

use super::observed;
use crate::error::RuleError;
use crate::value::Value;

/// Checks that a string value matches the pattern given as parameter.
///
/// Matching is a search: the pattern may match anywhere unless it anchors
/// itself with `^`/`$`. A non-string value is [`RuleError::Unsupported`]; a
/// pattern that fails to compile is [`RuleError::BadParameter`].
///
/// The pattern is compiled on every call. Callers evaluating the same pattern
/// repeatedly should cache a compiled [`Regex`] themselves.
///
/// # Examples
///
/// ```
/// use tagcheck_validator::rules::regexp;
/// use tagcheck_validator::{RuleError, Value};
///
/// let email = "^[^@]+@[^@]+$";
/// assert!(regexp(&Value::from("hello@example.com"), email).is_ok());
/// assert!(matches!(
///     regexp(&Value::from("not-an-email"), email),
///     Err(RuleError::PatternMismatch { .. })
/// ));
/// ```
pub fn regexp(value: &Value, param: &str) -> Result<(), RuleError> {
    observed("regexp", value, matches(value, param))
}

fn matches(value: &Value, pattern: &str) -> Result<(), RuleError> {
    let Some(s) = value.as_str() else {
        return Err(RuleError::Unsupported);
    };
    let re = Regex::new(pattern).map_err(|_| RuleError::BadParameter)?;
    if re.is_match(s) {
        Ok(())
    } else {
        Err(RuleError::PatternMismatch {
            pattern: pattern.to_owned(),
        })
    }
}
