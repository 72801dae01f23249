//! Builtin rules and the dispatch contract
//!
//! Every builtin has the same shape, [`RuleFn`]: it borrows a [`Value`] and
//! the rule's textual parameter and returns `Ok(())` or exactly one
//! [`RuleError`]. A caller that extracts `(rule name, parameter)` pairs from
//! its own annotations looks the function up by name and invokes it once per
//! pair.
//!
//! | Name | Function | Parameter |
//! |------|----------|-----------|
//! | `nonzero` | [`nonzero`] | unused |
//! | `len` | [`len`] | exact size |
//! | `min` | [`min`] | inclusive lower bound |
//! | `max` | [`max`] | inclusive upper bound |
//! | `regexp` | [`regexp`] | regular expression |
//!
//! # Examples
//!
//! ```
//! use tagcheck_validator::rules::builtin;
//! use tagcheck_validator::{RuleError, Value};
//!
//! let min = builtin("min").unwrap();
//! assert!(min(&Value::from(15), "10").is_ok());
//! assert!(matches!(min(&Value::from(5), "10"), Err(RuleError::BelowMin(_))));
//! ```

mod bounds;
mod nonzero;
mod pattern;

pub use bounds::{len, max, min};
pub use nonzero::nonzero;
pub use pattern::regexp;

use tracing::{debug, trace};

use crate::error::RuleError;
use crate::value::Value;

// ============================================================================
// DISPATCH CONTRACT
// ============================================================================

/// Signature shared by every builtin rule.
pub type RuleFn = fn(&Value, &str) -> Result<(), RuleError>;

/// A rule that can be evaluated against a value and a textual parameter.
///
/// Implemented for every `Fn(&Value, &str) -> Result<(), RuleError>`, so
/// builtins and caller-defined closures can sit side by side behind
/// `&dyn Rule`.
///
/// # Examples
///
/// ```
/// use tagcheck_validator::rules::{self, Rule};
/// use tagcheck_validator::{RuleError, Value};
///
/// let even = |v: &Value, _: &str| match v {
///     Value::Int(n) if n % 2 == 0 => Ok(()),
///     _ => Err(RuleError::Unsupported),
/// };
/// let table: [(&str, &dyn Rule); 2] = [("nonzero", &rules::nonzero), ("even", &even)];
///
/// for (_, rule) in table {
///     assert!(rule.check(&Value::Int(4), "").is_ok());
/// }
/// ```
pub trait Rule {
    /// Evaluates the rule.
    fn check(&self, value: &Value, param: &str) -> Result<(), RuleError>;
}

impl<F> Rule for F
where
    F: Fn(&Value, &str) -> Result<(), RuleError>,
{
    #[inline]
    fn check(&self, value: &Value, param: &str) -> Result<(), RuleError> {
        self(value, param)
    }
}

// ============================================================================
// BUILTIN TABLE
// ============================================================================

/// Builtin rules keyed by name.
pub static BUILTIN_RULES: &[(&str, RuleFn)] = &[
    ("nonzero", nonzero),
    ("len", len),
    ("min", min),
    ("max", max),
    ("regexp", regexp),
];

/// Looks up a builtin rule by name.
#[must_use]
pub fn builtin(name: &str) -> Option<RuleFn> {
    BUILTIN_RULES
        .iter()
        .find(|(rule, _)| *rule == name)
        .map(|&(_, f)| f)
}

/// Logs a failed outcome and passes it through unchanged.
///
/// Misconfigurations are rule-setup bugs and go out at `debug`; ordinary
/// violations are expected traffic and go out at `trace`.
fn observed(
    rule: &'static str,
    value: &Value,
    outcome: Result<(), RuleError>,
) -> Result<(), RuleError> {
    if let Err(err) = &outcome {
        if err.is_misconfiguration() {
            debug!(rule, kind = %value.kind(), code = err.code(), "rule misapplied");
        } else {
            trace!(rule, kind = %value.kind(), code = err.code(), error = %err, "value rejected");
        }
    }
    outcome
}

// ============================================================================
// TESTS
// ============================================================================
