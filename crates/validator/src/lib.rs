//! # tagcheck-validator
//!
//! Builtin rule validators over runtime values.
//!
//! A caller holds a [`Value`] and a `(rule name, parameter)` pair, typically
//! pulled from a field annotation such as `validate:"min=3,max=20"`. It looks
//! the rule up by name and evaluates it once per pair. Every rule shares the
//! [`RuleFn`](rules::RuleFn) signature and reports failure with exactly one
//! [`RuleError`].
//!
//! ## Quick Start
//!
//! ```
//! use tagcheck_validator::prelude::*;
//!
//! let name = Value::from("alice");
//! for (rule, param) in [("nonzero", ""), ("min", "3"), ("max", "20")] {
//!     let check = builtin(rule).expect("builtin rule");
//!     assert!(check(&name, param).is_ok());
//! }
//!
//! let err = min(&Value::from(5), "10").unwrap_err();
//! assert!(err.is_violation());
//! assert_eq!(err.to_string(), "less than min: value must be at least 10, got 5");
//! ```
//!
//! ## Builtin Rules
//!
//! - [`nonzero`](rules::nonzero): value is not its kind's zero value
//! - [`len`](rules::len): size equals the parameter
//! - [`min`](rules::min): size is at least the parameter
//! - [`max`](rules::max): size is at most the parameter
//! - [`regexp`](rules::regexp): string matches the parameter pattern
//!
//! Size is the character count of a string, the element count of a
//! collection, or the number itself.
//!
//! ## Errors
//!
//! [`RuleError::class`] separates rule-setup bugs
//! ([`ErrorClass::Misconfiguration`]: bad parameter, unsupported kind) from
//! user-facing failures ([`ErrorClass::Violation`]).
//!
//! ## Features
//!
//! - `serde` (default): [`Value`] from `serde_json::Value` and
//!   [`RuleError::to_json_value`].

pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod param;
pub mod prelude;
pub mod rules;
pub mod value;

pub use error::{Comparison, Domain, ErrorClass, RuleError};
pub use rules::{BUILTIN_RULES, Rule, RuleFn, builtin};
pub use value::{Kind, Record, Value};
