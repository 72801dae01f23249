//! Prelude module for convenient imports.
//!
//! Provides a single `use tagcheck_validator::prelude::*;` import that brings
//! in the value model, the error taxonomy, and every builtin rule.

pub use crate::error::{Comparison, Domain, ErrorClass, RuleError};
pub use crate::param::{as_float, as_int, as_uint};
pub use crate::rules::{BUILTIN_RULES, Rule, RuleFn, builtin, len, max, min, nonzero, regexp};
pub use crate::value::{Kind, Record, Value};
