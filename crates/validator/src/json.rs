//! JSON interop.
//!
//! Converts decoded `serde_json::Value` documents into [`Value`] so the
//! builtin rules can run over JSON input, and renders [`RuleError`] as a JSON
//! object for API responses.
//!
//! # Mapping
//!
//! | JSON | [`Value`] |
//! |------|-----------|
//! | `null` | [`Value::Invalid`] |
//! | boolean | [`Value::Bool`] |
//! | number fitting `i64` | [`Value::Int`] |
//! | number fitting only `u64` | [`Value::Uint`] |
//! | other number | [`Value::Float`] |
//! | string | [`Value::String`] |
//! | array | [`Value::Seq`] |
//! | object | [`Value::Map`] with string keys |
//!
//! # Examples
//!
//! ```
//! use tagcheck_validator::rules::{len, nonzero};
//! use tagcheck_validator::{RuleError, Value};
//! use serde_json::json;
//!
//! let doc = json!({"tags": ["a", "b"], "name": ""});
//! let tags = Value::from(&doc["tags"]);
//! assert!(len(&tags, "2").is_ok());
//! assert_eq!(nonzero(&Value::from(&doc["name"]), ""), Err(RuleError::EmptyValue));
//! ```

use serde_json::json;

use crate::error::{Comparison, RuleError};
use crate::value::Value;

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Invalid,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::Seq(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (Self::String(k.clone()), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::from(&v)
    }
}

fn integer_json(v: i128) -> serde_json::Value {
    if let Ok(i) = i64::try_from(v) {
        i.into()
    } else if let Ok(u) = u64::try_from(v) {
        u.into()
    } else {
        v.to_string().into()
    }
}

impl Comparison {
    fn to_json_pair(&self) -> (serde_json::Value, serde_json::Value) {
        match *self {
            Self::StringLength { expected, actual } | Self::CollectionLength { expected, actual } => {
                (expected.into(), actual.into())
            }
            Self::Integer { expected, actual } => (integer_json(expected), integer_json(actual)),
            Self::Float { expected, actual } => (expected.into(), actual.into()),
        }
    }
}

impl RuleError {
    /// Renders the error as a JSON object.
    ///
    /// Always carries `code`, `class`, and `message`. Bound failures add
    /// `domain`, `expected`, and `actual`; pattern mismatches add `pattern`.
    /// Non-finite floats render as `null`.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut out = json!({
            "code": self.code(),
            "class": self.class(),
            "message": self.to_string(),
        });

        if let Some(comparison) = self.comparison() {
            let (expected, actual) = comparison.to_json_pair();
            out["domain"] = json!(comparison.domain());
            out["expected"] = expected;
            out["actual"] = actual;
        }
        if let Self::PatternMismatch { pattern } = self {
            out["pattern"] = json!(pattern);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars() {
        assert_eq!(Value::from(json!(null)), Value::Invalid);
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(-3)), Value::Int(-3));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(json!("x")), Value::from("x"));
    }

    #[test]
    fn containers() {
        let v = Value::from(json!({"a": [1, 2], "b": {}}));
        assert_eq!(v.kind(), Kind::Map);
        assert_eq!(v.len(), Some(2));
        assert_eq!(Value::from(json!([1, "x", null])).len(), Some(3));
    }

    #[test]
    fn bound_error_json() {
        let err = RuleError::BelowMin(Comparison::Integer {
            expected: 10,
            actual: 5,
        });
        assert_eq!(
            err.to_json_value(),
            json!({
                "code": "min",
                "class": "violation",
                "message": "less than min: value must be at least 10, got 5",
                "domain": "integer",
                "expected": 10,
                "actual": 5,
            })
        );
    }

    #[test]
    fn unsigned_max_stays_numeric() {
        let err = RuleError::AboveMax(Comparison::Integer {
            expected: 0,
            actual: i128::from(u64::MAX),
        });
        assert_eq!(err.to_json_value()["actual"], json!(u64::MAX));
    }

    #[test]
    fn sentinel_and_pattern_json() {
        assert_eq!(
            RuleError::BadParameter.to_json_value(),
            json!({
                "code": "bad_parameter",
                "class": "misconfiguration",
                "message": "bad parameter",
            })
        );
        let err = RuleError::PatternMismatch {
            pattern: "^a$".into(),
        };
        assert_eq!(err.to_json_value()["pattern"], json!("^a$"));
    }
}
