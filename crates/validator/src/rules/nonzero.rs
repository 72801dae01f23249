//! `nonzero`: the value must not be its kind's zero value

use super::observed;
use crate::error::RuleError;
use crate::value::Value;

/// Checks that a value is not the zero value of its kind.
///
/// | Kind | Fails when | Error |
/// |------|------------|-------|
/// | string | no characters | [`RuleError::EmptyValue`] |
/// | pointer | null | [`RuleError::EmptyValue`] |
/// | seq, array, map | no elements | [`RuleError::EmptyValue`] |
/// | int, uint, float | equals zero | [`RuleError::ZeroNumber`] |
/// | bool | `false` | [`RuleError::FalseBool`] |
/// | invalid | always | [`RuleError::ZeroValue`] |
/// | record | never | |
///
/// The parameter is ignored.
pub fn nonzero(value: &Value, _param: &str) -> Result<(), RuleError> {
    let outcome = match value {
        Value::String(s) if s.is_empty() => Err(RuleError::EmptyValue),
        Value::Pointer(None) => Err(RuleError::EmptyValue),
        Value::Seq(items) | Value::Array(items) if items.is_empty() => Err(RuleError::EmptyValue),
        Value::Map(entries) if entries.is_empty() => Err(RuleError::EmptyValue),
        Value::Int(0) | Value::Uint(0) => Err(RuleError::ZeroNumber),
        Value::Float(f) if *f == 0.0 => Err(RuleError::ZeroNumber),
        Value::Bool(false) => Err(RuleError::FalseBool),
        Value::Invalid => Err(RuleError::ZeroValue),
        Value::Unsupported(_) => Err(RuleError::Unsupported),
        Value::String(_)
        | Value::Pointer(Some(_))
        | Value::Seq(_)
        | Value::Array(_)
        | Value::Map(_)
        | Value::Int(_)
        | Value::Uint(_)
        | Value::Float(_)
        | Value::Bool(true)
        | Value::Record(_) => Ok(()),
    };
    observed("nonzero", value, outcome)
}
