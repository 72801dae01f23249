//! Error taxonomy for rule evaluation
//!
//! Every builtin rule reports failure through [`RuleError`]. The taxonomy is
//! closed and has two shapes:
//!
//! - **Sentinels** carry no payload: [`RuleError::ZeroValue`],
//!   [`RuleError::EmptyValue`], [`RuleError::ZeroNumber`],
//!   [`RuleError::FalseBool`], [`RuleError::BadParameter`],
//!   [`RuleError::Unsupported`].
//! - **Comparisons** carry the expected bound and the observed value in a
//!   [`Comparison`], specialized by value domain only for message rendering.
//!
//! Callers should classify with [`RuleError::class`] rather than matching on
//! the domain of a comparison: a [`ErrorClass::Misconfiguration`] points at a
//! broken rule setup, a [`ErrorClass::Violation`] is user-facing feedback.

use std::fmt;

// ============================================================================
// ERROR CLASS
// ============================================================================

/// Broad classification of a [`RuleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorClass {
    /// The value itself failed the rule.
    Violation,
    /// The rule was applied to a kind it does not support, or its parameter
    /// is malformed.
    Misconfiguration,
}

// ============================================================================
// COMPARISON PAYLOAD
// ============================================================================

/// Value domain a [`Comparison`] was measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    /// Character count of a string.
    StringLength,
    /// Element count of a sequence, map, or fixed array.
    CollectionLength,
    /// Signed or unsigned integer value.
    Integer,
    /// Floating point value.
    Float,
}

/// Expected bound and observed value of a failed length/min/max check.
///
/// Integer operands are held as `i128` so that unsigned values widen into the
/// signed representation without wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// String length in Unicode scalar values.
    StringLength { expected: i64, actual: i64 },
    /// Collection element count.
    CollectionLength { expected: i64, actual: i64 },
    /// Integer value.
    Integer { expected: i128, actual: i128 },
    /// Floating point value.
    Float { expected: f64, actual: f64 },
}

impl Comparison {
    /// Returns the domain this comparison was measured in.
    #[must_use]
    pub fn domain(&self) -> Domain {
        match self {
            Self::StringLength { .. } => Domain::StringLength,
            Self::CollectionLength { .. } => Domain::CollectionLength,
            Self::Integer { .. } => Domain::Integer,
            Self::Float { .. } => Domain::Float,
        }
    }

    /// Renders the expected bound, e.g. `5`.
    #[must_use]
    pub fn expected(&self) -> String {
        match self {
            Self::StringLength { expected, .. } | Self::CollectionLength { expected, .. } => {
                expected.to_string()
            }
            Self::Integer { expected, .. } => expected.to_string(),
            Self::Float { expected, .. } => expected.to_string(),
        }
    }

    /// Renders the observed value, e.g. `3`.
    #[must_use]
    pub fn actual(&self) -> String {
        match self {
            Self::StringLength { actual, .. } | Self::CollectionLength { actual, .. } => {
                actual.to_string()
            }
            Self::Integer { actual, .. } => actual.to_string(),
            Self::Float { actual, .. } => actual.to_string(),
        }
    }

    fn describe(&self, relation: &str) -> String {
        match self {
            Self::StringLength { expected, actual } => {
                format!("string length must be {relation} {expected} characters, got {actual}")
            }
            Self::CollectionLength { expected, actual } => {
                format!("collection size must be {relation} {expected} items, got {actual}")
            }
            Self::Integer { expected, actual } => {
                format!("value must be {relation} {expected}, got {actual}")
            }
            Self::Float { expected, actual } => {
                format!("value must be {relation} {expected}, got {actual}")
            }
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expected(), self.actual())
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// Outcome of a failed rule evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// Absent value (no kind at all).
    #[error("zero value")]
    ZeroValue,

    /// Empty string, null reference, or empty collection.
    #[error("empty value")]
    EmptyValue,

    /// Numeric zero.
    #[error("zero numeric value")]
    ZeroNumber,

    /// Boolean `false`.
    #[error("boolean value is false")]
    FalseBool,

    /// Rule parameter could not be coerced or compiled.
    #[error("bad parameter")]
    BadParameter,

    /// Rule does not apply to the value's kind.
    #[error("unsupported type")]
    Unsupported,

    /// Size or value differs from the exact parameter.
    #[error("invalid length: {}", .0.describe("exactly"))]
    Length(Comparison),

    /// Size or value is below the minimum parameter.
    #[error("less than min: {}", .0.describe("at least"))]
    BelowMin(Comparison),

    /// Size or value is above the maximum parameter.
    #[error("greater than max: {}", .0.describe("at most"))]
    AboveMax(Comparison),

    /// String does not match the pattern parameter.
    #[error("regular expression mismatch: `{pattern}`")]
    PatternMismatch { pattern: String },
}

impl RuleError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroValue => "zero_value",
            Self::EmptyValue => "empty_value",
            Self::ZeroNumber => "zero_number",
            Self::FalseBool => "false_bool",
            Self::BadParameter => "bad_parameter",
            Self::Unsupported => "unsupported",
            Self::Length(_) => "len",
            Self::BelowMin(_) => "min",
            Self::AboveMax(_) => "max",
            Self::PatternMismatch { .. } => "regexp",
        }
    }

    /// Whether the failure stems from the rule setup or from the value.
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::BadParameter | Self::Unsupported => ErrorClass::Misconfiguration,
            _ => ErrorClass::Violation,
        }
    }

    /// Returns `true` when the value itself failed the rule.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        self.class() == ErrorClass::Violation
    }

    /// Returns `true` when the rule was misapplied or its parameter is malformed.
    #[must_use]
    pub fn is_misconfiguration(&self) -> bool {
        self.class() == ErrorClass::Misconfiguration
    }

    /// Returns `true` for any of the four zero-value sentinels.
    #[must_use]
    pub fn is_zero_value(&self) -> bool {
        matches!(
            self,
            Self::ZeroValue | Self::EmptyValue | Self::ZeroNumber | Self::FalseBool
        )
    }

    /// Bound payload of a length/min/max failure.
    #[must_use]
    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            Self::Length(c) | Self::BelowMin(c) | Self::AboveMax(c) => Some(c),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
