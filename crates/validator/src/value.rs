//! Runtime values inspected by the builtin rules
//!
//! [`Value`] is a closed sum type over every shape a rule can be applied to.
//! Numeric widths are collapsed on conversion: every signed integer becomes
//! [`Value::Int`], every unsigned integer becomes [`Value::Uint`], and both
//! float widths become [`Value::Float`]. Rules therefore match on one arm per
//! numeric family instead of one per bit width.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============================================================================
// KIND
// ============================================================================

/// Fieldless tag of a [`Value`]'s shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Seq,
    Array,
    Map,
    Pointer,
    Record,
    Unsupported,
}

impl Kind {
    /// Lowercase name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::String => "string",
            Self::Seq => "seq",
            Self::Array => "array",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Record => "record",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A structured record: a type name plus named fields.
///
/// Builtin rules never look inside a record; walking its fields is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Type name, for diagnostics.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record with the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// An arbitrarily-shaped runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value with no kind (an untyped nil).
    #[default]
    Invalid,
    Bool(bool),
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    Uint(u64),
    /// Any float width.
    Float(f64),
    String(String),
    /// Growable sequence.
    Seq(Vec<Value>),
    /// Fixed-size array.
    Array(Vec<Value>),
    /// Key/value mapping in insertion order.
    Map(Vec<(Value, Value)>),
    /// Nullable reference; `None` is null.
    Pointer(Option<Box<Value>>),
    Record(Record),
    /// A kind no rule supports (function, channel, ...). The name is kept for
    /// diagnostics.
    Unsupported(&'static str),
}

impl Value {
    /// Returns the shape of this value without inspecting its contents.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Invalid => Kind::Invalid,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Seq(_) => Kind::Seq,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Pointer(_) => Kind::Pointer,
            Self::Record(_) => Kind::Record,
            Self::Unsupported(_) => Kind::Unsupported,
        }
    }

    /// Element count of a collection, or character count of a string.
    ///
    /// Strings are measured in Unicode scalar values, not bytes. Returns
    /// `None` for kinds without a length.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.chars().count()),
            Self::Seq(items) | Self::Array(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns `true` when [`Value::len`] is `Some(0)`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Creates a null reference.
    #[must_use]
    pub fn null() -> Self {
        Self::Pointer(None)
    }

    /// Wraps a value in a non-null reference.
    pub fn pointer(value: impl Into<Value>) -> Self {
        Self::Pointer(Some(Box::new(value.into())))
    }

    /// Builds a fixed-size array value.
    pub fn array<T: Into<Value>, const N: usize>(items: [T; N]) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Returns the string contents if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_numeric {
    ($variant:ident: $wide:ty => $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(v: $t) -> Self {
                    Self::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_from_numeric!(Int: i64 => i8, i16, i32, i64, isize);
impl_from_numeric!(Uint: u64 => u8, u16, u32, u64, usize);
impl_from_numeric!(Float: f64 => f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl From<std::borrow::Cow<'_, str>> for Value {
    fn from(v: std::borrow::Cow<'_, str>) -> Self {
        Self::String(v.into_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Self::Seq(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::array(v)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Pointer(v.map(|inner| Box::new(inner.into())))
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(v: Box<T>) -> Self {
        Self::pointer(*v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

// ============================================================================
// TESTS
// ============================================================================
