//! Core value types

use chrono::{NaiveDateTime, TimeDelta};

/// Value type enumeration
///
/// Covers the native JSON values plus the two temporal types the codec
/// round-trips. Anything outside this set has no encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Int(i64),
    /// Floating point value (f64)
    Float(f64),
    /// String value
    Str(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Key-value map (insertion order preserved)
    Map(Vec<MapEntry>),
    /// Calendar timestamp, second precision
    Timestamp(NaiveDateTime),
    /// Signed duration, microsecond precision
    Duration(TimeDelta),
}

/// Map entry (key-value pair)
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub key: String,
    pub value: Value,
}

impl MapEntry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

// ============================================================
// Builder functions
// ============================================================

impl Value {
    /// Create a null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub fn bool(v: bool) -> Self {
        Value::Bool(v)
    }

    /// Create an integer value
    pub fn int(v: i64) -> Self {
        Value::Int(v)
    }

    /// Create a float value
    pub fn float(v: f64) -> Self {
        Value::Float(v)
    }

    /// Create a string value
    pub fn str(v: impl Into<String>) -> Self {
        Value::Str(v.into())
    }

    /// Create a list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Create a map value
    pub fn map(entries: Vec<MapEntry>) -> Self {
        Value::Map(entries)
    }

    /// Create a timestamp value
    pub fn timestamp(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }

    /// Create a duration value
    pub fn duration(v: TimeDelta) -> Self {
        Value::Duration(v)
    }

    // ============================================================
    // Type checking
    // ============================================================

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Value::Timestamp(_))
    }

    pub fn is_duration(&self) -> bool {
        matches!(self, Value::Duration(_))
    }

    // ============================================================
    // Value extraction
    // ============================================================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[MapEntry]> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::Timestamp(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&TimeDelta> {
        match self {
            Value::Duration(v) => Some(v),
            _ => None,
        }
    }

    /// Get a value from a map by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries.iter().find(|e| e.key == key).map(|e| &e.value),
            _ => None,
        }
    }

    /// Get a value from a list by index
    pub fn index(&self, idx: usize) -> Option<&Value> {
        match self {
            Value::List(items) => items.get(idx),
            _ => None,
        }
    }
}

/// Helper to create a map entry
pub fn field(key: impl Into<String>, value: Value) -> MapEntry {
    MapEntry::new(key, value)
}
