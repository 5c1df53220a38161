//! Structured context attached to log calls
//!
//! This module provides:
//! - `FieldValue`: The value side of a context entry
//! - `LogContext`: Insertion-ordered key-value fields for a single record

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Value type for context fields
///
/// Scalar variants (string, int, float, bool) take part in message
/// interpolation; `Null`, `Array`, and `Object` are carried through to
/// serialization only.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<FieldValue>),
    Object(Vec<(String, FieldValue)>),
}

impl FieldValue {
    /// Whether this value participates in placeholder interpolation.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldValue::Bool(_) | FieldValue::Int(_) | FieldValue::Float(_) | FieldValue::String(_)
        )
    }

    /// Textual form used when substituting a `{key}` placeholder.
    ///
    /// Returns `None` for null and structured values, which are excluded
    /// from interpolation.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Int(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Null | FieldValue::Array(_) | FieldValue::Object(_) => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) => {
                // JSON has no representation for NaN or infinity
                if f.is_finite() {
                    serializer.serialize_f64(*f)
                } else {
                    Err(serde::ser::Error::custom(
                        "non-finite float cannot be encoded as JSON",
                    ))
                }
            }
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Array(items) => items.serialize(serializer),
            FieldValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => write!(f, "<unencodable>"),
            },
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<V: Into<FieldValue>> From<Vec<V>> for FieldValue {
    fn from(items: Vec<V>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}

/// Context for structured logging with key-value fields
///
/// Insertion order is preserved for serialization; inserting an existing
/// key overwrites the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogContext {
    fields: Vec<(String, FieldValue)>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to the context
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.add_field(key, value);
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value.into(),
            None => self.fields.push((key, value.into())),
        }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for LogContext {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
