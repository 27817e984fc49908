//! Per-entity metadata: a typed key/value store plus one untyped tag slot
//!
//! Keys starting with [`RESERVED_PREFIX`] belong to the library. They can be
//! read by anyone but only written through crate-internal paths.

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// First character of every reserved metadata key
pub const RESERVED_PREFIX: char = '~';

/// Reserved keys written by the library itself
pub mod reserved_keys {
    /// Per-vertex float used as a secondary sort key for components
    pub const SORTABLE_LAYOUT_ORDER: &str = "~SortableLayoutOrder";

    /// Graph-level flag recording that vertices carry a sortable layout order
    pub const SORTABLE_LAYOUT_ORDER_SET: &str = "~SortableLayoutOrderSet";
}

/// Untyped payload attached to an entity's tag slot
pub type Tag = Arc<dyn Any + Send + Sync>;

/// Typed metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(i64), // Unix timestamp in milliseconds
    Array(Vec<MetadataValue>),
    Map(HashMap<String, MetadataValue>),
    Null,
}

/// The type of a [`MetadataValue`], used to demand a specific type on lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    Array,
    Map,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl MetadataValue {
    /// The type of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            MetadataValue::String(_) => ValueKind::String,
            MetadataValue::Integer(_) => ValueKind::Integer,
            MetadataValue::Float(_) => ValueKind::Float,
            MetadataValue::Boolean(_) => ValueKind::Boolean,
            MetadataValue::DateTime(_) => ValueKind::DateTime,
            MetadataValue::Array(_) => ValueKind::Array,
            MetadataValue::Map(_) => ValueKind::Map,
            MetadataValue::Null => ValueKind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MetadataValue::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            MetadataValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<i64> {
        match self {
            MetadataValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<MetadataValue>> {
        match self {
            MetadataValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, MetadataValue>> {
        match self {
            MetadataValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Numeric view of integer and float values
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Integer(i) => Some(*i as f64),
            MetadataValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "\"{}\"", s),
            MetadataValue::Integer(i) => write!(f, "{}", i),
            MetadataValue::Float(fl) => write!(f, "{}", fl),
            MetadataValue::Boolean(b) => write!(f, "{}", b),
            MetadataValue::DateTime(dt) => write!(f, "DateTime({})", dt),
            MetadataValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            MetadataValue::Map(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                write!(f, "{{")?;
                for (i, (key, val)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
            MetadataValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_string())
    }
}

impl From<i64> for MetadataValue {
    fn from(i: i64) -> Self {
        MetadataValue::Integer(i)
    }
}

impl From<i32> for MetadataValue {
    fn from(i: i32) -> Self {
        MetadataValue::Integer(i as i64)
    }
}

impl From<f64> for MetadataValue {
    fn from(f: f64) -> Self {
        MetadataValue::Float(f)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Boolean(b)
    }
}

impl From<Vec<MetadataValue>> for MetadataValue {
    fn from(arr: Vec<MetadataValue>) -> Self {
        MetadataValue::Array(arr)
    }
}

impl From<HashMap<String, MetadataValue>> for MetadataValue {
    fn from(map: HashMap<String, MetadataValue>) -> Self {
        MetadataValue::Map(map)
    }
}

/// Whether a key lives in the reserved namespace
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

fn validate_key(key: &str) -> GraphResult<()> {
    if key.is_empty() || is_reserved_key(key) {
        return Err(GraphError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Key/value metadata plus a tag slot, carried by vertices, edges and graphs
#[derive(Clone, Default)]
pub struct Metadata {
    values: HashMap<String, MetadataValue>,
    tag: Option<Tag>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the one it replaced.
    ///
    /// Keys are case-sensitive; empty and reserved keys are rejected.
    pub fn set_value(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> GraphResult<Option<MetadataValue>> {
        let key = key.into();
        validate_key(&key)?;
        Ok(self.values.insert(key, value.into()))
    }

    /// Get a value if present
    pub fn try_get_value(&self, key: &str) -> Option<&MetadataValue> {
        self.values.get(key)
    }

    /// Get a value that must be present and of the expected type
    pub fn get_required_value(&self, key: &str, expected: ValueKind) -> GraphResult<&MetadataValue> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| GraphError::MissingKey(key.to_string()))?;

        if value.kind() != expected {
            return Err(GraphError::TypeMismatch {
                key: key.to_string(),
                expected,
                actual: value.kind(),
            });
        }
        Ok(value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a value. Returns whether the key was present.
    pub fn remove_key(&mut self, key: &str) -> GraphResult<bool> {
        validate_key(key)?;
        Ok(self.values.remove(key).is_some())
    }

    /// Iterate over all keys, reserved ones included
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Downcast the tag to a concrete type
    pub fn tag_as<T: Any>(&self) -> Option<&T> {
        self.tag.as_deref().and_then(|tag| tag.downcast_ref::<T>())
    }

    /// Replace the tag, returning the previous one
    pub fn set_tag(&mut self, tag: Option<Tag>) -> Option<Tag> {
        std::mem::replace(&mut self.tag, tag)
    }

    pub(crate) fn set_reserved_value(&mut self, key: &str, value: impl Into<MetadataValue>) {
        debug_assert!(is_reserved_key(key));
        self.values.insert(key.to_string(), value.into());
    }

    /// Shallow-copy values and/or tag from another store
    pub(crate) fn copy_from(&mut self, other: &Metadata, copy_values: bool, copy_tag: bool) {
        if copy_values {
            self.values
                .extend(other.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if copy_tag {
            self.tag = other.tag.clone();
        }
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("values", &self.values)
            .field("has_tag", &self.tag.is_some())
            .finish()
    }
}
