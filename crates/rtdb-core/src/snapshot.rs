//! Data Snapshots
//!
//! A [`Snapshot`] is the value read at a location, together with the
//! reference it was read from.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::reference::{validate_path, Reference};
use crate::result::RtdbResult;

/// Immutable copy of the data at a database location
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    reference: Reference,
    value: Value,
}

impl Snapshot {
    pub fn new(reference: Reference, value: Value) -> Self {
        Self { reference, value }
    }

    /// Location this snapshot was read from
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Key of the location; `None` at the database root
    pub fn key(&self) -> Option<Cow<'_, str>> {
        self.reference.key()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Deserialize the value into `T`
    pub fn deserialize<T: DeserializeOwned>(&self) -> RtdbResult<T> {
        Ok(T::deserialize(&self.value)?)
    }

    /// A location without data reads as `null`
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    pub fn has_children(&self) -> bool {
        self.num_children() > 0
    }

    pub fn num_children(&self) -> usize {
        match &self.value {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.iter().filter(|v| !v.is_null()).count(),
            _ => 0,
        }
    }

    /// Whether a (possibly nested) child holds data
    pub fn has_child(&self, path: &str) -> bool {
        validate_path(path)
            .map(|keys| !lookup(&self.value, &keys).is_null())
            .unwrap_or(false)
    }

    /// Snapshot of a (possibly nested) child; missing children read as `null`
    pub fn child(&self, path: &str) -> RtdbResult<Snapshot> {
        let keys = validate_path(path)?;
        let value = lookup(&self.value, &keys).clone();
        Ok(Snapshot::new(self.reference.child(path)?, value))
    }
}

static NULL: Value = Value::Null;

fn lookup<'v>(value: &'v Value, keys: &[&str]) -> &'v Value {
    keys.iter().fold(value, |current, key| match current {
        Value::Object(map) => map.get(*key).unwrap_or(&NULL),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index))
            .unwrap_or(&NULL),
        _ => &NULL,
    })
}
