// File: src/errors.rs
// Purpose: Per-field error collection

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to error message, one message per field
///
/// Recording an error for a field that already has one replaces the message
/// but keeps the field's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorStore {
    errors: IndexMap<String, String>,
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`, returning the message it replaced
    pub fn record(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Option<String> {
        self.errors.insert(field.into(), message.into())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate `(field, message)` pairs in the order fields first failed
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.errors
    }
}

impl IntoIterator for ErrorStore {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorStore {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
