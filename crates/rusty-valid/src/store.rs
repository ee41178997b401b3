// File: src/store.rs
// Purpose: Field-keyed message storage shared by every chain of a context

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Messages recorded per field, in the order the fields first failed.
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Field errors of embedded entities, keyed by the parent field.
pub type NestedErrors = IndexMap<String, FieldErrors>;

/// Appended to a parent key that already holds a nested error set.
pub const NESTED_COLLISION_SUFFIX: &str = "|";

/// Snapshot of everything a validation run recorded.
///
/// Serializes as `{"errors": {...}, "nested": {...}}`; both maps may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStore {
    #[serde(default)]
    errors: FieldErrors,

    #[serde(default)]
    nested: NestedErrors,
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for `key`, keeping earlier messages.
    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(key.into()).or_default().push(message.into());
    }

    /// Store a nested error set under `key`.
    ///
    /// When `key` is already taken the set goes under `key|` instead. The
    /// check is one level deep: a third set for the same key replaces the
    /// `key|` entry. Returns the key actually used.
    pub fn nest(&mut self, key: impl Into<String>, errors: FieldErrors) -> String {
        let mut key = key.into();
        if self.nested.contains_key(&key) {
            key.push_str(NESTED_COLLISION_SUFFIX);
        }
        self.nested.insert(key.clone(), errors);
        key
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn nested(&self) -> &NestedErrors {
        &self.nested
    }

    /// All messages for a field
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.errors.get(key).map(Vec::as_slice)
    }

    /// First message for a field
    pub fn first(&self, key: &str) -> Option<&str> {
        self.errors.get(key)?.first().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.nested.is_empty()
    }

    /// Total number of messages, nested ones included.
    pub fn len(&self) -> usize {
        let own: usize = self.errors.values().map(Vec::len).sum();
        let nested: usize = self
            .nested
            .values()
            .flat_map(|fields| fields.values())
            .map(Vec::len)
            .sum();
        own + nested
    }

    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub(crate) fn into_parts(self) -> (FieldErrors, NestedErrors) {
        (self.errors, self.nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_in_order() {
        let mut store = ErrorStore::new();
        store.push("name", "is required");
        store.push("name", "must have at least 3 characters");

        assert_eq!(
            store.get("name"),
            Some(&["is required".to_string(), "must have at least 3 characters".to_string()][..])
        );
        assert_eq!(store.first("name"), Some("is required"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let mut store = ErrorStore::new();
        store.push("zeta", "is required");
        store.push("alpha", "is required");
        store.push("zeta", "must be at least 1");

        let keys: Vec<&str> = store.errors().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_nest_renames_once_then_overwrites() {
        let mut first = FieldErrors::new();
        first.insert("title".into(), vec!["is required".into()]);
        let mut second = FieldErrors::new();
        second.insert("body".into(), vec!["is required".into()]);
        let mut third = FieldErrors::new();
        third.insert("slug".into(), vec!["is required".into()]);

        let mut store = ErrorStore::new();
        assert_eq!(store.nest("article", first.clone()), "article");
        assert_eq!(store.nest("article", second), "article|");
        assert_eq!(store.nest("article", third.clone()), "article|");

        assert_eq!(store.nested().get("article"), Some(&first));
        assert_eq!(store.nested().get("article|"), Some(&third));
        assert_eq!(store.nested().len(), 2);
    }

    #[test]
    fn test_empty_store() {
        let store = ErrorStore::new();
        assert!(store.is_empty());
        assert!(!store.has_errors());
        assert_eq!(store.first("missing"), None);
        assert_eq!(store.to_json().unwrap(), r#"{"errors":{},"nested":{}}"#);
    }

    #[test]
    fn test_nested_only_counts_as_errors() {
        let mut inner = FieldErrors::new();
        inner.insert("street".into(), vec!["is required".into(), "must have at least 2 characters".into()]);

        let mut store = ErrorStore::new();
        store.nest("address", inner);

        assert!(store.has_errors());
        assert!(store.errors().is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let mut store = ErrorStore::new();
        store.push("age", "is required");
        let mut inner = FieldErrors::new();
        inner.insert("zip".into(), vec!["must contain only numbers".into()]);
        store.nest("address", inner);

        let json = store.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"errors":{"age":["is required"]},"nested":{"address":{"zip":["must contain only numbers"]}}}"#
        );

        let back: ErrorStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
