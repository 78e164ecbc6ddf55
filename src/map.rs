//! Ordered map type for JSON objects.
//!
//! This module provides [`JsonMap`], a wrapper around [`IndexMap`] that keeps
//! object entries in insertion order. Insertion order is the field
//! enumeration order of the source value; the text serializer may re-sort
//! keys lexicographically at output time, but the tree itself preserves what
//! the builder inserted.
//!
//! Duplicate keys follow last-write-wins: inserting an existing key replaces
//! the earlier value, which is how both composite field collisions and
//! stringified mapping-key collisions resolve.
//!
//! ## Examples
//!
//! ```rust
//! use reflected::{JsonMap, JsonValue};
//!
//! let mut map = JsonMap::new();
//! map.insert("name".to_string(), JsonValue::from("Alice"));
//! map.insert("age".to_string(), JsonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::JsonValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to JSON values.
///
/// # Examples
///
/// ```rust
/// use reflected::{JsonMap, JsonValue};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), JsonValue::from(1));
/// map.insert("second".to_string(), JsonValue::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(IndexMap<String, JsonValue>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced and the
    /// old value returned (last write wins); the entry keeps its original
    /// position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reflected::{JsonMap, JsonValue};
    ///
    /// let mut map = JsonMap::new();
    /// assert!(map.insert("key".to_string(), JsonValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), JsonValue::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, JsonValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, JsonValue>> for JsonMap {
    fn from(map: HashMap<String, JsonValue>) -> Self {
        JsonMap(map.into_iter().collect())
    }
}

impl From<JsonMap> for HashMap<String, JsonValue> {
    fn from(map: JsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, JsonValue)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}
