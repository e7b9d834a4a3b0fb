//! Ordered meta information attached to documents.
//!
//! [`Meta`] wraps an [`IndexMap`] of string keys to JSON values. It keeps
//! insertion order, so the `meta` member of a document always renders the same
//! bytes for the same sequence of calls.
//!
//! Inserting an existing key replaces the value and keeps the key's original
//! position. [`Meta::merge`] applies that rule key by key.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonapi::Meta;
//!
//! let mut meta = Meta::new();
//! meta.insert("vendor", "acme");
//! meta.insert("page", 1);
//! meta.insert("vendor", "other");
//!
//! let keys: Vec<_> = meta.keys().cloned().collect();
//! assert_eq!(keys, vec!["vendor", "page"]);
//! assert_eq!(meta.get("vendor").and_then(|v| v.as_str()), Some("other"));
//! ```

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::json_kind;
use crate::{Error, Result};

/// An ordered map of meta keys to JSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meta(IndexMap<String, Value>);

impl Meta {
    /// Creates an empty `Meta`.
    #[must_use]
    pub fn new() -> Self {
        Meta(IndexMap::new())
    }

    /// Converts any serializable value into meta.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMeta`] if the value does not serialize to an
    /// object, or a serialization error if it cannot be serialized at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use serde_jsonapi::Meta;
    ///
    /// #[derive(Serialize)]
    /// struct Paging { total: u32, page: u32 }
    ///
    /// let meta = Meta::from_serialize(&Paging { total: 40, page: 2 }).unwrap();
    /// assert_eq!(meta.len(), 2);
    ///
    /// assert!(Meta::from_serialize(&vec![1, 2]).is_err());
    /// ```
    pub fn from_serialize<T: ?Sized + Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Meta::from(map)),
            other => Err(Error::invalid_meta(json_kind(&other))),
        }
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Merges `other` into this map. Values from `other` win per key.
    pub fn merge(&mut self, other: Meta) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Serialize for Meta {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl From<Map<String, Value>> for Meta {
    fn from(map: Map<String, Value>) -> Self {
        Meta(map.into_iter().collect())
    }
}

/// Entries are taken in key order, since `HashMap` iteration order is not stable.
impl<V: Into<Value>> From<HashMap<String, V>> for Meta {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect::<BTreeMap<_, _>>().into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Meta {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Meta(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Meta {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Meta {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Meta {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
