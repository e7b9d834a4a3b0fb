//! Resource objects: a domain value wrapped with its type name and id.
//!
//! A resource object renders as `{"type":...,"id":...,"attributes":{...}}`,
//! always in that key order. The attributes are the domain value's own serde
//! serialization, with its field order preserved.
//!
//! Attributes are serialized when the resource is built, so any failure is
//! reported by [`ResourceObject::new`] and never by document serialization.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jsonapi::{Registry, ResourceObject};
//!
//! #[derive(Serialize)]
//! struct TestItem { name: String }
//!
//! let mut registry = Registry::new();
//! registry.register::<TestItem>();
//!
//! let item = TestItem { name: "A Name".to_string() };
//! let resource = ResourceObject::new(&registry, "0", &item).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_string(&resource).unwrap(),
//!     r#"{"type":"testitem","id":"0","attributes":{"name":"A Name"}}"#
//! );
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::json_kind;
use crate::{Error, Registry, Result};

/// A typed, identified wrapper around a domain value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    attributes: Map<String, Value>,
}

impl ResourceObject {
    /// Builds a resource whose type name is resolved through `registry`.
    ///
    /// Every serialized field of `object` is copied into `attributes` as-is,
    /// including fields named `id` or `type`. Mark such fields
    /// `#[serde(skip)]` if they should only appear as the resource's own
    /// `id`/`type` members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredType`] if the type of `object` was never
    /// registered, [`Error::InvalidAttributes`] if it does not serialize to an
    /// object, or a serialization error if it cannot be serialized at all.
    pub fn new<T>(registry: &Registry, id: impl Into<String>, object: &T) -> Result<Self>
    where
        T: ?Sized + Serialize + 'static,
    {
        let kind = registry.name_for(object)?;
        Self::with_type(kind, id, object)
    }

    /// Builds a resource with an explicit type name, bypassing the registry.
    ///
    /// Attributes are copied the same way as in [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttributes`] if `object` does not serialize to
    /// an object, or a serialization error if it cannot be serialized at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonapi::ResourceObject;
    /// use std::collections::BTreeMap;
    ///
    /// let mut attrs = BTreeMap::new();
    /// attrs.insert("title", "Hello");
    ///
    /// let resource = ResourceObject::with_type("articles", "1", &attrs).unwrap();
    /// assert_eq!(resource.kind(), "articles");
    /// ```
    pub fn with_type<T>(kind: impl Into<String>, id: impl Into<String>, object: &T) -> Result<Self>
    where
        T: ?Sized + Serialize,
    {
        let attributes = match serde_json::to_value(object)? {
            Value::Object(map) => map,
            other => return Err(Error::invalid_attributes::<T>(json_kind(&other))),
        };

        Ok(ResourceObject {
            kind: kind.into(),
            id: id.into(),
            attributes,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The resource type name, rendered as the `type` member.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};

    #[derive(Serialize)]
    struct Book {
        title: String,
        pages: u32,
        subtitle: Option<String>,
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("broken field"))
        }
    }

    #[test]
    fn test_field_order_follows_struct() {
        let book = Book {
            title: "Zen".to_string(),
            pages: 120,
            subtitle: None,
        };
        let resource = ResourceObject::with_type("book", "7", &book).unwrap();

        let out = serde_json::to_string(&resource).unwrap();
        assert_eq!(
            out,
            r#"{"type":"book","id":"7","attributes":{"title":"Zen","pages":120,"subtitle":null}}"#
        );
    }

    #[test]
    fn test_empty_id_is_kept() {
        let book = Book {
            title: "Draft".to_string(),
            pages: 1,
            subtitle: None,
        };
        let resource = ResourceObject::with_type("book", "", &book).unwrap();

        assert_eq!(resource.id(), "");
        assert!(serde_json::to_string(&resource)
            .unwrap()
            .contains(r#""id":"""#));
    }

    #[test]
    fn test_unregistered_type() {
        let registry = Registry::new();
        let book = Book {
            title: "Zen".to_string(),
            pages: 120,
            subtitle: None,
        };

        let err = ResourceObject::new(&registry, "1", &book).unwrap_err();
        assert!(matches!(err, Error::UnregisteredType { .. }));
    }

    #[test]
    fn test_non_object_attributes() {
        let err = ResourceObject::with_type("number", "1", &42).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAttributes {
                type_name: "i32",
                found: "number"
            }
        );
    }

    #[test]
    fn test_serialization_failure_is_wrapped() {
        let err = ResourceObject::with_type("broken", "1", &Broken).unwrap_err();
        match err {
            Error::Serialization(msg) => assert!(msg.contains("broken field")),
            other => panic!("Expected Serialization, got {:?}", other),
        }
    }

    #[test]
    fn test_domain_id_field_stays_in_attributes() {
        #[derive(Serialize)]
        struct User {
            id: u32,
            name: &'static str,
        }

        #[derive(Serialize)]
        struct Account {
            #[serde(skip)]
            #[allow(dead_code)]
            id: u32,
            name: &'static str,
        }

        let user = ResourceObject::with_type("user", "7", &User { id: 7, name: "ann" }).unwrap();
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"type":"user","id":"7","attributes":{"id":7,"name":"ann"}}"#
        );

        let account =
            ResourceObject::with_type("account", "7", &Account { id: 7, name: "ann" }).unwrap();
        assert_eq!(
            serde_json::to_string(&account).unwrap(),
            r#"{"type":"account","id":"7","attributes":{"name":"ann"}}"#
        );
    }
}
