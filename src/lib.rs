//! # serde_jsonapi
//!
//! Build and serialize JSON:API style documents from in-memory Rust values.
//!
//! ## What does it produce?
//!
//! Three kinds of top-level documents, each rendered as compact JSON with a
//! fixed member order:
//!
//! - **[`Document`]**: a single resource (`{"data":{...}}`, or `{"data":null}`)
//! - **[`CollectionDocument`]**: a list of resources (`{"data":[...]}`)
//! - **[`ErrorDocument`]**: a list of errors (`{"errors":[...]}`)
//!
//! Each may carry a `meta` object. Resource objects are named through a
//! [`Registry`] that maps Rust types to resource type names.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jsonapi::{Document, Registry, ResourceObject};
//!
//! #[derive(Serialize)]
//! struct TestItem {
//!     name: String,
//! }
//!
//! // Register domain types once, at start-up.
//! let mut registry = Registry::new();
//! registry.register::<TestItem>();
//!
//! // Build one document per response.
//! let item = TestItem { name: "A Name".to_string() };
//! let mut doc = Document::new();
//! doc.add_data(ResourceObject::new(&registry, "0", &item).unwrap());
//!
//! assert_eq!(
//!     doc.to_string().unwrap(),
//!     r#"{"data":{"type":"testitem","id":"0","attributes":{"name":"A Name"}}}"#
//! );
//! ```
//!
//! ### Collections and Meta
//!
//! ```rust
//! use serde_jsonapi::{meta, CollectionDocument, ResourceObject};
//! use serde_json::json;
//!
//! let mut doc = CollectionDocument::new();
//! doc.add_data(ResourceObject::with_type("tag", "1", &json!({"label": "rust"})).unwrap());
//! doc.add_meta(meta!({ "total": 1 }));
//!
//! assert_eq!(
//!     doc.to_string().unwrap(),
//!     r#"{"data":[{"type":"tag","id":"1","attributes":{"label":"rust"}}],"meta":{"total":1}}"#
//! );
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use serde_jsonapi::{Document, ErrorObject};
//!
//! let mut doc = Document::new();
//! doc.add_error(ErrorObject::new("test error"));
//!
//! // Errors replace the data member entirely.
//! assert_eq!(doc.to_string().unwrap(), r#"{"errors":[{"title":"test error"}]}"#);
//! ```
//!
//! ## Threading
//!
//! A [`Registry`] is filled with `&mut` access during start-up and then shared
//! read-only, e.g. behind an `Arc`. Documents are plain values owned by the
//! request that builds them.
//!
//! ## Format Reference
//!
//! See the [`format`] module for every envelope shape this crate emits.

pub mod document;
pub mod error;
pub mod error_object;
pub mod format;
pub mod macros;
pub mod meta;
pub mod options;
pub mod registry;
pub mod resource;

pub use document::{AnyDocument, CollectionDocument, Document, ErrorDocument};
pub use error::{Error, Result};
pub use error_object::ErrorObject;
pub use meta::Meta;
pub use options::Options;
pub use registry::{Registry, TypeNames};
pub use resource::ResourceObject;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use tracing::debug;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::json;

    use serde_json::Value;

    pub fn meta_from_value(value: Value) -> crate::Meta {
        match value {
            Value::Object(map) => crate::Meta::from(map),
            _ => crate::Meta::new(),
        }
    }
}

/// Serialize any `T: Serialize` to compact JSON bytes.
///
/// # Examples
///
/// ```rust
/// use serde_jsonapi::{to_vec, ErrorDocument};
///
/// let bytes = to_vec(&ErrorDocument::new()).unwrap();
/// assert_eq!(bytes, br#"{"errors":[]}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_vec_with_options(value, &Options::default())
}

/// Serialize any `T: Serialize` to JSON bytes with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options<T>(value: &T, options: &Options) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut output = Vec::with_capacity(128);
    to_writer_with_options(&mut output, value, options)?;
    debug!(
        document = short_type_name::<T>(),
        bytes = output.len(),
        pretty = options.pretty,
        "Serialized document"
    );
    Ok(output)
}

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    into_string(to_vec(value)?)
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    into_string(to_vec_with_options(value, &Options::pretty())?)
}

/// Serialize any `T: Serialize` as compact JSON into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_jsonapi::{to_writer, CollectionDocument};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &CollectionDocument::new()).unwrap();
/// assert_eq!(buffer, br#"{"data":[]}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &Options::default())
}

/// Serialize any `T: Serialize` as JSON into a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: &Options) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    if options.pretty {
        let indent = options.indent_bytes();
        let mut serializer =
            serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

fn into_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(Error::serialization)
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
