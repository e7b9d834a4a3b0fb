//! Error types for building and serializing documents.
//!
//! ## Error Categories
//!
//! - **Registry Errors**: A value's type was never registered, so no resource
//!   type name can be resolved for it
//! - **Shape Errors**: A value meant to become `attributes` or `meta` did not
//!   serialize to a JSON object
//! - **Serialization Errors**: The underlying JSON serializer failed
//! - **I/O Errors**: Writing a document to a writer failed
//!
//! Every error can be turned into an [`ErrorObject`](crate::ErrorObject), so a
//! failed response can degrade into an error document:
//!
//! ```rust
//! use serde_jsonapi::{Error, ErrorDocument, ErrorObject};
//!
//! let err = Error::custom("something went wrong");
//! let mut doc = ErrorDocument::new();
//! doc.add_error(ErrorObject::from(&err));
//!
//! assert!(doc.to_string().unwrap().starts_with(r#"{"errors":[{"title":"#));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building or serializing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Name lookup for a type that was never registered
    #[error("type `{type_name}` is not registered")]
    UnregisteredType { type_name: &'static str },

    /// Resource attributes did not serialize to an object
    #[error("attributes of `{type_name}` must serialize to an object, found {found}")]
    InvalidAttributes {
        type_name: &'static str,
        found: &'static str,
    },

    /// Meta did not serialize to an object
    #[error("meta must serialize to an object, found {found}")]
    InvalidMeta { found: &'static str },

    /// Failure reported by the JSON serializer
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unregistered-type error for `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonapi::Error;
    ///
    /// struct Article;
    ///
    /// let err = Error::unregistered::<Article>();
    /// assert!(err.to_string().contains("Article"));
    /// ```
    pub fn unregistered<T: ?Sized>() -> Self {
        Error::UnregisteredType {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Creates an error for a resource whose attributes are not an object.
    pub fn invalid_attributes<T: ?Sized>(found: &'static str) -> Self {
        Error::InvalidAttributes {
            type_name: std::any::type_name::<T>(),
            found,
        }
    }

    /// Creates an error for meta that is not an object.
    pub fn invalid_meta(found: &'static str) -> Self {
        Error::InvalidMeta { found }
    }

    /// Creates a serialization error with a display message.
    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonapi::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Stable machine-readable identifier for this kind of error.
    ///
    /// Used as the `code` member when an error is rendered as an error object.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Error::UnregisteredType { .. } => "unregistered_type",
            Error::InvalidAttributes { .. } => "invalid_attributes",
            Error::InvalidMeta { .. } => "invalid_meta",
            Error::Serialization(_) => "serialization_failed",
            Error::Io(_) => "io_error",
            Error::Custom(_) => "internal_error",
        }
    }

    /// Short human-readable summary of this kind of error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Error::UnregisteredType { .. } => "Unregistered resource type",
            Error::InvalidAttributes { .. } => "Invalid resource attributes",
            Error::InvalidMeta { .. } => "Invalid meta",
            Error::Serialization(_) => "Serialization failed",
            Error::Io(_) => "Write failed",
            Error::Custom(_) => "Internal error",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Serialization(err.to_string())
        }
    }
}

/// Name of a JSON value's kind, for shape errors.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, Error>;
