//! Top-level documents: the envelope around resources, errors and meta.
//!
//! There are three document kinds, each with a fixed primary member:
//!
//! | Kind | Primary member | Empty rendering |
//! |------|----------------|-----------------|
//! | [`Document`] | `data` (one resource) or `errors` | `{"data":null}` |
//! | [`CollectionDocument`] | `data` (array of resources) | `{"data":[]}` |
//! | [`ErrorDocument`] | `errors` (array of error objects) | `{"errors":[]}` |
//!
//! `meta` follows the primary member and is left out while no meta entry
//! has been added. [`AnyDocument`] wraps any of the three for code that
//! returns "some document".
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonapi::{meta, Document, ErrorObject};
//!
//! let mut doc = Document::new();
//! doc.add_meta(meta!({ "vendor": "acme" }));
//! assert_eq!(doc.to_string().unwrap(), r#"{"data":null,"meta":{"vendor":"acme"}}"#);
//!
//! doc.add_error(ErrorObject::new("test error"));
//! assert_eq!(
//!     doc.to_string().unwrap(),
//!     r#"{"errors":[{"title":"test error"}],"meta":{"vendor":"acme"}}"#
//! );
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::{ErrorObject, Meta, Options, ResourceObject, Result};

/// Primary content of a [`Document`]: a single resource, or errors.
#[derive(Clone, Debug, PartialEq)]
enum Content {
    Data(Option<ResourceObject>),
    Errors(Vec<ErrorObject>),
}

/// A document whose primary data is a single resource.
///
/// Adding an error switches the document to an error response: from then on
/// it renders `errors` and no `data` member at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    content: Content,
    meta: Meta,
}

impl Document {
    /// Creates a document with `null` data and no meta.
    #[must_use]
    pub fn new() -> Self {
        Document {
            content: Content::Data(None),
            meta: Meta::new(),
        }
    }

    /// Sets the primary resource, replacing any previous one.
    ///
    /// Ignored once the document holds errors, since errors suppress data.
    pub fn add_data(&mut self, resource: ResourceObject) {
        match &mut self.content {
            Content::Data(data) => *data = Some(resource),
            Content::Errors(errors) => debug!(
                errors = errors.len(),
                kind = resource.kind(),
                id = resource.id(),
                "Dropping data added to a document that holds errors"
            ),
        }
    }

    /// Appends an error. Any primary resource is discarded.
    pub fn add_error(&mut self, error: ErrorObject) {
        match &mut self.content {
            Content::Errors(errors) => errors.push(error),
            Content::Data(data) => {
                if let Some(dropped) = data {
                    debug!(
                        kind = dropped.kind(),
                        id = dropped.id(),
                        "Error added, document data suppressed"
                    );
                }
                self.content = Content::Errors(vec![error]);
            }
        }
    }

    /// Merges entries into the document meta; later values win per key.
    pub fn add_meta(&mut self, meta: impl Into<Meta>) {
        self.meta.merge(meta.into());
    }

    /// The primary resource, if set and not suppressed by errors.
    #[must_use]
    pub fn data(&self) -> Option<&ResourceObject> {
        match &self.content {
            Content::Data(data) => data.as_ref(),
            Content::Errors(_) => None,
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        match &self.content {
            Content::Data(_) => &[],
            Content::Errors(errors) => errors,
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        matches!(self.content, Content::Errors(_))
    }

    #[must_use]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Serializes the document to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        crate::to_vec(self)
    }

    /// Serializes the document to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_string(&self) -> Result<String> {
        crate::to_string(self)
    }

    /// Serializes the document with custom output options.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec_with_options(&self, options: &Options) -> Result<Vec<u8>> {
        crate::to_vec_with_options(self, options)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 1 + usize::from(!self.meta.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        match &self.content {
            Content::Data(data) => map.serialize_entry("data", data)?,
            Content::Errors(errors) => map.serialize_entry("errors", errors)?,
        }
        if !self.meta.is_empty() {
            map.serialize_entry("meta", &self.meta)?;
        }
        map.end()
    }
}

/// A document whose primary data is a list of resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CollectionDocument {
    data: Vec<ResourceObject>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    meta: Meta,
}

impl CollectionDocument {
    /// Creates a document with an empty `data` array and no meta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resource to the `data` array.
    pub fn add_data(&mut self, resource: ResourceObject) {
        self.data.push(resource);
    }

    /// Merges entries into the document meta; later values win per key.
    pub fn add_meta(&mut self, meta: impl Into<Meta>) {
        self.meta.merge(meta.into());
    }

    #[must_use]
    pub fn data(&self) -> &[ResourceObject] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Serializes the document to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        crate::to_vec(self)
    }

    /// Serializes the document to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_string(&self) -> Result<String> {
        crate::to_string(self)
    }

    /// Serializes the document with custom output options.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec_with_options(&self, options: &Options) -> Result<Vec<u8>> {
        crate::to_vec_with_options(self, options)
    }
}

impl Extend<ResourceObject> for CollectionDocument {
    fn extend<T: IntoIterator<Item = ResourceObject>>(&mut self, iter: T) {
        self.data.extend(iter);
    }
}

impl FromIterator<ResourceObject> for CollectionDocument {
    fn from_iter<T: IntoIterator<Item = ResourceObject>>(iter: T) -> Self {
        CollectionDocument {
            data: iter.into_iter().collect(),
            meta: Meta::new(),
        }
    }
}

/// A document that only reports errors. It never has a `data` member.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ErrorDocument {
    errors: Vec<ErrorObject>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    meta: Meta,
}

impl ErrorDocument {
    /// Creates a document with an empty `errors` array and no meta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ErrorObject) {
        self.errors.push(error);
    }

    /// Merges entries into the document meta; later values win per key.
    pub fn add_meta(&mut self, meta: impl Into<Meta>) {
        self.meta.merge(meta.into());
    }

    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }

    #[must_use]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Serializes the document to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        crate::to_vec(self)
    }

    /// Serializes the document to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_string(&self) -> Result<String> {
        crate::to_string(self)
    }

    /// Serializes the document with custom output options.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec_with_options(&self, options: &Options) -> Result<Vec<u8>> {
        crate::to_vec_with_options(self, options)
    }
}

impl Extend<ErrorObject> for ErrorDocument {
    fn extend<T: IntoIterator<Item = ErrorObject>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl From<ErrorObject> for ErrorDocument {
    fn from(error: ErrorObject) -> Self {
        ErrorDocument {
            errors: vec![error],
            meta: Meta::new(),
        }
    }
}

/// Any one of the three document kinds.
///
/// Serializes exactly like the document it wraps.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyDocument {
    Document(Document),
    Collection(CollectionDocument),
    Errors(ErrorDocument),
}

impl AnyDocument {
    /// Merges entries into the wrapped document's meta.
    pub fn add_meta(&mut self, meta: impl Into<Meta>) {
        match self {
            AnyDocument::Document(doc) => doc.add_meta(meta),
            AnyDocument::Collection(doc) => doc.add_meta(meta),
            AnyDocument::Errors(doc) => doc.add_meta(meta),
        }
    }

    #[must_use]
    pub fn meta(&self) -> &Meta {
        match self {
            AnyDocument::Document(doc) => doc.meta(),
            AnyDocument::Collection(doc) => doc.meta(),
            AnyDocument::Errors(doc) => doc.meta(),
        }
    }

    /// Returns `true` if this document reports errors instead of data.
    #[must_use]
    pub fn is_error(&self) -> bool {
        match self {
            AnyDocument::Document(doc) => doc.has_errors(),
            AnyDocument::Collection(_) => false,
            AnyDocument::Errors(_) => true,
        }
    }

    /// Serializes the document to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        crate::to_vec(self)
    }

    /// Serializes the document to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON serializer fails.
    pub fn to_string(&self) -> Result<String> {
        crate::to_string(self)
    }
}

impl From<Document> for AnyDocument {
    fn from(doc: Document) -> Self {
        AnyDocument::Document(doc)
    }
}

impl From<CollectionDocument> for AnyDocument {
    fn from(doc: CollectionDocument) -> Self {
        AnyDocument::Collection(doc)
    }
}

impl From<ErrorDocument> for AnyDocument {
    fn from(doc: ErrorDocument) -> Self {
        AnyDocument::Errors(doc)
    }
}

impl From<crate::Error> for AnyDocument {
    fn from(err: crate::Error) -> Self {
        AnyDocument::Errors(ErrorDocument::from(ErrorObject::from(&err)))
    }
}
