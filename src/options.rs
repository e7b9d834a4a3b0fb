//! Output options for document serialization.
//!
//! The wire format is compact JSON with no inserted whitespace, which is what
//! [`Options::default`] produces. Pretty output exists for logs and debugging.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonapi::{Document, Options};
//!
//! let doc = Document::new();
//!
//! let compact = doc.to_vec_with_options(&Options::new()).unwrap();
//! assert_eq!(compact, br#"{"data":null}"#);
//!
//! let pretty = doc.to_vec_with_options(&Options::pretty().with_indent(4)).unwrap();
//! assert_eq!(pretty, b"{\n    \"data\": null\n}");
//! ```

/// Configuration options for document serialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: 2,
            pretty: false,
        }
    }
}

impl Options {
    /// Creates default options (compact output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonapi::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        Options {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub(crate) fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent]
    }
}
