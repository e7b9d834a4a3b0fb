//! Error objects carried in the `errors` member of a document.
//!
//! Only `title` is required. Unset members are left out of the output
//! entirely rather than rendered as `null`.

use serde::Serialize;

use crate::Error;

/// A structured, client-facing error.
///
/// Members render in the order `title`, `detail`, `status`, `code`.
///
/// # Examples
///
/// ```rust
/// use serde_jsonapi::ErrorObject;
///
/// let err = ErrorObject::new("Not found").with_status("404");
/// assert_eq!(
///     serde_json::to_string(&err).unwrap(),
///     r#"{"title":"Not found","status":"404"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ErrorObject {
    pub fn new(title: impl Into<String>) -> Self {
        ErrorObject {
            title: title.into(),
            detail: None,
            status: None,
            code: None,
        }
    }

    /// Sets the human-readable explanation specific to this occurrence.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = non_empty(detail.into());
        self
    }

    /// Sets the HTTP status code, as a string.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(status.into());
        self
    }

    /// Sets the application-specific error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = non_empty(code.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl From<&Error> for ErrorObject {
    fn from(err: &Error) -> Self {
        ErrorObject::new(err.title())
            .with_detail(err.to_string())
            .with_status("500")
            .with_code(err.code())
    }
}

impl From<Error> for ErrorObject {
    fn from(err: Error) -> Self {
        ErrorObject::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only() {
        let err = ErrorObject::new("test error");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"title":"test error"}"#
        );
    }

    #[test]
    fn test_member_order_is_fixed() {
        // Builder call order does not affect output order.
        let err = ErrorObject::new("Invalid")
            .with_code("E42")
            .with_status("422")
            .with_detail("name is required");

        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"title":"Invalid","detail":"name is required","status":"422","code":"E42"}"#
        );
    }

    #[test]
    fn test_empty_members_are_unset() {
        let err = ErrorObject::new("Oops").with_detail("").with_code("");
        assert_eq!(err.detail(), None);
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_from_crate_error() {
        let err = ErrorObject::from(Error::custom("disk full"));

        assert_eq!(err.title(), "Internal error");
        assert_eq!(err.detail(), Some("Error: disk full"));
        assert_eq!(err.status(), Some("500"));
        assert_eq!(err.code(), Some("internal_error"));
    }
}
