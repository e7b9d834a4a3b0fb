/// Builds a [`Meta`](crate::Meta) from JSON-like key/value syntax.
///
/// The body is handed to [`serde_json::json!`] as a whole, so any value
/// expression it accepts works here too: negative numbers, arithmetic,
/// variables, nested objects and arrays. A repeated key keeps its first
/// position and takes the last value.
///
/// # Examples
///
/// ```rust
/// use serde_jsonapi::meta;
///
/// let page = 3;
/// let meta = meta!({
///     "vendor": "acme",
///     "page": { "size": 20, "number": page },
///     "offset": -1,
///     "tags": ["a", "b"]
/// });
///
/// assert_eq!(meta.len(), 4);
/// assert_eq!(meta.get("vendor").and_then(|v| v.as_str()), Some("acme"));
/// ```
#[macro_export]
macro_rules! meta {
    ({ $($body:tt)* }) => {
        $crate::__private::meta_from_value($crate::__private::json!({ $($body)* }))
    };
}
