//! Escaping for element text and double-quoted attribute values.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` for use as element text.
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape `&`, `<`, `>` and `"` for use inside a double-quoted attribute.
pub fn attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
