//! Percent-encoding of search queries for URL templates.
//!
//! Queries are substituted into both query strings and path segments, so
//! every byte outside `A-Z a-z 0-9 * - . _` is escaped and spaces become
//! `%20` rather than `+`.

use url::form_urlencoded;

/// Percent-encodes `input` for use inside a URL component.
///
/// Valid for any UTF-8 input: multi-byte characters are escaped byte by byte.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_component("cube box"), "cube%20box");
/// assert_eq!(encode_component("a&b=c+d"), "a%26b%3Dc%2Bd");
/// ```
pub fn encode_component(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect()
}

/// Inverse of [`encode_component`], for output of `encode_component` only.
///
/// Raw `&` or `=` in the input are treated as pair separators.
#[cfg(test)]
pub(crate) fn decode_component(input: &str) -> String {
    form_urlencoded::parse(input.as_bytes())
        .next()
        .map(|(key, value)| {
            if value.is_empty() {
                key.into_owned()
            } else {
                format!("{key}={value}")
            }
        })
        .unwrap_or_default()
}
