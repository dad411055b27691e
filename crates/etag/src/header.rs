//! `If-Match` / `If-None-Match` header value parsing.

/// Split a header value into candidate tags.
///
/// Items are separated by commas with optional surrounding whitespace.
/// Empty items are dropped.
///
/// # Example
/// ```
/// use etag_core::parse_tag_list;
///
/// assert_eq!(parse_tag_list("\"a\" , W/\"b\",\"c\""), vec!["\"a\"", "W/\"b\"", "\"c\""]);
/// ```
pub fn parse_tag_list(header: &str) -> Vec<&str> {
    header
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Returns true if the header value is the `*` wildcard.
#[inline]
pub fn is_wildcard(header: &str) -> bool {
    header.trim() == "*"
}
