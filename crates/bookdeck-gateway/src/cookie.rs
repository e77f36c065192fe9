#![forbid(unsafe_code)]

//! Cookie header parsing.
//!
//! The CSRF token travels in a cookie; this is the one place that knows
//! how to pick a value out of a `Cookie:` header string.

/// Find the value of `name` in a `Cookie:` header value.
///
/// Pairs are `name=value` separated by `;`. The first match wins; names
/// are compared exactly. Malformed pairs (no `=`) are skipped.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}
