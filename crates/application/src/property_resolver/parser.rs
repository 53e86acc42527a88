//! Placeholder scanner for `${key}` syntax
//!
//! The scanner is deliberately simple: a placeholder starts at `${` and ends
//! at the first `}` after it. There is no nesting and no escaping.

use std::ops::Range;

/// The two-character marker that opens a placeholder.
pub const PLACEHOLDER_OPEN: &str = "${";

/// The character that closes a placeholder.
pub const PLACEHOLDER_CLOSE: char = '}';

/// The next piece of a value, as seen by a left-to-right scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// No `${` remains; the whole input is plain text.
    Text(&'a str),

    /// A `${` with no closing brace after it.
    Unterminated {
        /// Text before the marker.
        prefix: &'a str,
        /// Everything from the marker to the end, marker included.
        rest: &'a str,
    },

    /// A complete `${key}` placeholder.
    Placeholder {
        /// Text before the marker.
        prefix: &'a str,
        /// The placeholder body between `${` and `}`.
        key: &'a str,
        /// Text after the closing brace.
        suffix: &'a str,
    },
}

/// Splits `input` at its first placeholder.
///
/// # Examples
///
/// ```
/// use endpoints_application::property_resolver::parser::{Segment, next_segment};
///
/// assert_eq!(
///     next_segment("https://${host}/api"),
///     Segment::Placeholder { prefix: "https://", key: "host", suffix: "/api" }
/// );
/// assert_eq!(
///     next_segment("prefix${B"),
///     Segment::Unterminated { prefix: "prefix", rest: "${B" }
/// );
/// ```
#[must_use]
pub fn next_segment(input: &str) -> Segment<'_> {
    let Some(open) = input.find(PLACEHOLDER_OPEN) else {
        return Segment::Text(input);
    };

    let prefix = &input[..open];
    let body_start = open + PLACEHOLDER_OPEN.len();

    match input[body_start..].find(PLACEHOLDER_CLOSE) {
        Some(len) => Segment::Placeholder {
            prefix,
            key: &input[body_start..body_start + len],
            suffix: &input[body_start + len + PLACEHOLDER_CLOSE.len_utf8()..],
        },
        None => Segment::Unterminated {
            prefix,
            rest: &input[open..],
        },
    }
}

/// A placeholder found in a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderReference {
    /// The key named by the placeholder.
    pub key: String,

    /// Byte range of the whole `${key}` in the scanned string.
    pub span: Range<usize>,
}

/// Lists the placeholders directly present in `input`, without expanding them.
///
/// Scanning stops at the first unterminated `${`.
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<PlaceholderReference> {
    let mut references = Vec::new();
    let mut offset = 0;

    while let Segment::Placeholder { prefix, key, suffix } = next_segment(&input[offset..]) {
        let start = offset + prefix.len();
        let end = input.len() - suffix.len();
        references.push(PlaceholderReference {
            key: key.to_string(),
            span: start..end,
        });
        offset = end;
    }

    references
}

/// Extracts just the keys named by the placeholders in `input`.
#[must_use]
pub fn extract_placeholder_keys(input: &str) -> Vec<String> {
    parse_placeholders(input).into_iter().map(|r| r.key).collect()
}
