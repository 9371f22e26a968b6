//! Namespace matching for the debug filter
//!
//! Logger ids and the `DEBUG` filter share one shape: a colon-delimited path
//! such as `main:sub:cache`. The filter enables a logger when its segments
//! are a prefix of the logger's segments. Empty segments (doubled, leading
//! or trailing colons) are dropped on both sides before comparing.

/// Split a namespace path into its non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(':').filter(|s| !s.is_empty())
}

/// Check whether `identifier` falls under the namespace `filter`.
///
/// An empty filter, or one made only of colons, matches nothing.
///
/// ```rust
/// use ohmyconsole_core::matches;
///
/// assert!(matches("main", "main:sub"));
/// assert!(!matches("main:sub", "main"));
/// assert!(!matches(":", "anything"));
/// ```
pub fn matches(filter: &str, identifier: &str) -> bool {
    let mut filter_segments = segments(filter).peekable();
    if filter_segments.peek().is_none() {
        return false;
    }

    let mut id_segments = segments(identifier);
    filter_segments.all(|wanted| id_segments.next() == Some(wanted))
}
