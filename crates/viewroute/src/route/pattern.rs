//! Segment classification for view paths
//!
//! Pure parsing of a single path segment into a typed segment.
//! Same input, same output, no side effects.

/// A single segment of a view path
///
/// # Examples
///
/// ```
/// use viewroute::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("about"), PatternSegment::Static("about"));
/// assert_eq!(classify_segment("[id]"), PatternSegment::Param("id"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Dynamic segment: `[name]` → `:name`
    Param(&'a str),
    /// Literal segment, matched as-is
    Static(&'a str),
}

impl PatternSegment<'_> {
    /// Appends `/segment` (or `/:name`) to a pattern under construction
    pub fn write_to(&self, pattern: &mut String) {
        match self {
            PatternSegment::Param(name) => {
                pattern.push_str("/:");
                pattern.push_str(name);
            }
            PatternSegment::Static(text) => {
                pattern.push('/');
                pattern.push_str(text);
            }
        }
    }
}

/// Classifies a segment (pure function)
///
/// A segment is dynamic only when the brackets wrap the whole segment. The
/// text between them becomes the parameter name verbatim; it is not checked
/// for identifier characters, so `[...slug]` yields the name `...slug`.
///
/// # Examples
///
/// ```
/// use viewroute::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("[orgId]"), PatternSegment::Param("orgId"));
/// assert_eq!(classify_segment("user-[id]"), PatternSegment::Static("user-[id]"));
/// ```
pub fn classify_segment(segment: &str) -> PatternSegment<'_> {
    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(name) => PatternSegment::Param(name),
        None => PatternSegment::Static(segment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(classify_segment("about"), PatternSegment::Static("about"));
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment("[id]"), PatternSegment::Param("id"));
    }

    #[test]
    fn test_classify_param_name_is_verbatim() {
        assert_eq!(classify_segment("[...slug]"), PatternSegment::Param("...slug"));
        assert_eq!(classify_segment("[user id]"), PatternSegment::Param("user id"));
        assert_eq!(classify_segment("[]"), PatternSegment::Param(""));
    }

    #[test]
    fn test_classify_partial_brackets_are_static() {
        assert_eq!(classify_segment("[id"), PatternSegment::Static("[id"));
        assert_eq!(classify_segment("id]"), PatternSegment::Static("id]"));
        assert_eq!(classify_segment("a[id]"), PatternSegment::Static("a[id]"));
        assert_eq!(classify_segment("["), PatternSegment::Static("["));
    }

    #[test]
    fn test_write_to() {
        let mut pattern = String::new();
        classify_segment("users").write_to(&mut pattern);
        classify_segment("[id]").write_to(&mut pattern);
        assert_eq!(pattern, "/users/:id");
    }
}
