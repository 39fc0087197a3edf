//! View path parsing
//!
//! Pure functions that turn a discovered view path into a route name and a
//! route pattern. Nothing here touches the file system.

use crate::config::ResolverConfig;
use crate::error::{Result, RouteError};

use super::pattern::classify_segment;

/// Accumulator for the fold over path segments
#[derive(Default)]
struct ParseState {
    pattern: String,
    params: Vec<String>,
}

impl ParseState {
    fn with_segment(mut self, segment: &str) -> Self {
        let segment = classify_segment(segment);
        segment.write_to(&mut self.pattern);
        if let super::PatternSegment::Param(name) = segment {
            self.params.push(name.to_string());
        }
        self
    }

    /// Root index collapses to the empty path, which is served as `/`
    fn finalize(mut self) -> ParsedPattern {
        if self.pattern.is_empty() {
            self.pattern.push('/');
        }
        ParsedPattern {
            pattern: self.pattern,
            params: self.params,
        }
    }
}

/// Pattern and placeholder names derived from a view stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub pattern: String,
    pub params: Vec<String>,
}

/// Strips the views root and the extension from a discovered path
///
/// The returned stem is what the route is named after: `src/views/users/[id].vue`
/// becomes `users/[id]`.
///
/// # Errors
///
/// - `OutsideRoot` when the path does not start with `<root>/`
/// - `MissingExtension` when it does not end with `.<extension>`
/// - `EmptyStem` when no file name is left, e.g. `src/views/.vue`
///
/// # Examples
///
/// ```
/// use viewroute::route::parser::view_stem;
/// use viewroute::ResolverConfig;
///
/// let config = ResolverConfig::new("src/views", "vue");
/// assert_eq!(view_stem("src/views/blog/index.vue", &config).unwrap(), "blog/index");
/// assert!(view_stem("src/components/Nav.vue", &config).is_err());
/// ```
pub fn view_stem<'a>(path: &'a str, config: &ResolverConfig) -> Result<&'a str> {
    let root_prefix = config.root_prefix();
    let relative = path
        .strip_prefix(root_prefix.as_str())
        .ok_or_else(|| RouteError::OutsideRoot {
            path: path.to_string(),
            root: config.root.clone(),
        })?;

    let stem = relative
        .strip_suffix(config.extension_suffix().as_str())
        .ok_or_else(|| RouteError::MissingExtension {
            path: path.to_string(),
            extension: config.bare_extension().to_string(),
        })?;

    if stem.is_empty() || stem.ends_with('/') {
        return Err(RouteError::EmptyStem {
            path: path.to_string(),
        });
    }

    Ok(stem)
}

/// Parses a view stem into a route pattern (pure function)
///
/// 1. A final segment equal to `index` (exact, case-sensitive) is dropped
/// 2. Every `[name]` segment becomes `:name`, left to right
/// 3. The result is rooted at `/`; an empty result is exactly `/`
///
/// Empty segments are skipped so the pattern never contains `//`.
///
/// # Examples
///
/// ```
/// use viewroute::route::parser::parse_pattern;
///
/// assert_eq!(parse_pattern("index", "index").pattern, "/");
/// assert_eq!(parse_pattern("blog/index", "index").pattern, "/blog");
///
/// let parsed = parse_pattern("orgs/[orgId]/projects/[projectId]", "index");
/// assert_eq!(parsed.pattern, "/orgs/:orgId/projects/:projectId");
/// assert_eq!(parsed.params, vec!["orgId", "projectId"]);
/// ```
pub fn parse_pattern(stem: &str, index: &str) -> ParsedPattern {
    let segments: Vec<&str> = stem.split('/').collect();
    let segments = match segments.split_last() {
        Some((last, parents)) if *last == index => parents,
        _ => &segments[..],
    };

    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .fold(ParseState::default(), |state, segment| {
            state.with_segment(segment)
        })
        .finalize()
}
