//! # viewroute
//!
//! Derives a client-side route table from the view files of a single-page
//! application, instead of registering each route by hand:
//! - Static views (`about/team.vue` → `/about/team`)
//! - Index views (`index.vue` → `/`, `blog/index.vue` → `/blog`)
//! - Dynamic segments (`users/[id].vue` → `/users/:id`), at any depth
//!
//! The resolver is a pure function of its input. It does not walk the file
//! system; a discovery step hands it `(path, module)` pairs in a stable order
//! and that order becomes the table order, so a first-match router resolves
//! the same way build after build.
//!
//! ## Example
//!
//! ```
//! use viewroute::{derive_routes, ResolverConfig};
//!
//! let config = ResolverConfig::new("src/views", "vue");
//! let table = derive_routes(
//!     &config,
//!     [
//!         ("src/views/index.vue", "home"),
//!         ("src/views/users/[id].vue", "user"),
//!     ],
//! )
//! .unwrap();
//!
//! let patterns: Vec<&str> = table.iter().map(|r| r.pattern.as_str()).collect();
//! assert_eq!(patterns, vec!["/", "/users/:id"]);
//! assert_eq!(table.get("users/[id]").unwrap().module, "user");
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
mod module;
pub mod route;
mod table;

pub use config::{DuplicatePolicy, ResolverConfig};
pub use error::{Result, RouteError};
pub use module::ViewModule;
pub use route::{classify_segment, parse_pattern, view_stem, ParsedPattern, PatternSegment};
pub use table::{PatternCollision, RouteDefinition, RouteTable};

// ============================================================================
// Core Types
// ============================================================================

/// One view file handed over by the discovery step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredView<M> {
    /// Slash-separated path, starting with the views root and ending in the
    /// view extension
    pub relative_path: String,
    /// Opaque module reference
    pub module: M,
}

impl<M> DiscoveredView<M> {
    pub fn new(relative_path: impl Into<String>, module: M) -> Self {
        Self {
            relative_path: relative_path.into(),
            module,
        }
    }
}

impl<K: Into<String>, M> From<(K, M)> for DiscoveredView<M> {
    fn from((relative_path, module): (K, M)) -> Self {
        Self::new(relative_path, module)
    }
}

/// Anything `derive_routes` accepts as one input entry
///
/// Implemented for `DiscoveredView` itself and for `(path, module)` pairs,
/// so a map or a vector of pairs can be handed over directly.
pub trait IntoView {
    type Module;

    fn into_view(self) -> DiscoveredView<Self::Module>;
}

impl<M> IntoView for DiscoveredView<M> {
    type Module = M;

    fn into_view(self) -> DiscoveredView<M> {
        self
    }
}

impl<K: Into<String>, M> IntoView for (K, M) {
    type Module = M;

    fn into_view(self) -> DiscoveredView<M> {
        self.into()
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Derives the route table from discovered views
///
/// Produces exactly one route per view, in input order. Names are unique
/// whenever the input paths are. Routes that share a pattern are all kept;
/// `config.duplicates` decides whether that is silent, logged, or an error.
///
/// # Errors
///
/// Fails on the first path outside the views root, without the view
/// extension, or with an empty stem, and on a pattern collision under
/// `DuplicatePolicy::Deny`.
///
/// # Examples
///
/// ```
/// use viewroute::{derive_routes, DuplicatePolicy, ResolverConfig, RouteError};
///
/// let views = [("views/a.vue", ()), ("views/a/index.vue", ())];
///
/// let config = ResolverConfig::new("views", "vue");
/// assert_eq!(derive_routes(&config, views.clone()).unwrap().len(), 2);
///
/// let strict = config.with_duplicates(DuplicatePolicy::Deny);
/// assert!(matches!(
///     derive_routes(&strict, views),
///     Err(RouteError::DuplicatePattern { .. })
/// ));
/// ```
pub fn derive_routes<I>(
    config: &ResolverConfig,
    views: I,
) -> Result<RouteTable<<I::Item as IntoView>::Module>>
where
    I: IntoIterator,
    I::Item: IntoView,
{
    let views = views.into_iter();
    let mut routes: Vec<RouteDefinition<<I::Item as IntoView>::Module>> =
        Vec::with_capacity(views.size_hint().0);
    let mut claimed: HashMap<String, usize> = HashMap::new();

    for view in views {
        let route = RouteDefinition::from_view(view.into_view(), config)?;
        debug!(pattern = %route.pattern, name = %route.name, "derived route");

        match claimed.get(&route.pattern) {
            Some(&first) => {
                let first = &routes[first].name;
                match config.duplicates {
                    DuplicatePolicy::Allow => {}
                    DuplicatePolicy::Warn => warn!(
                        pattern = %route.pattern,
                        first = %first,
                        shadowed = %route.name,
                        "route pattern derived twice; the first entry wins"
                    ),
                    DuplicatePolicy::Deny => {
                        return Err(RouteError::DuplicatePattern {
                            pattern: route.pattern,
                            first: first.clone(),
                            second: route.name,
                        })
                    }
                }
            }
            None => {
                claimed.insert(route.pattern.clone(), routes.len());
            }
        }

        routes.push(route);
    }

    Ok(RouteTable::new(routes))
}
