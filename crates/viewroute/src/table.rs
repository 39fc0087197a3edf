// File: src/table.rs
// Purpose: Route definitions and the immutable, ordered route table

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::route::{parse_pattern, view_stem};
use crate::DiscoveredView;

/// A single entry of the route table
///
/// ```
/// use viewroute::{DiscoveredView, ResolverConfig, RouteDefinition};
///
/// let config = ResolverConfig::new("src/views", "vue");
/// let view = DiscoveredView::new("src/views/users/[id].vue", ());
/// let route = RouteDefinition::from_view(view, &config).unwrap();
///
/// assert_eq!(route.pattern, "/users/:id");
/// assert_eq!(route.name, "users/[id]");
/// assert_eq!(route.params, vec!["id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDefinition<M> {
    /// URL pattern like "/users/:id"
    pub pattern: String,
    /// Root-relative, extension-stripped source path; unique per table
    pub name: String,
    /// Placeholder names in the order they appear in `pattern`
    pub params: Vec<String>,
    /// Module reference, forwarded untouched
    pub module: M,
}

impl<M> RouteDefinition<M> {
    /// Resolves one discovered view into its route
    ///
    /// The name is taken after root and extension stripping only, so index
    /// collapsing and bracket rewriting never make two names collide.
    pub fn from_view(view: DiscoveredView<M>, config: &ResolverConfig) -> Result<Self> {
        let stem = view_stem(&view.relative_path, config)?;
        let parsed = parse_pattern(stem, &config.index);

        Ok(RouteDefinition {
            pattern: parsed.pattern,
            name: stem.to_string(),
            params: parsed.params,
            module: view.module,
        })
    }

    /// Whether the pattern contains no placeholders
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }
}

/// Two distinct views that derive the same pattern
///
/// `first` is the name of the earlier entry, which a first-match router will
/// serve; `second` is the entry it shadows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCollision {
    pub pattern: String,
    pub first: String,
    pub second: String,
}

/// Ordered, immutable route table
///
/// Order is the discovery order; nothing is re-sorted. The table exposes no
/// mutators once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable<M> {
    routes: Vec<RouteDefinition<M>>,
}

impl<M> RouteTable<M> {
    pub(crate) fn new(routes: Vec<RouteDefinition<M>>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition<M>> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[RouteDefinition<M>] {
        &self.routes
    }

    pub fn into_vec(self) -> Vec<RouteDefinition<M>> {
        self.routes
    }

    /// Looks up a route by its unique name
    ///
    /// ```
    /// use viewroute::{derive_routes, ResolverConfig};
    ///
    /// let config = ResolverConfig::new("views", "vue");
    /// let table = derive_routes(&config, [("views/blog/index.vue", 1)]).unwrap();
    ///
    /// assert_eq!(table.get("blog/index").map(|r| r.pattern.as_str()), Some("/blog"));
    /// assert!(table.get("blog").is_none());
    /// ```
    pub fn get(&self, name: &str) -> Option<&RouteDefinition<M>> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Every pair of entries sharing a pattern, in table order
    ///
    /// Each later duplicate is reported against the first entry that claimed
    /// the pattern.
    pub fn collisions(&self) -> Vec<PatternCollision> {
        let mut first_by_pattern: HashMap<&str, &str> = HashMap::new();
        let mut collisions = Vec::new();

        for route in &self.routes {
            match first_by_pattern.get(route.pattern.as_str()) {
                Some(first) => collisions.push(PatternCollision {
                    pattern: route.pattern.clone(),
                    first: first.to_string(),
                    second: route.name.clone(),
                }),
                None => {
                    first_by_pattern.insert(&route.pattern, &route.name);
                }
            }
        }

        collisions
    }
}

impl<M> IntoIterator for RouteTable<M> {
    type Item = RouteDefinition<M>;
    type IntoIter = std::vec::IntoIter<RouteDefinition<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a RouteTable<M> {
    type Item = &'a RouteDefinition<M>;
    type IntoIter = std::slice::Iter<'a, RouteDefinition<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Plain-text dump of the table, one aligned row per route
///
/// ```text
/// #  pattern     name        params
/// 0  /           index
/// 1  /users/:id  users/[id]  id
/// ```
impl<M> fmt::Display for RouteTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 4]> = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| {
                [
                    i.to_string(),
                    route.pattern.clone(),
                    route.name.clone(),
                    route.params.join(", "),
                ]
            })
            .collect();

        let header = ["#", "pattern", "name", "params"].map(str::to_string);
        // `{:<width$}` pads by chars, so widths are counted in chars too
        let mut widths = header.clone().map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for row in std::iter::once(&header).chain(&rows) {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
