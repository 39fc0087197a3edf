// File: src/discovery.rs
// Purpose: Walks the views root and pairs each view file with a module reference

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use serde::{Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use viewroute::{DiscoveredView, ViewModule};
use walkdir::WalkDir;

use crate::config::Config;

/// A view file on disk, loaded only when resolved
///
/// Serializes as its project-relative path, which is what a router
/// manifest points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSource {
    /// Forward-slash path relative to the project directory
    pub relative: String,
    /// Location on disk
    pub path: PathBuf,
}

impl ViewSource {
    pub fn new(relative: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            relative: relative.into(),
            path: path.into(),
        }
    }
}

impl ViewModule for ViewSource {
    type Component = String;
    type Error = std::io::Error;

    fn resolve(&self) -> Result<String, std::io::Error> {
        fs::read_to_string(&self.path)
    }
}

impl Serialize for ViewSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.relative)
    }
}

/// Include/exclude filter over root-relative paths
struct ViewFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: {p}")))
        .collect()
}

impl ViewFilter {
    fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            include: compile(&config.discovery.include_patterns(&config.routes))?,
            exclude: compile(&config.discovery.exclude)?,
        })
    }

    fn accepts(&self, relative: &str) -> bool {
        self.include.iter().any(|p| p.matches_with(relative, MATCH_OPTIONS))
            && !self.exclude.iter().any(|p| p.matches_with(relative, MATCH_OPTIONS))
    }
}

/// Joins path components with `/` whatever the host separator is
///
/// `None` when a component is not valid UTF-8; keys are never lossy.
fn slash_path(path: &Path) -> Option<String> {
    path.components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .map(|segments| segments.join("/"))
}

/// Discovers view files under `<project>/<root>`
///
/// Directory entries are visited sorted by file name, so the returned order
/// (and therefore the route table order) is the same on every run over the
/// same tree. Keys start with the configured root, e.g.
/// `src/views/users/[id].vue`, ready for `viewroute::derive_routes`.
///
/// A missing views directory is not an error; it yields no views.
pub fn discover(project: &Path, config: &Config) -> Result<Vec<DiscoveredView<ViewSource>>> {
    let views_dir = project.join(&config.routes.root);
    if !views_dir.is_dir() {
        warn!(dir = %views_dir.display(), "views directory not found; no routes discovered");
        return Ok(Vec::new());
    }

    let filter = ViewFilter::new(config)?;
    let root_prefix = config.routes.root_prefix();
    let mut views = Vec::new();

    for entry in WalkDir::new(&views_dir)
        .follow_links(config.discovery.follow_links)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to walk views directory: {}", views_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let within_root = path
            .strip_prefix(&views_dir)
            .with_context(|| format!("{} escaped the views directory", path.display()))?;
        let within_root = slash_path(within_root)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;

        if !filter.accepts(&within_root) {
            debug!(file = %within_root, "skipped");
            continue;
        }

        let relative = format!("{root_prefix}{within_root}");
        debug!(file = %relative, "discovered view");
        views.push(DiscoveredView::new(
            relative.clone(),
            ViewSource::new(relative, path),
        ));
    }

    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("<template>{relative}</template>")).unwrap();
    }

    fn keys(views: &[DiscoveredView<ViewSource>]) -> Vec<&str> {
        views.iter().map(|v| v.relative_path.as_str()).collect()
    }

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in [
            "src/views/index.vue",
            "src/views/about/team.vue",
            "src/views/users/[id].vue",
            "src/views/users/index.vue",
            "src/views/blog/index.vue",
            "src/views/notes.md",
            "src/components/Nav.vue",
        ] {
            touch(dir.path(), file);
        }
        dir
    }

    #[test]
    fn test_discovers_views_sorted() {
        let dir = project();
        let views = discover(dir.path(), &Config::default()).unwrap();
        assert_eq!(
            keys(&views),
            vec![
                "src/views/about/team.vue",
                "src/views/blog/index.vue",
                "src/views/index.vue",
                "src/views/users/[id].vue",
                "src/views/users/index.vue",
            ]
        );
    }

    #[test]
    fn test_discovery_order_is_stable() {
        let dir = project();
        let first = discover(dir.path(), &Config::default()).unwrap();
        let second = discover(dir.path(), &Config::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = project();
        let mut config = Config::default();
        config.discovery.exclude = vec!["users/*".to_string()];
        let views = discover(dir.path(), &config).unwrap();
        assert_eq!(
            keys(&views),
            vec![
                "src/views/about/team.vue",
                "src/views/blog/index.vue",
                "src/views/index.vue",
            ]
        );
    }

    #[test]
    fn test_include_patterns_restrict_discovery() {
        let dir = project();
        let mut config = Config::default();
        config.discovery.include = vec!["**/index.vue".to_string()];
        let views = discover(dir.path(), &config).unwrap();
        assert_eq!(
            keys(&views),
            vec![
                "src/views/blog/index.vue",
                "src/views/index.vue",
                "src/views/users/index.vue",
            ]
        );
    }

    #[test]
    fn test_missing_views_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let views = discover(dir.path(), &Config::default()).unwrap();
        assert!(views.is_empty());
    }

    #[test]
    fn test_invalid_glob_is_reported() {
        let dir = project();
        let mut config = Config::default();
        config.discovery.exclude = vec!["[".to_string()];
        let err = discover(dir.path(), &config).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_names_are_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = project();
        let views_dir = dir.path().join("src/views");
        for name in [b"a\xff.vue", b"a\xfe.vue"] {
            fs::write(views_dir.join(OsStr::from_bytes(name)), "").unwrap();
        }

        let err = discover(dir.path(), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("is not valid UTF-8"));
    }

    #[test]
    fn test_slash_path_joins_components() {
        assert_eq!(
            slash_path(Path::new("users").join("[id].vue").as_path()).as_deref(),
            Some("users/[id].vue")
        );
    }

    #[test]
    fn test_view_source_resolves_lazily() {
        let dir = project();
        let views = discover(dir.path(), &Config::default()).unwrap();
        let team = &views[0].module;
        assert_eq!(team.relative, "src/views/about/team.vue");
        assert_eq!(
            team.resolve().unwrap(),
            "<template>src/views/about/team.vue</template>"
        );

        fs::remove_file(&team.path).unwrap();
        assert!(team.resolve().is_err());
    }

    #[test]
    fn test_view_source_serializes_as_path() {
        let source = ViewSource::new("src/views/index.vue", "/tmp/x/src/views/index.vue");
        assert_eq!(
            serde_json::to_string(&source).unwrap(),
            "\"src/views/index.vue\""
        );
    }
}
