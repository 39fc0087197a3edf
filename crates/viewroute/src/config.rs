// File: src/config.rs
// Purpose: Resolver configuration (views root, extension, index marker, collision policy)

use serde::{Deserialize, Serialize};

/// What to do when two view files derive the same route pattern
///
/// Both entries are always kept in the table; the policy only decides
/// whether the collision is silent, logged, or fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Emit both routes without comment; the router's first match wins
    Allow,
    /// Emit both routes and log a warning per collision
    #[default]
    Warn,
    /// Fail the derivation with `RouteError::DuplicatePattern`
    Deny,
}

/// Resolver configuration
///
/// Deserializes from the `[routes]` table of `viewroute.toml`:
///
/// ```toml
/// [routes]
/// root = "src/views"
/// extension = "vue"
/// index = "index"
/// duplicates = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Views root every discovered path starts with (default: "src/views")
    #[serde(default = "default_root")]
    pub root: String,

    /// View file extension, with or without the leading dot (default: "vue")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File stem that stands for its directory (default: "index")
    #[serde(default = "default_index")]
    pub index: String,

    /// Collision handling for identical patterns (default: warn)
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

fn default_root() -> String {
    "src/views".to_string()
}

fn default_extension() -> String {
    "vue".to_string()
}

fn default_index() -> String {
    "index".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            index: default_index(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl ResolverConfig {
    /// Creates a config for the given root and extension with the default
    /// index marker and collision policy
    ///
    /// # Examples
    ///
    /// ```
    /// use viewroute::ResolverConfig;
    ///
    /// let config = ResolverConfig::new("../views", ".vue");
    /// assert_eq!(config.root_prefix(), "../views/");
    /// assert_eq!(config.extension_suffix(), ".vue");
    /// ```
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
            ..Self::default()
        }
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Prefix stripped from every discovered path
    ///
    /// Always ends in `/` unless the root is empty, in which case paths are
    /// taken to be root-relative already.
    pub fn root_prefix(&self) -> String {
        let root = self.root.trim_end_matches('/');
        if root.is_empty() {
            String::new()
        } else {
            format!("{root}/")
        }
    }

    /// Suffix stripped from every discovered path, leading dot included
    pub fn extension_suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }

    /// Extension without its leading dot
    pub fn bare_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.root, "src/views");
        assert_eq!(config.extension, "vue");
        assert_eq!(config.index, "index");
        assert_eq!(config.duplicates, DuplicatePolicy::Warn);
    }

    #[test]
    fn test_root_prefix_normalizes_trailing_slash() {
        assert_eq!(ResolverConfig::new("views", "vue").root_prefix(), "views/");
        assert_eq!(ResolverConfig::new("views/", "vue").root_prefix(), "views/");
        assert_eq!(ResolverConfig::new("", "vue").root_prefix(), "");
    }

    #[test]
    fn test_extension_with_or_without_dot() {
        assert_eq!(ResolverConfig::new("v", "vue").extension_suffix(), ".vue");
        assert_eq!(ResolverConfig::new("v", ".vue").extension_suffix(), ".vue");
        assert_eq!(ResolverConfig::new("v", ".vue").bare_extension(), "vue");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ResolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_custom_toml() {
        let toml = r#"
            root = "../views"
            extension = ".vue"
            index = "home"
            duplicates = "deny"
        "#;
        let config: ResolverConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.root_prefix(), "../views/");
        assert_eq!(config.index, "home");
        assert_eq!(config.duplicates, DuplicatePolicy::Deny);
    }
}
