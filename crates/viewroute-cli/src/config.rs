// File: src/config.rs
// Purpose: Configuration parsing from viewroute.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use viewroute::ResolverConfig;

pub const CONFIG_FILE: &str = "viewroute.toml";

/// Project configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routes: ResolverConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Discovery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Glob patterns, relative to the views root, a file must match
    /// (default: every file with the view extension)
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns, relative to the views root, that drop a file
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to follow symlinked directories
    #[serde(default)]
    pub follow_links: bool,
}

impl DiscoveryConfig {
    /// Include patterns, falling back to `**/*.<extension>`
    pub fn include_patterns(&self, routes: &ResolverConfig) -> Vec<String> {
        if self.include.is_empty() {
            vec![format!("**/*{}", routes.extension_suffix())]
        } else {
            self.include.clone()
        }
    }
}

impl Config {
    /// Load configuration from a viewroute.toml
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
