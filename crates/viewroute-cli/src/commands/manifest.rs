use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use viewroute::RouteTable;

use super::{load_table, Context};
use crate::discovery::ViewSource;
use crate::ManifestFormat;

/// TOML needs a table at the top level, so routes go under `[[routes]]`
#[derive(Serialize)]
struct TomlManifest<'a> {
    routes: &'a RouteTable<ViewSource>,
}

pub fn execute(ctx: &Context, output: Option<&Path>, format: ManifestFormat) -> Result<()> {
    let table = load_table(ctx)?;
    let manifest = render(&table, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &manifest)
                .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
            eprintln!(
                "{} Wrote {} routes to {}",
                "✓".green(),
                table.len(),
                path.display().to_string().bold()
            );
        }
        None => print!("{manifest}"),
    }

    Ok(())
}

/// Serializes the table in table order
pub fn render(table: &RouteTable<ViewSource>, format: ManifestFormat) -> Result<String> {
    let mut manifest = match format {
        ManifestFormat::Json => {
            serde_json::to_string_pretty(table).context("Failed to serialize JSON manifest")?
        }
        ManifestFormat::Toml => toml::to_string_pretty(&TomlManifest { routes: table })
            .context("Failed to serialize TOML manifest")?,
    };
    if !manifest.ends_with('\n') {
        manifest.push('\n');
    }
    Ok(manifest)
}
