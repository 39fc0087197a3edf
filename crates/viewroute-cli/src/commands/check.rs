use anyhow::{bail, Result};
use colored::Colorize;
use tracing::error;
use viewroute::{DuplicatePolicy, RouteTable, ViewModule};

use super::{load_table, Context};
use crate::discovery::ViewSource;

pub fn execute(ctx: &Context, strict: bool, resolve: bool) -> Result<()> {
    let mut config = ctx.config.clone();
    if strict {
        config.routes.duplicates = DuplicatePolicy::Deny;
    }
    let ctx = Context {
        project: ctx.project.clone(),
        config,
    };

    println!("{}", "Checking views...".green().bold());

    let table = load_table(&ctx)?;
    println!("  {} {} routes derived", "✓".green(), table.len());

    for collision in table.collisions() {
        println!(
            "  {} {} shadowed by {} at {}",
            "⚠".yellow(),
            collision.second.bold(),
            collision.first.bold(),
            collision.pattern.cyan()
        );
    }

    if resolve {
        let failures = resolve_all(&table);
        if !failures.is_empty() {
            bail!("{} view modules failed to load", failures.len());
        }
        println!("  {} all view modules load", "✓".green());
    }

    println!("{}", "Views OK".green().bold());
    Ok(())
}

/// Resolves every module once, returning the names that failed
fn resolve_all(table: &RouteTable<ViewSource>) -> Vec<String> {
    table
        .iter()
        .filter_map(|route| match route.module.resolve() {
            Ok(_) => None,
            Err(e) => {
                error!(name = %route.name, file = %route.module.path.display(), "failed to load view: {e}");
                Some(route.name.clone())
            }
        })
        .collect()
}
