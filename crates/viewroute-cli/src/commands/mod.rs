pub mod check;
pub mod manifest;
pub mod routes;

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing::info;
use viewroute::{derive_routes, RouteTable};

use crate::config::Config;
use crate::discovery::{discover, ViewSource};

/// Everything a command needs: where the project is and how to read it
pub struct Context {
    pub project: PathBuf,
    pub config: Config,
}

/// Discovers the views and derives the route table once
pub fn load_table(ctx: &Context) -> Result<RouteTable<ViewSource>> {
    let views = discover(&ctx.project, &ctx.config)?;
    let table = derive_routes(&ctx.config.routes, views).context("Failed to derive routes")?;

    info!(
        routes = table.len(),
        root = %ctx.config.routes.root,
        "route table ready"
    );

    Ok(table)
}
