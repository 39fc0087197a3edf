use anyhow::Result;
use colored::Colorize;
use viewroute::RouteTable;

use super::{load_table, Context};
use crate::discovery::ViewSource;

pub fn execute(ctx: &Context) -> Result<()> {
    let table = load_table(ctx)?;

    println!("{}", "Route table".green().bold());
    println!();

    if table.is_empty() {
        println!(
            "  {} No views found under {}",
            "ℹ".cyan(),
            ctx.config.routes.root.bold()
        );
        return Ok(());
    }

    for line in render_rows(&table) {
        println!("  {line}");
    }

    let collisions = table.collisions();
    if !collisions.is_empty() {
        println!();
        for collision in &collisions {
            println!(
                "  {} {} is derived by {} and {}; {} wins",
                "⚠".yellow(),
                collision.pattern.cyan(),
                collision.first.bold(),
                collision.second.bold(),
                collision.first
            );
        }
    }

    println!();
    println!(
        "{} {} routes, {} collisions",
        "✓".green(),
        table.len(),
        collisions.len()
    );

    Ok(())
}

/// Aligned, colored rows: pattern, name, params, module
///
/// Padding is computed on the plain text so ANSI codes never skew columns.
fn render_rows(table: &RouteTable<ViewSource>) -> Vec<String> {
    let width = |cell: &str| cell.chars().count();
    let pattern_width = table.iter().map(|r| width(r.pattern.as_str())).max().unwrap_or(0);
    let name_width = table.iter().map(|r| width(r.name.as_str())).max().unwrap_or(0);
    let params: Vec<String> = table.iter().map(|r| r.params.join(", ")).collect();
    let params_width = params.iter().map(|p| width(p.as_str())).max().unwrap_or(0);

    table
        .iter()
        .zip(&params)
        .map(|(route, params)| {
            format!(
                "{}  {}  {}  {}",
                format!("{:<pattern_width$}", route.pattern).cyan(),
                format!("{:<name_width$}", route.name),
                format!("{params:<params_width$}").yellow(),
                route.module.relative.dimmed()
            )
        })
        .collect()
}
