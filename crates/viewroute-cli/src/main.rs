mod commands;
mod config;
mod discovery;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use viewroute::DuplicatePolicy;

use crate::commands::Context;
use crate::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "viewroute")]
#[command(version, about = "viewroute - derive a route table from view files", long_about = None)]
struct Cli {
    /// Project directory the views root is relative to
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Config file (default: <project>/viewroute.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Views root, overriding the config file
    #[arg(long, global = true)]
    root: Option<String>,

    /// View file extension, overriding the config file
    #[arg(long, global = true)]
    extension: Option<String>,

    /// Collision policy, overriding the config file
    #[arg(long, global = true)]
    duplicates: Option<DuplicatesArg>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived route table
    Routes,

    /// Write the route table as a router manifest
    Manifest {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Manifest format
        #[arg(short, long, default_value = "json")]
        format: ManifestFormat,
    },

    /// Validate the views tree
    Check {
        /// Treat pattern collisions as errors
        #[arg(long)]
        strict: bool,

        /// Load every view module once
        #[arg(long)]
        resolve: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum ManifestFormat {
    Json,
    Toml,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DuplicatesArg {
    /// Keep both routes silently
    Allow,
    /// Keep both routes and log a warning
    Warn,
    /// Fail on the first collision
    Deny,
}

impl From<DuplicatesArg> for DuplicatePolicy {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::Allow => DuplicatePolicy::Allow,
            DuplicatesArg::Warn => DuplicatePolicy::Warn,
            DuplicatesArg::Deny => DuplicatePolicy::Deny,
        }
    }
}

impl Cli {
    fn log_level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    /// Config file values with command-line overrides applied
    fn load_config(&self) -> Result<Config> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| self.project.join(CONFIG_FILE));
        let mut config = Config::load(path)?;

        if let Some(root) = &self.root {
            config.routes.root = root.clone();
        }
        if let Some(extension) = &self.extension {
            config.routes.extension = extension.clone();
        }
        if let Some(duplicates) = self.duplicates {
            config.routes.duplicates = duplicates.into();
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let ctx = Context {
        config: cli.load_config()?,
        project: cli.project.clone(),
    };

    // Execute command
    match cli.command {
        Commands::Routes => {
            commands::routes::execute(&ctx)?;
        }
        Commands::Manifest { output, format } => {
            commands::manifest::execute(&ctx, output.as_deref(), format)?;
        }
        Commands::Check { strict, resolve } => {
            commands::check::execute(&ctx, strict, resolve)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("viewroute").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(parse(&["routes"]).log_level(), Level::INFO);
        assert_eq!(parse(&["-v", "routes"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-vv", "routes"]).log_level(), Level::TRACE);
        assert_eq!(parse(&["routes", "-q"]).log_level(), Level::ERROR);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["viewroute", "-q", "-v", "routes"]).is_err());
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().to_str().unwrap();

        let config = parse(&["-p", project, "routes"]).load_config().unwrap();
        assert_eq!(config.routes, viewroute::ResolverConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[routes]\nroot = \"pages\"\nextension = \"md\"\nduplicates = \"allow\"\n",
        )
        .unwrap();
        let project = dir.path().to_str().unwrap();

        let config = parse(&["-p", project, "routes"]).load_config().unwrap();
        assert_eq!(config.routes.root, "pages");
        assert_eq!(config.routes.extension, "md");
        assert_eq!(config.routes.duplicates, DuplicatePolicy::Allow);

        let config = parse(&[
            "-p",
            project,
            "check",
            "--root",
            "src/pages",
            "--extension",
            "svelte",
            "--duplicates",
            "deny",
        ])
        .load_config()
        .unwrap();
        assert_eq!(config.routes.root, "src/pages");
        assert_eq!(config.routes.extension, "svelte");
        assert_eq!(config.routes.duplicates, DuplicatePolicy::Deny);
        assert_eq!(config.routes.index, "index");
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[routes]\nindex = \"home\"\n").unwrap();

        let config = parse(&["-c", path.to_str().unwrap(), "routes"])
            .load_config()
            .unwrap();
        assert_eq!(config.routes.index, "home");
        assert_eq!(config.routes.root, "src/views");
    }
}
