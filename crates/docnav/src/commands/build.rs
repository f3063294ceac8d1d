//! `docnav build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_tree::build_site_navigation;

use super::tree_options;
use crate::error::CliError;
use crate::items::{load_items, write_json};
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation item list, JSON or YAML (overrides config).
    #[arg(short, long, env = "DOCNAV_ITEMS")]
    input: Option<PathBuf>,

    /// Output file for the linked pages (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the navigation tree to this file (overrides config).
    #[arg(long)]
    tree_output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            items: self.input,
            posts: self.output,
            tree: self.tree_output,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!("Items: {}", config.paths.items.display()));

        let items = load_items(&config.paths.items)?;
        let navigation = build_site_navigation(&items, &tree_options(&config))?;

        write_json(&config.paths.posts, &navigation.posts)?;
        if let Some(tree_path) = &config.paths.tree {
            write_json(tree_path, &navigation.tree)?;
            output.info(&format!("Tree: {}", tree_path.display()));
        }

        output.success(&format!(
            "Wrote {} pages to {}",
            navigation.posts.len(),
            config.paths.posts.display()
        ));
        Ok(())
    }
}
