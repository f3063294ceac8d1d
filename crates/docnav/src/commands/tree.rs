//! `docnav tree` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_tree::build_site_tree;

use super::tree_options;
use crate::error::CliError;
use crate::items::{load_items, print_json};

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation item list, JSON or YAML (overrides config).
    #[arg(short, long, env = "DOCNAV_ITEMS")]
    input: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            items: self.input,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let items = load_items(&config.paths.items)?;
        let tree = build_site_tree(&items, &tree_options(&config))?;

        print_json(&tree)
    }
}
