//! CLI error types.

use std::path::PathBuf;

use docnav_config::ConfigError;
use docnav_tree::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Navigation(#[from] NavError),

    #[error("Failed to parse items from {}: {message}", .path.display())]
    Items { path: PathBuf, message: String },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
