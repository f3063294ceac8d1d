//! Reading navigation items and writing JSON results.
//!
//! Item lists are JSON (`.json`) or YAML (`.yaml`, `.yml`) arrays of
//! navigation items, chosen by file extension.

use std::io::Write;
use std::path::Path;

use docnav_tree::NavItem;
use serde::Serialize;

use crate::error::CliError;

/// Load navigation items from a JSON or YAML file.
pub(crate) fn load_items(path: &Path) -> Result<Vec<NavItem>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let items = parse_items(&content, path)?;
    tracing::info!(path = %path.display(), count = items.len(), "Loaded navigation items");
    Ok(items)
}

fn parse_items(content: &str, path: &Path) -> Result<Vec<NavItem>, CliError> {
    let parse_error = |message: String| CliError::Items {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        Some("yaml" | "yml") => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                return Ok(Vec::new());
            }
            serde_yaml::from_str(trimmed).map_err(|e| parse_error(e.to_string()))
        }
        _ => Err(CliError::Validation(format!(
            "Unsupported item file {}: expected .json, .yaml or .yml",
            path.display()
        ))),
    }
}

/// Write `value` as pretty JSON, creating parent directories as needed.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "Wrote output");
    Ok(())
}

/// Write `value` as pretty JSON to stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
