//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `input.items`
//! - `output.posts`
//! - `output.tree`
//! - `welcome.title`
//! - `welcome.slug`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the item list path.
    pub items: Option<PathBuf>,
    /// Override the posts output path.
    pub posts: Option<PathBuf>,
    /// Override the tree output path.
    pub tree: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input configuration (paths are relative strings from TOML).
    input: InputConfigRaw,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Welcome page configuration.
    pub welcome: WelcomeConfig,
    /// Specification section configuration.
    pub specification: SpecificationConfig,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw input configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    items: Option<String>,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    posts: Option<String>,
    tree: Option<String>,
}

/// Resolved input and output paths.
#[derive(Debug, Default)]
pub struct PathsConfig {
    /// Flat navigation item list (JSON or YAML).
    pub items: PathBuf,
    /// Linked page sequence output.
    pub posts: PathBuf,
    /// Navigation tree output, written only when set.
    pub tree: Option<PathBuf>,
}

/// Welcome page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WelcomeConfig {
    /// Title of the welcome root section.
    pub title: String,
    /// Slug of the welcome page.
    pub slug: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            title: "Welcome".to_owned(),
            slug: "/docs".to_owned(),
        }
    }
}

/// Specification section configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpecificationConfig {
    /// Root section holding the specification section.
    pub root_section: String,
    /// Section linked to its current stable version.
    pub section: String,
}

impl Default for SpecificationConfig {
    fn default() -> Self {
        Self {
            root_section: "reference".to_owned(),
            section: "specification".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`input.items`").
        field: String,
        /// Error message (e.g., "${`DOCS_ITEMS`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(items) = &settings.items {
            self.paths.items.clone_from(items);
        }
        if let Some(posts) = &settings.posts {
            self.paths.posts.clone_from(posts);
        }
        if let Some(tree) = &settings.tree {
            self.paths.tree = Some(tree.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            welcome: WelcomeConfig::default(),
            specification: SpecificationConfig::default(),
            paths: PathsConfig {
                items: base.join("docs-items.yaml"),
                posts: base.join("posts.json"),
                tree: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_welcome()?;
        require_non_empty(
            &self.specification.root_section,
            "specification.root_section",
        )?;
        require_non_empty(&self.specification.section, "specification.section")?;
        Ok(())
    }

    /// Validate welcome page configuration.
    fn validate_welcome(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.welcome.title, "welcome.title")?;
        require_non_empty(&self.welcome.slug, "welcome.slug")?;
        if !self.welcome.slug.starts_with('/') {
            return Err(ConfigError::Validation(
                "welcome.slug must start with /".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref items) = self.input.items {
            self.input.items = Some(expand::expand_env(items, "input.items")?);
        }
        if let Some(ref posts) = self.output.posts {
            self.output.posts = Some(expand::expand_env(posts, "output.posts")?);
        }
        if let Some(ref tree) = self.output.tree {
            self.output.tree = Some(expand::expand_env(tree, "output.tree")?);
        }

        self.welcome.title = expand::expand_env(&self.welcome.title, "welcome.title")?;
        self.welcome.slug = expand::expand_env(&self.welcome.slug, "welcome.slug")?;

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths = PathsConfig {
            items: resolve(self.input.items.as_deref(), "docs-items.yaml"),
            posts: resolve(self.output.posts.as_deref(), "posts.json"),
            tree: self.output.tree.as_deref().map(|tree| config_dir.join(tree)),
        };
    }
}
