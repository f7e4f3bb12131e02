//! Configuration management for `docnav.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[index]`      | Page index location                              |
//! | `[categories]` | Pathname route prefix -> category label mapping  |

mod error;

pub use error::ConfigError;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::{debug, log};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docnav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Page index settings
    pub index: IndexConfig,

    /// Pathname route prefix -> category label, e.g.
    /// `"/en/reference/errors/" = "Error Reference"`.
    ///
    /// Routes must start and end with `/`.
    pub categories: BTreeMap<String, String>,
}

/// Page index location settings (`[index]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Index file path (relative to the config file's directory)
    pub path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pages.json"),
        }
    }
}

impl NavConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. A missing file
    /// falls back to defaults with the current directory as root, so
    /// index-less operations (`query trim`) work without a project.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            debug!("config"; "no `{}` found, using defaults", cli.config.display());
            let mut config = Self::default();
            config.root = std::env::current_dir().unwrap_or_default();
            return Ok(config);
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        for route in self.categories.keys() {
            if !route.starts_with('/') || !route.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "category route `{route}` must start and end with `/`"
                )));
            }
        }
        Ok(())
    }

    /// Absolute path to the page index file.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index.path)
    }
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    // Show only filename (docnav.toml) since it's always at project root
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "ignoring unknown fields in {}:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found.
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}
