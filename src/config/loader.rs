//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::LinterConfig;
use crate::error::{LintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name.
pub const PROJECT_CONFIG: &str = ".glsl-lint.yml";

/// Local, uncommitted override file name.
pub const LOCAL_CONFIG: &str = ".glsl-lint.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`<config dir>/glsl-lint/config.yml`)
/// 2. Project config (`.glsl-lint.yml`)
/// 3. Local overrides (`.glsl-lint.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config.
    pub user_global: Option<PathBuf>,

    /// Project config: .glsl-lint.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .glsl-lint.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: existing(project_root.join(PROJECT_CONFIG)),
            project_local: existing(project_root.join(LOCAL_CONFIG)),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        existing(dirs::config_dir()?.join("glsl-lint").join("config.yml"))
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.glsl-lint.yml` file first, then a `.git` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_CONFIG).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintError::Io(e)
        }
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LinterConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a [`LinterConfig`].
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LinterConfig> {
    if content.trim().is_empty() {
        return Ok(LinterConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    serde_yaml::from_str(&content).map_err(|e| LintError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all discovered config files for a project.
///
/// Having no config file at all is not an error: the default
/// configuration is returned and the missing validator path is reported
/// when a lint run starts.
pub fn load_merged_config(project_root: &Path) -> Result<LinterConfig> {
    let paths = ConfigPaths::discover(project_root);
    load_layers(&paths.all_existing(), project_root)
}

fn load_layers(paths: &[&PathBuf], project_root: &Path) -> Result<LinterConfig> {
    let mut configs = Vec::new();
    for path in paths {
        tracing::debug!(path = %path.display(), "loading config layer");
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| LintError::ConfigParseError {
        path: project_root.join(PROJECT_CONFIG),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LinterConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
