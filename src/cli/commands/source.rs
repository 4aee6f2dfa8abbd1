//! Configuration shared by the commands.

use std::path::{Path, PathBuf};

use crate::config::{load_config, LinterConfig};
use crate::error::{LintError, Result};
use crate::ui::UserInterface;

/// Where a command loads its configuration from, plus command-line
/// overrides applied on top.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    validator: Option<PathBuf>,
}

impl ConfigSource {
    /// Discover configuration from `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Default::default()
        }
    }

    /// Load exactly this config file instead of discovering layers.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Override the configured validator executable.
    pub fn with_validator(mut self, validator: Option<PathBuf>) -> Self {
        self.validator = validator;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the explicit config file, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load and merge configuration, then apply overrides.
    pub fn load(&self) -> Result<LinterConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        if let Some(validator) = &self.validator {
            tracing::debug!(validator = %validator.display(), "validator overridden");
            config.validator_path = Some(validator.clone());
        }
        Ok(config)
    }

    /// Load configuration, reporting config file problems through `ui`.
    ///
    /// Returns `Ok(None)` when the problem was reported; other errors are
    /// propagated.
    pub fn load_or_report(&self, ui: &mut dyn UserInterface) -> Result<Option<LinterConfig>> {
        match self.load() {
            Ok(config) => Ok(Some(config)),
            Err(e @ (LintError::ConfigNotFound { .. } | LintError::ConfigParseError { .. })) => {
                ui.error(&e.to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
