//! Config command implementation.
//!
//! The `glsl-lint config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{LintError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::lint::EXIT_FATAL;
use super::source::ConfigSource;

/// The config command implementation.
pub struct ConfigCommand {
    source: ConfigSource,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(source: ConfigSource, args: ConfigArgs) -> Self {
        Self { source, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load_or_report(ui)? else {
            return Ok(CommandResult::failure(EXIT_FATAL));
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| LintError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        // Show which files contributed
        match self.source.config_path() {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => {
                let paths = ConfigPaths::discover(self.source.project_root());
                for path in paths.all_existing() {
                    ui.message(&format!("# {}", path.display()));
                }
            }
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| LintError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".glsl-lint.yml"), config).unwrap();
        temp
    }

    #[test]
    fn config_shows_config_path() {
        let temp = setup_project("validator_path: glslangValidator\n");
        let cmd = ConfigCommand::new(ConfigSource::new(temp.path()), ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages()[0].ends_with(".glsl-lint.yml"));
        assert!(ui.has_output("validator_path: glslangValidator"));
    }

    #[test]
    fn config_json_output() {
        let temp = setup_project("stages:\n  .comp: comp\n");
        let cmd = ConfigCommand::new(ConfigSource::new(temp.path()), ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["stages"][".comp"], "comp");
        assert_eq!(value["args_position"], "append");
        assert_eq!(value["usage_error_code"], 1);
    }

    #[test]
    fn config_applies_validator_override() {
        let temp = setup_project("validator_path: glslangValidator\n");
        let source = ConfigSource::new(temp.path())
            .with_validator(Some(PathBuf::from("/opt/bin/glslangValidator")));
        let cmd = ConfigCommand::new(source, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages()[0].contains("/opt/bin/glslangValidator"));
    }

    #[test]
    fn config_parse_error_is_fatal() {
        let temp = setup_project("usage_error_code: [1, 2]\n");
        let cmd = ConfigCommand::new(ConfigSource::new(temp.path()), ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_FATAL);
        assert_eq!(ui.errors().len(), 1);
    }
}
