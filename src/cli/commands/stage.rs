//! Stage command implementation.
//!
//! The `glsl-lint stage` command shows which shader stage a file resolves
//! to under the current configuration.

use crate::cli::args::StageArgs;
use crate::error::Result;
use crate::stage::resolve_stage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::lint::EXIT_FATAL;
use super::source::ConfigSource;

/// The stage command implementation.
pub struct StageCommand {
    source: ConfigSource,
    args: StageArgs,
}

impl StageCommand {
    /// Create a new stage command.
    pub fn new(source: ConfigSource, args: StageArgs) -> Self {
        Self { source, args }
    }
}

impl Command for StageCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load_or_report(ui)? else {
            return Ok(CommandResult::failure(EXIT_FATAL));
        };

        let resolution = resolve_stage(&self.args.file, &config.stages);
        if let Some(warning) = resolution.warning(&self.args.file) {
            ui.warning(&warning);
        }
        ui.message(resolution.stage().unwrap_or("unknown"));

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

    fn run(config: &str, file: &str) -> MockUI {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".glsl-lint.yml"), config).unwrap();
        let cmd = StageCommand::new(
            ConfigSource::new(temp.path()),
            StageArgs {
                file: PathBuf::from(file),
            },
        );
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
        ui
    }

    #[test]
    fn prints_known_stage() {
        let ui = run("stages:\n  .vert: vert\n  .frag: frag\n", "shaders/blur.frag");
        assert_eq!(ui.messages(), &["frag"]);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn prints_unknown_without_warning() {
        let ui = run("stages:\n  .vert: vert\n", "notes.txt");
        assert_eq!(ui.messages(), &["unknown"]);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn ambiguous_stage_warns() {
        let ui = run("stages:\n  .frag: frag\n  .glsl.frag: frag\n", "a.glsl.frag");
        assert_eq!(ui.messages(), &["unknown"]);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.warnings()[0].contains("ambiguous"));
    }
}
