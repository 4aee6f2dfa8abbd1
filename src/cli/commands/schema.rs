//! Schema command implementation.
//!
//! The `glsl-lint schema` command prints the JSON Schema for the
//! configuration file.

use crate::config::SchemaGenerator;
use crate::error::{LintError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand {
    generator: SchemaGenerator,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = self.generator.generate();
        let json = serde_json::to_string_pretty(&schema).map_err(|e| LintError::Other(e.into()))?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_schema_json() {
        let mut ui = MockUI::new();
        let result = SchemaCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert!(value["properties"]["validator_path"].is_object());
    }
}
