//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::source::ConfigSource;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: ConfigSource,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading configuration from `source`.
    pub fn new(source: ConfigSource) -> Self {
        Self { source }
    }

    /// Get the configuration source.
    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Lint(args) => {
                let cmd = super::lint::LintCommand::new(self.source.clone(), args.clone())
                    .with_color(!cli.no_color);
                cmd.execute(ui)
            }
            Commands::Watch(args) => {
                let cmd = super::watch::WatchCommand::new(self.source.clone(), args.clone())
                    .with_color(!cli.no_color);
                cmd.execute(ui)
            }
            Commands::Stage(args) => {
                let cmd = super::stage::StageCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Schema => super::schema::SchemaCommand::new().execute(ui),
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
