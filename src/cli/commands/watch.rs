//! Watch command implementation.
//!
//! The `glsl-lint watch` command lints every file once, then re-lints a
//! file each time it is saved. It runs until interrupted.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::cli::args::WatchArgs;
use crate::error::Result;
use crate::lint::OutputFormat;
use crate::linter::{Linter, Publish};
use crate::ui::UserInterface;
use crate::watch::DocumentWatcher;

use super::dispatcher::{Command, CommandResult};
use super::lint::{collect, render, EXIT_FATAL};
use super::source::ConfigSource;

/// How long to wait for a save before checking again.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The watch command implementation.
pub struct WatchCommand {
    source: ConfigSource,
    args: WatchArgs,
    use_color: bool,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(source: ConfigSource, args: WatchArgs) -> Self {
        Self {
            source,
            args,
            use_color: true,
        }
    }

    /// Allow or forbid colored output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Lint one saved document and show its new diagnostics.
    ///
    /// Returns whether the run completed. Results overtaken by a newer run
    /// of the same document are not shown. A document that no longer exists
    /// has its diagnostics cleared instead.
    pub fn relint(&self, linter: &Linter, path: &Path, ui: &mut dyn UserInterface) -> Result<bool> {
        if !path.exists() {
            linter.store().clear(path);
            ui.warning(&format!("{}: removed", path.display()));
            return Ok(false);
        }

        let outcome = match linter.lint(path) {
            Ok(outcome) => outcome,
            Err(e) => {
                ui.error(&format!("{}: {}", path.display(), e));
                return Ok(false);
            }
        };

        for warning in &outcome.warnings {
            ui.warning(warning);
        }
        if outcome.publish == Publish::Stale {
            return Ok(true);
        }

        if outcome.diagnostics.is_empty() {
            ui.success(&format!("{}: no problems", path.display()));
        } else {
            self.print(&render(OutputFormat::Human, self.use_color, &[outcome.report()])?)?;
        }
        Ok(true)
    }

    fn print(&self, output: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load_or_report(ui)? else {
            return Ok(CommandResult::failure(EXIT_FATAL));
        };
        let linter = Linter::new(config);

        let mut watcher = match DocumentWatcher::new(&self.args.files) {
            Ok(watcher) => watcher,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_FATAL));
            }
        };

        let documents: Vec<_> = watcher.documents().cloned().collect();
        let collected = collect(&documents, linter.lint_all(&documents), ui);
        let reports: Vec<_> = collected
            .reports
            .into_iter()
            .filter(|r| !r.diagnostics.is_empty())
            .collect();
        if !reports.is_empty() {
            self.print(&render(OutputFormat::Human, self.use_color, &reports)?)?;
        }

        ui.message(&format!(
            "Watching {} file(s) for changes (Ctrl-C to stop)",
            documents.len()
        ));

        loop {
            if let Some(path) = watcher.next_change(POLL_INTERVAL) {
                tracing::debug!(path = %path.display(), "document saved");
                self.relint(&linter, &path, ui)?;
            }
        }
    }
}
