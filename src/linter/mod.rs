//! Lint run orchestration.
//!
//! A run resolves the shader stage, invokes the validator, classifies its
//! exit status, parses the complete output against a document snapshot
//! and publishes the result to the [`DiagnosticStore`].
//!
//! Every error is terminal for its run only. A failed run publishes
//! nothing, so the document keeps whatever diagnostics it had before.

pub mod store;

pub use store::{DiagnosticStore, Publish, RunTicket};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::anyhow;

use crate::config::LinterConfig;
use crate::document::DocumentSnapshot;
use crate::error::{LintError, Result};
use crate::lint::{parse, Diagnostic, DocumentReport};
use crate::stage::{resolve_stage, StageResolution};
use crate::validator::{execute, ExecOptions, ExitClass, ValidatorInvocation};

/// Result of one completed lint run.
#[derive(Debug, Clone)]
pub struct LintOutcome {
    /// Document that was linted.
    pub path: PathBuf,
    /// How the shader stage was resolved.
    pub stage: StageResolution,
    /// How the validator exited.
    pub exit: ExitClass,
    /// Diagnostics computed by this run.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the diagnostics reached the store.
    pub publish: Publish,
    /// Non-fatal warnings to show the user.
    pub warnings: Vec<String>,
}

impl LintOutcome {
    pub fn report(&self) -> DocumentReport {
        DocumentReport::new(&self.path, self.diagnostics.clone())
    }
}

/// Runs the validator over documents and tracks their diagnostics.
pub struct Linter {
    config: LinterConfig,
    store: Arc<DiagnosticStore>,
}

impl Linter {
    /// Create a linter with its own diagnostic store.
    pub fn new(config: LinterConfig) -> Self {
        Self::with_store(config, Arc::new(DiagnosticStore::new()))
    }

    /// Create a linter publishing into a shared store.
    pub fn with_store(config: LinterConfig, store: Arc<DiagnosticStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<DiagnosticStore> {
        &self.store
    }

    /// Lint a document, reading its snapshot from disk once the validator
    /// has finished.
    pub fn lint(&self, path: &Path) -> Result<LintOutcome> {
        self.run(path, None)
    }

    /// Lint a document against live buffer contents.
    pub fn lint_text(&self, path: &Path, text: &str) -> Result<LintOutcome> {
        self.run(path, Some(text))
    }

    /// Lint several documents concurrently, returning results in input order.
    pub fn lint_all(&self, paths: &[PathBuf]) -> Vec<Result<LintOutcome>> {
        thread::scope(|scope| {
            let handles: Vec<_> = paths
                .iter()
                .map(|path| scope.spawn(move || self.lint(path)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(LintError::Other(anyhow!("lint run panicked"))))
                })
                .collect()
        })
    }

    fn exec_options(&self) -> ExecOptions {
        ExecOptions {
            timeout: self.config.timeout.map(Duration::from_secs),
        }
    }

    fn run(&self, path: &Path, text: Option<&str>) -> Result<LintOutcome> {
        let program = self
            .config
            .validator_path
            .as_deref()
            .ok_or(LintError::ValidatorNotConfigured)?;

        let stage = resolve_stage(path, &self.config.stages);
        let mut warnings = Vec::new();
        if let Some(warning) = stage.warning(path) {
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }

        let invocation = ValidatorInvocation::build(
            program,
            path,
            stage.stage(),
            &self.config.validator_args,
            self.config.args_position,
        );

        let ticket = self.store.begin(path);
        let output = execute(&invocation, &self.exec_options())?;

        let exit = ExitClass::classify(output.exit_code, self.config.usage_error_code);
        if let ExitClass::InvocationFailure(code) = exit {
            let stderr = if output.timed_out {
                format!("timed out after {:?}", output.duration)
            } else {
                output.stderr.trim().to_string()
            };
            return Err(LintError::InvocationFailed {
                program: invocation.program_name(),
                code,
                stderr,
            });
        }

        let document = match text {
            Some(text) => DocumentSnapshot::from_text(text),
            None => DocumentSnapshot::read(path)?,
        };

        let diagnostics = parse(&output.stdout, &document);
        let publish = self.store.publish(&ticket, diagnostics.clone());

        Ok(LintOutcome {
            path: path.to_path_buf(),
            stage,
            exit,
            diagnostics,
            publish,
            warnings,
        })
    }
}
