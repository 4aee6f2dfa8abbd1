//! Lint command implementation.
//!
//! The `glsl-lint lint` command runs the validator over each file and
//! reports the diagnostics in the requested format.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::LintArgs;
use crate::error::Result;
use crate::lint::output::total;
use crate::lint::{
    DocumentReport, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter,
    Severity,
};
use crate::linter::{LintOutcome, Linter};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::source::ConfigSource;

/// Exit code when diagnostics fail the run.
pub const EXIT_DIAGNOSTICS: i32 = 1;

/// Exit code when a run could not complete (or config could not load).
pub const EXIT_FATAL: i32 = 2;

/// The lint command implementation.
pub struct LintCommand {
    source: ConfigSource,
    args: LintArgs,
    use_color: bool,
}

/// Reports and failure state gathered from a batch of lint runs.
#[derive(Debug, Default)]
pub(crate) struct Collected {
    pub reports: Vec<DocumentReport>,
    pub fatal: bool,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(source: ConfigSource, args: LintArgs) -> Self {
        Self {
            source,
            args,
            use_color: true,
        }
    }

    /// Allow or forbid colored human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Format reports using the requested formatter.
    pub fn render(&self, reports: &[DocumentReport]) -> Result<String> {
        render(self.args.format, self.use_color, reports)
    }

    fn should_fail(&self, reports: &[DocumentReport]) -> bool {
        let errors = total(reports, Severity::Error);
        let warnings = total(reports, Severity::Warning);
        errors > 0 || (self.args.strict && warnings > 0)
    }
}

/// Format reports in `format`.
pub(crate) fn render(
    format: OutputFormat,
    use_color: bool,
    reports: &[DocumentReport],
) -> Result<String> {
    let mut output = Vec::new();
    match format {
        OutputFormat::Human => {
            HumanFormatter::new(use_color && should_use_colors()).format(reports, &mut output)?
        }
        OutputFormat::Json => JsonFormatter::new().format(reports, &mut output)?,
        OutputFormat::Sarif => SarifFormatter::new("glsl-lint", env!("CARGO_PKG_VERSION"))
            .format(reports, &mut output)?,
    }
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Surface run warnings and errors, keeping the reports of runs that
/// completed.
pub(crate) fn collect(
    paths: &[PathBuf],
    results: Vec<Result<LintOutcome>>,
    ui: &mut dyn UserInterface,
) -> Collected {
    let mut collected = Collected::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    ui.warning(warning);
                }
                if ui.output_mode().shows_details() {
                    ui.message(&format!(
                        "{}: {} diagnostic(s), stage {}",
                        path.display(),
                        outcome.diagnostics.len(),
                        outcome.stage.stage().unwrap_or("unknown")
                    ));
                }
                collected.reports.push(outcome.report());
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "lint run failed");
                ui.error(&format!("{}: {}", path.display(), e));
                collected.fatal = true;
            }
        }
    }
    collected
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.source.load_or_report(ui)? else {
            return Ok(CommandResult::failure(EXIT_FATAL));
        };
        let linter = Linter::new(config);

        let mut spinner = (self.args.format == OutputFormat::Human && ui.is_interactive())
            .then(|| ui.start_spinner(&format!("Linting {} file(s)", self.args.files.len())));
        let results = linter.lint_all(&self.args.files);
        if let Some(spinner) = spinner.as_mut() {
            spinner.finish_clear();
        }

        let collected = collect(&self.args.files, results, ui);
        let reports = &collected.reports;
        let clean = reports.iter().all(|r| r.diagnostics.is_empty());

        if self.args.format == OutputFormat::Human && clean {
            if !collected.fatal {
                ui.success(&format!("No problems found in {} file(s)", reports.len()));
            }
        } else {
            let output = self.render(reports)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }

        if collected.fatal {
            Ok(CommandResult::failure(EXIT_FATAL))
        } else if self.should_fail(reports) {
            Ok(CommandResult::failure(EXIT_DIAGNOSTICS))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Diagnostic, LineRange};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn args(files: &[&str]) -> LintArgs {
        LintArgs {
            files: files.iter().map(PathBuf::from).collect(),
            ..Default::default()
        }
    }

    fn warning_report() -> DocumentReport {
        DocumentReport::new(
            "a.frag",
            vec![Diagnostic::on_line(
                Severity::Warning,
                "unused variable",
                LineRange::new(0, 0, 4),
            )],
        )
    }

    #[test]
    fn no_validator_is_fatal() {
        let temp = TempDir::new().unwrap();
        let cmd = LintCommand::new(ConfigSource::new(temp.path()), args(&["a.frag"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_FATAL);
        assert!(ui.errors()[0].contains("validator_path"));
    }

    #[test]
    fn warnings_fail_only_in_strict_mode() {
        let temp = TempDir::new().unwrap();
        let reports = vec![warning_report()];

        let lenient = LintCommand::new(ConfigSource::new(temp.path()), args(&["a.frag"]));
        assert!(!lenient.should_fail(&reports));

        let mut strict_args = args(&["a.frag"]);
        strict_args.strict = true;
        let strict = LintCommand::new(ConfigSource::new(temp.path()), strict_args);
        assert!(strict.should_fail(&reports));
    }

    #[test]
    fn renders_requested_format() {
        let temp = TempDir::new().unwrap();
        let mut json_args = args(&["a.frag"]);
        json_args.format = OutputFormat::Json;
        let cmd = LintCommand::new(ConfigSource::new(temp.path()), json_args);

        let output = cmd.render(&[warning_report()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["warnings"], 1);
    }

    #[test]
    fn human_render_without_color() {
        let output = render(OutputFormat::Human, false, &[warning_report()]).unwrap();
        assert!(output.starts_with("warning: unused variable"));
        assert!(output.contains("a.frag:1:1"));
    }

    #[cfg(unix)]
    mod with_fake_validator {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;

        fn fake_validator(dir: &Path, stdout: &str, code: i32) -> PathBuf {
            let path = dir.join("glslangValidator");
            let script = format!("#!/bin/sh\ncat <<'OUT'\n{}\nOUT\nexit {}\n", stdout, code);
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn project(stdout: &str, code: i32) -> (TempDir, ConfigSource, PathBuf) {
            let temp = TempDir::new().unwrap();
            let validator = fake_validator(temp.path(), stdout, code);
            let shader = temp.path().join("blur.frag");
            fs::write(&shader, "#version 450\nvoid main() {\n  foo();\n}\n").unwrap();
            let source = ConfigSource::new(temp.path()).with_validator(Some(validator));
            (temp, source, shader)
        }

        #[test]
        fn clean_file_succeeds() {
            let (_temp, source, shader) = project("", 0);
            let cmd = LintCommand::new(
                source,
                LintArgs {
                    files: vec![shader],
                    ..Default::default()
                },
            );
            let mut ui = MockUI::new();

            let result = cmd.execute(&mut ui).unwrap();

            assert!(result.success);
            assert_eq!(ui.successes(), &["No problems found in 1 file(s)"]);
        }

        #[test]
        fn errors_fail_the_run() {
            let (_temp, source, shader) = project("ERROR: 0:3: 'foo' : no matching function", 2);
            let cmd = LintCommand::new(
                source,
                LintArgs {
                    files: vec![shader],
                    format: OutputFormat::Json,
                    strict: false,
                },
            );
            let mut ui = MockUI::new();

            let result = cmd.execute(&mut ui).unwrap();

            assert_eq!(result.exit_code, EXIT_DIAGNOSTICS);
            assert!(ui.errors().is_empty());
        }

        #[test]
        fn usage_failure_is_fatal() {
            let (_temp, source, shader) = project("", 1);
            let cmd = LintCommand::new(
                source,
                LintArgs {
                    files: vec![shader],
                    ..Default::default()
                },
            );
            let mut ui = MockUI::new();

            let result = cmd.execute(&mut ui).unwrap();

            assert_eq!(result.exit_code, EXIT_FATAL);
            assert_eq!(ui.errors().len(), 1);
            assert!(ui.successes().is_empty());
        }

        #[test]
        fn verbose_mode_shows_stage() {
            let (temp, source, shader) = project("", 0);
            fs::write(temp.path().join(".glsl-lint.yml"), "stages:\n  .frag: frag\n").unwrap();
            let cmd = LintCommand::new(
                source,
                LintArgs {
                    files: vec![shader],
                    ..Default::default()
                },
            );
            let mut ui = MockUI::with_mode(crate::ui::OutputMode::Verbose);

            cmd.execute(&mut ui).unwrap();

            assert!(ui.has_output("0 diagnostic(s), stage frag"));
        }
    }
}
