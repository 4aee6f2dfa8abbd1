//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::{total, DocumentReport, LintFormatter};
use crate::lint::{Diagnostic, Severity};
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let style = match (self.use_color, severity) {
            (false, _) => Style::new(),
            (true, Severity::Warning) => Style::new().color256(208).bold(),
            (true, Severity::Error) => Style::new().red().bold(),
        };
        style.apply_to(severity.to_string()).to_string()
    }

    fn write_diagnostic<W: Write>(
        &self,
        report: &DocumentReport,
        diag: &Diagnostic,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}: {}",
            self.severity_prefix(diag.severity),
            diag.message
        )?;

        if diag.anchor.is_file() {
            writeln!(writer, "  --> {}", report.path.display())?;
        } else {
            let range = diag.range();
            writeln!(
                writer,
                "  --> {}:{}:{}",
                report.path.display(),
                range.line + 1,
                range.start_col + 1
            )?;
        }
        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[DocumentReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            for diag in &report.diagnostics {
                self.write_diagnostic(report, diag, writer)?;
                writeln!(writer)?;
            }
        }

        // Summary
        let error_count = total(reports, Severity::Error);
        let warning_count = total(reports, Severity::Warning);

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
