//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use super::{total, DocumentReport, LintFormatter};
use crate::lint::Severity;
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    documents: Vec<JsonDocument>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDocument {
    file: String,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    severity: String,
    message: String,
    /// Zero-based position; absent for file-global diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[DocumentReport], writer: &mut W) -> std::io::Result<()> {
        let documents = reports
            .iter()
            .map(|report| JsonDocument {
                file: report.path.display().to_string(),
                diagnostics: report
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let range = (!d.anchor.is_file()).then(|| d.range());
                        JsonDiagnostic {
                            severity: d.severity.to_string(),
                            message: d.message.clone(),
                            line: range.map(|r| r.line),
                            start_column: range.map(|r| r.start_col),
                            end_column: range.map(|r| r.end_col),
                        }
                    })
                    .collect(),
            })
            .collect();

        let errors = total(reports, Severity::Error);
        let warnings = total(reports, Severity::Warning);
        let output = JsonOutput {
            documents,
            summary: JsonSummary {
                total: errors + warnings,
                errors,
                warnings,
            },
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Diagnostic, LineRange};

    fn render(reports: &[DocumentReport]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(reports, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&[DocumentReport::new(
            "a.frag",
            vec![Diagnostic::global(Severity::Error, "Error message")],
        )]);

        assert!(parsed["documents"].is_array());
        assert_eq!(parsed["documents"][0]["file"], "a.frag");
        assert_eq!(parsed["summary"]["total"].as_u64().unwrap(), 1);
    }

    #[test]
    fn includes_range_for_anchored_diagnostics() {
        let parsed = render(&[DocumentReport::new(
            "a.frag",
            vec![Diagnostic::on_line(
                Severity::Warning,
                "msg",
                LineRange::new(11, 4, 11),
            )],
        )]);

        let diag = &parsed["documents"][0]["diagnostics"][0];
        assert_eq!(diag["severity"], "warning");
        assert_eq!(diag["line"], 11);
        assert_eq!(diag["start_column"], 4);
        assert_eq!(diag["end_column"], 11);
    }

    #[test]
    fn omits_range_for_global_diagnostics() {
        let parsed = render(&[DocumentReport::new(
            "a.frag",
            vec![Diagnostic::global(Severity::Error, "msg")],
        )]);

        assert!(parsed["documents"][0]["diagnostics"][0]["line"].is_null());
    }

    #[test]
    fn summary_counts_by_severity() {
        let parsed = render(&[
            DocumentReport::new(
                "a.frag",
                vec![
                    Diagnostic::global(Severity::Error, "e1"),
                    Diagnostic::global(Severity::Warning, "w1"),
                ],
            ),
            DocumentReport::new("b.frag", vec![Diagnostic::global(Severity::Error, "e2")]),
        ]);

        assert_eq!(parsed["summary"]["total"], 3);
        assert_eq!(parsed["summary"]["errors"], 2);
        assert_eq!(parsed["summary"]["warnings"], 1);
    }

    #[test]
    fn empty_reports_produce_zero_summary() {
        let parsed = render(&[]);
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
