//! Lint output formatters.
//!
//! This module provides formatters for outputting per-document lint
//! results in different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::{Diagnostic, Severity};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// The diagnostics computed for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Document identity.
    pub path: PathBuf,
    /// Diagnostics in validator output order.
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentReport {
    pub fn new(path: impl Into<PathBuf>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path: path.into(),
            diagnostics,
        }
    }

    /// Number of diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Count diagnostics of `severity` across all reports.
pub fn total(reports: &[DocumentReport], severity: Severity) -> usize {
    reports.iter().map(|r| r.count(severity)).sum()
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format reports to the given writer.
    fn format<W: Write>(&self, reports: &[DocumentReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
