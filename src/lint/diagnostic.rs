//! Lint diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type produced from validator
//! output, and the [`Severity`] levels a diagnostic can carry.

use super::span::{Anchor, LineRange};

/// Severity level for diagnostics.
///
/// Only errors and warnings are ever emitted. Validator lines that are
/// neither are not diagnostics at all, so there is no third level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error reported by the validator.
    Error,
}

impl Severity {
    /// Keyword the validator prefixes lines of this severity with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING:",
            Severity::Error => "ERROR:",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic reported by the validator for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Validator message.
    pub message: String,
    /// Location in the document.
    pub anchor: Anchor,
}

impl Diagnostic {
    /// Create a diagnostic anchored to a line range.
    pub fn on_line(severity: Severity, message: impl Into<String>, range: LineRange) -> Self {
        Self {
            severity,
            message: message.into(),
            anchor: Anchor::Line(range),
        }
    }

    /// Create a file-global diagnostic.
    pub fn global(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            anchor: Anchor::File,
        }
    }

    /// Concrete display range.
    pub fn range(&self) -> LineRange {
        self.anchor.range()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
