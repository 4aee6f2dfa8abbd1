//! Validator output parsing.
//!
//! Turns the complete standard output of one validator run into the
//! ordered list of diagnostics for the linted document. Parsing is a pure
//! function of the output text and the document snapshot.

use crate::document::{split_lines, DocumentSnapshot};

use super::diagnostic::{Diagnostic, Severity};
use super::patterns::{
    classify, match_anchored, match_global, AnchoredLine, GlobalLine, COMPILATION_TERMINATED,
    NO_CODE_GENERATED_SUFFIX,
};
use super::span::LineRange;

/// Parse validator output into diagnostics, in output order.
///
/// Lines that are not `ERROR:`/`WARNING:` lines, known noise lines, and
/// severity-prefixed lines matching neither pattern produce nothing.
pub fn parse(raw_output: &str, document: &DocumentSnapshot) -> Vec<Diagnostic> {
    split_lines(raw_output)
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_line(line, document))
        .collect()
}

/// Parse a single non-empty output line.
pub fn parse_line(line: &str, document: &DocumentSnapshot) -> Option<Diagnostic> {
    let severity = classify(line)?;

    if let Some(anchored) = match_anchored(line) {
        return anchored_diagnostic(severity, anchored, document);
    }

    if let Some(global) = match_global(line) {
        return global_diagnostic(severity, global);
    }

    tracing::trace!(line, "dropping malformed validator line");
    None
}

fn anchored_diagnostic(
    severity: Severity,
    anchored: AnchoredLine<'_>,
    document: &DocumentSnapshot,
) -> Option<Diagnostic> {
    if anchored.message == COMPILATION_TERMINATED {
        tracing::trace!("suppressing compilation-terminated notice");
        return None;
    }

    // Line 0 has no zero-based index; report it against the whole file.
    let Some(line) = anchored.line_number.checked_sub(1) else {
        return Some(Diagnostic::global(severity, anchored.message));
    };

    let text = document.line(line).unwrap_or("");
    Some(Diagnostic::on_line(
        severity,
        anchored.message,
        LineRange::code_on_line(line, text),
    ))
}

fn global_diagnostic(severity: Severity, global: GlobalLine<'_>) -> Option<Diagnostic> {
    if global.message.ends_with(NO_CODE_GENERATED_SUFFIX) {
        tracing::trace!(message = global.message, "suppressing summary line");
        return None;
    }
    Some(Diagnostic::global(severity, global.message))
}
