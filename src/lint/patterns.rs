//! Line matchers for validator output.
//!
//! glslangValidator reports one diagnostic per line in one of two shapes:
//!
//! ```text
//! ERROR: 0:12: 'foo' : undeclared identifier
//! WARNING: unresolved extension directive
//! ```
//!
//! The first is anchored to a line (`<source>:<line>:`), the second applies
//! to the whole file. Each shape has its own matcher; the parser tries the
//! anchored matcher first.

use std::sync::LazyLock;

use regex::Regex;

use super::diagnostic::Severity;

/// Anchored message emitted after the validator aborts; carries nothing new.
pub const COMPILATION_TERMINATED: &str = "'' : compilation terminated ";

/// Suffix of the trailing summary line (`N compilation errors.  No code generated.`).
pub const NO_CODE_GENERATED_SUFFIX: &str = "compilation errors.  No code generated.";

static RE_ANCHORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:ERROR|WARNING):\s*(\d+):(\d+): (.*)$").unwrap());

static RE_GLOBAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:ERROR|WARNING):\s*(\S.*)$").unwrap());

/// A line-anchored validator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredLine<'a> {
    /// Index of the source string the validator compiled (0 for a single file).
    pub source_index: usize,
    /// Reported line number (1-indexed).
    pub line_number: usize,
    /// Message text, verbatim.
    pub message: &'a str,
}

/// A file-global validator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalLine<'a> {
    /// Message text, verbatim.
    pub message: &'a str,
}

/// Severity of a validator output line, or `None` if it is not a
/// diagnostic line.
pub fn classify(line: &str) -> Option<Severity> {
    if line.starts_with(Severity::Error.keyword()) {
        Some(Severity::Error)
    } else if line.starts_with(Severity::Warning.keyword()) {
        Some(Severity::Warning)
    } else {
        None
    }
}

/// Match `<KEYWORD> <source>:<line>: <message>`.
///
/// Numbers that do not fit a `usize` are treated as a non-match.
pub fn match_anchored(line: &str) -> Option<AnchoredLine<'_>> {
    let caps = RE_ANCHORED.captures(line)?;
    let source_index = caps.get(1)?.as_str().parse().ok()?;
    let line_number = caps.get(2)?.as_str().parse().ok()?;
    let message = caps.get(3)?.as_str();

    Some(AnchoredLine {
        source_index,
        line_number,
        message,
    })
}

/// Match `<KEYWORD> <message>` with no position.
pub fn match_global(line: &str) -> Option<GlobalLine<'_>> {
    let caps = RE_GLOBAL.captures(line)?;
    Some(GlobalLine {
        message: caps.get(1)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(classify("ERROR: 0:1: x"), Some(Severity::Error));
        assert_eq!(classify("WARNING: 0:1: x"), Some(Severity::Warning));
        assert_eq!(classify("shader.frag"), None);
        assert_eq!(classify(" ERROR: indented"), None);
        assert_eq!(classify("error: lowercase"), None);
    }

    #[test]
    fn anchored_extracts_fields() {
        let m = match_anchored("ERROR: 0:12: 'foo' : undeclared identifier").unwrap();
        assert_eq!(m.source_index, 0);
        assert_eq!(m.line_number, 12);
        assert_eq!(m.message, "'foo' : undeclared identifier");
    }

    #[test]
    fn anchored_keeps_message_verbatim() {
        let m = match_anchored("WARNING: 1:3:   spaced  ").unwrap();
        assert_eq!(m.source_index, 1);
        assert_eq!(m.message, "  spaced  ");
    }

    #[test]
    fn anchored_allows_empty_message() {
        let m = match_anchored("ERROR: 0:4: ").unwrap();
        assert_eq!(m.message, "");
    }

    #[test]
    fn anchored_rejects_global_form() {
        assert!(match_anchored("ERROR: unresolved extension directive").is_none());
        assert!(match_anchored("ERROR: 0:12 missing colon").is_none());
    }

    #[test]
    fn anchored_rejects_overflowing_numbers() {
        assert!(match_anchored("ERROR: 0:99999999999999999999999: x").is_none());
    }

    #[test]
    fn global_extracts_message() {
        let m = match_global("WARNING: unresolved extension directive").unwrap();
        assert_eq!(m.message, "unresolved extension directive");
    }

    #[test]
    fn global_requires_text() {
        assert!(match_global("ERROR:").is_none());
        assert!(match_global("ERROR:   ").is_none());
    }

    #[test]
    fn global_accepts_missing_space() {
        let m = match_global("ERROR:#version required").unwrap();
        assert_eq!(m.message, "#version required");
    }
}
