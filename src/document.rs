//! Snapshot of the source document under lint.

use std::path::Path;

use crate::error::{LintError, Result};

/// The lines of a document at the time a lint run completed.
///
/// Lines are split the way an editor splits them: on `\r\n`, `\r` or `\n`,
/// so a trailing line break yields a final empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    lines: Vec<String>,
}

impl DocumentSnapshot {
    /// Build a snapshot from the full document text.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text).map(str::to_string).collect(),
        }
    }

    /// Read a snapshot from a file on disk.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| LintError::DocumentRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of the zero-based line `index`, without its line break.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

/// Split text on `\r\n`, `\r` and `\n`, keeping empty segments.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(pos) => {
                let skip = if current[pos..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                rest = Some(&current[pos + skip..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
