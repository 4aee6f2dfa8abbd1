//! Source positions for diagnostics.
//!
//! All positions are zero-based. Columns count `char`s.

/// A range on a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// Line index (0-indexed).
    pub line: usize,
    /// First column covered (0-indexed).
    pub start_col: usize,
    /// Column just past the end of the range (0-indexed).
    pub end_col: usize,
}

impl LineRange {
    /// Create a range on `line` from `start_col` to `end_col`.
    pub fn new(line: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            line,
            start_col,
            end_col,
        }
    }

    /// Range covering the code on `text`: from the first non-whitespace
    /// character to the end of the line.
    ///
    /// An empty or all-whitespace line yields an empty range at its end.
    pub fn code_on_line(line: usize, text: &str) -> Self {
        let end_col = text.chars().count();
        let start_col = text
            .chars()
            .position(|c| !c.is_whitespace())
            .unwrap_or(end_col);
        Self::new(line, start_col, end_col)
    }
}

/// Where a diagnostic is attached in its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Attached to a specific line.
    Line(LineRange),
    /// Attached to the file as a whole.
    File,
}

impl Anchor {
    /// Concrete range for display. File-global diagnostics sit at the very
    /// start of the document.
    pub fn range(&self) -> LineRange {
        match self {
            Anchor::Line(range) => *range,
            Anchor::File => LineRange::new(0, 0, 0),
        }
    }

    /// Whether this anchor is file-global.
    pub fn is_file(&self) -> bool {
        matches!(self, Anchor::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_range_skips_leading_whitespace() {
        let range = LineRange::code_on_line(11, "    foo(x);");
        assert_eq!(range, LineRange::new(11, 4, 11));
    }

    #[test]
    fn code_range_handles_tabs() {
        let range = LineRange::code_on_line(0, "\t\tvec4 c;");
        assert_eq!(range.start_col, 2);
        assert_eq!(range.end_col, 9);
    }

    #[test]
    fn whitespace_only_line_starts_at_end() {
        let range = LineRange::code_on_line(3, "   ");
        assert_eq!(range, LineRange::new(3, 3, 3));
    }

    #[test]
    fn empty_line_is_empty_range() {
        assert_eq!(LineRange::code_on_line(5, ""), LineRange::new(5, 0, 0));
    }

    #[test]
    fn columns_count_chars() {
        let range = LineRange::code_on_line(0, "  // héllo");
        assert_eq!(range.start_col, 2);
        assert_eq!(range.end_col, 10);
    }

    #[test]
    fn file_anchor_renders_at_origin() {
        assert_eq!(Anchor::File.range(), LineRange::new(0, 0, 0));
        assert!(Anchor::File.is_file());
    }
}
