//! Validator output parsing and diagnostic reporting.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Patterns** - Independent matchers for line-anchored and file-global
//!   validator lines ([`patterns`])
//! - **Parser** - Maps complete validator output onto a document ([`parse`])
//! - **Diagnostics** - Severity, message and anchor ([`Diagnostic`])
//! - **Output** - Human, JSON and SARIF formatters ([`LintFormatter`])
//!
//! # Example
//!
//! ```
//! use glsl_lint::document::DocumentSnapshot;
//! use glsl_lint::lint::{parse, LineRange, Severity};
//!
//! let doc = DocumentSnapshot::from_text("#version 450\n    foo(x);\n");
//! let diags = parse("ERROR: 0:2: 'foo' : undeclared identifier\n", &doc);
//!
//! assert_eq!(diags.len(), 1);
//! assert_eq!(diags[0].severity, Severity::Error);
//! assert_eq!(diags[0].range(), LineRange::new(1, 4, 11));
//! ```

pub mod diagnostic;
pub mod output;
pub mod parser;
pub mod patterns;
pub mod span;

pub use diagnostic::{Diagnostic, Severity};
pub use output::{
    DocumentReport, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter,
};
pub use parser::{parse, parse_line};
pub use span::{Anchor, LineRange};
