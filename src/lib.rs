//! glsl-lint - GLSL shader linting through glslangValidator.
//!
//! glsl-lint runs an external GLSL validator over shader files, turns the
//! validator's `ERROR:`/`WARNING:` output into positioned diagnostics, and
//! picks the shader stage to validate from the file extension.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and schema
//! - [`document`] - Line snapshots of linted documents
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Diagnostics, output parsing, and report formatters
//! - [`linter`] - Lint run orchestration and the diagnostic store
//! - [`stage`] - Shader stage resolution from file extensions
//! - [`ui`] - Terminal output, spinners, and test doubles
//! - [`validator`] - Validator argument assembly and process execution
//! - [`watch`] - Re-linting documents as they are saved
//!
//! # Example
//!
//! ```
//! use glsl_lint::document::DocumentSnapshot;
//! use glsl_lint::lint::{parse, Severity};
//!
//! let doc = DocumentSnapshot::from_text("#version 450\nvoid main() {\n    foo();\n}\n");
//! let output = "ERROR: 0:3: 'foo' : no matching overloaded function found\n\
//!               ERROR: 1 compilation errors.  No code generated.\n";
//!
//! let diagnostics = parse(output, &doc);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Error);
//! assert_eq!(diagnostics[0].range().line, 2);
//! assert_eq!(diagnostics[0].range().start_col, 4);
//! ```
//!
//! For running the validator itself, see [`linter::Linter`].

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod lint;
pub mod linter;
pub mod stage;
pub mod ui;
pub mod validator;
pub mod watch;

pub use error::{LintError, Result};
