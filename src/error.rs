//! Error types for glsl-lint operations.
//!
//! This module defines [`LintError`], the error type returned by every
//! fallible operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A `LintError` is always terminal for the single lint run that raised it
//! - Recoverable conditions (malformed validator lines, an ambiguous shader
//!   stage) never become a `LintError`; they are handled inside the parser
//!   and the stage resolver
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for glsl-lint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No validator executable was configured.
    #[error("validator_path must be set (config file, --validator or GLSL_LINT_VALIDATOR)")]
    ValidatorNotConfigured,

    /// The validator process could not be started.
    #[error("Failed to run validator '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// The validator started but reported an invocation problem.
    #[error("Validator '{program}' failed with exit code {code:?}: {stderr}")]
    InvocationFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The document under lint could not be read.
    #[error("Failed to read {path}: {message}")]
    DocumentRead { path: PathBuf, message: String },

    /// File watching could not be set up.
    #[error("Failed to watch files: {message}")]
    Watch { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Whether this error aborts a lint run (as opposed to a setup problem
    /// such as a broken config file).
    pub fn is_fatal_run_error(&self) -> bool {
        matches!(
            self,
            Self::ValidatorNotConfigured
                | Self::SpawnFailed { .. }
                | Self::InvocationFailed { .. }
                | Self::DocumentRead { .. }
        )
    }
}

/// Result type alias for glsl-lint operations.
pub type Result<T> = std::result::Result<T, LintError>;
