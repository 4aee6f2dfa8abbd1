//! Validator command line assembly and exit status interpretation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{ArgsPosition, ValidatorArgs};

/// A fully assembled validator command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorInvocation {
    /// Validator executable.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<OsString>,
}

impl ValidatorInvocation {
    /// Assemble `[-S <stage>] <file>` plus extra arguments before or after.
    pub fn build(
        program: &Path,
        file: &Path,
        stage: Option<&str>,
        extra: &ValidatorArgs,
        position: ArgsPosition,
    ) -> Self {
        let mut core: Vec<OsString> = Vec::new();
        if let Some(stage) = stage {
            core.push("-S".into());
            core.push(stage.into());
        }
        core.push(file.as_os_str().to_owned());

        let extra: Vec<OsString> = extra.tokens().into_iter().map(OsString::from).collect();

        let args = match position {
            ArgsPosition::Prepend => extra.into_iter().chain(core).collect(),
            ArgsPosition::Append => core.into_iter().chain(extra).collect(),
        };

        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// The command line as a single display string.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program_name()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// What a validator exit status means for the lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    /// Exit code 0: compiled without diagnostics.
    Clean,
    /// Non-zero exit code meaning "diagnostics were produced".
    Diagnostics(i32),
    /// The usage-failure exit code, or termination by a signal.
    InvocationFailure(Option<i32>),
}

impl ExitClass {
    /// Classify an exit code given the validator's usage-failure code.
    pub fn classify(code: Option<i32>, usage_error_code: i32) -> Self {
        match code {
            Some(0) => Self::Clean,
            Some(code) if code == usage_error_code => Self::InvocationFailure(Some(code)),
            Some(code) => Self::Diagnostics(code),
            None => Self::InvocationFailure(None),
        }
    }

    /// Whether the output of this run may be parsed and published.
    pub fn is_usable(&self) -> bool {
        !matches!(self, Self::InvocationFailure(_))
    }
}
