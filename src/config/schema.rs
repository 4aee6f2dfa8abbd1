//! Configuration schema definitions for glsl-lint.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.
//!
//! ```yaml
//! validator_path: /usr/bin/glslangValidator
//! validator_args: ["--target-env", "vulkan1.2"]
//! args_position: append
//! stages:
//!   .vert: vert
//!   .frag: frag
//! usage_error_code: 1
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LinterConfig {
    /// Path to the validator executable (e.g. glslangValidator)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_path: Option<PathBuf>,

    /// Extra validator arguments, as a list or a whitespace-separated string
    #[serde(default, skip_serializing_if = "ValidatorArgs::is_empty")]
    pub validator_args: ValidatorArgs,

    /// Where extra arguments go relative to the stage flag and file path
    #[serde(default)]
    pub args_position: ArgsPosition,

    /// File extension to shader stage mapping (e.g. `.frag: frag`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stages: BTreeMap<String, String>,

    /// Exit code the validator uses for usage/invocation failures
    #[serde(default = "default_usage_error_code")]
    pub usage_error_code: i32,

    /// Kill the validator after this many seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            validator_path: None,
            validator_args: ValidatorArgs::default(),
            args_position: ArgsPosition::default(),
            stages: BTreeMap::new(),
            usage_error_code: default_usage_error_code(),
            timeout: None,
        }
    }
}

/// glslangValidator exits with 1 on bad usage and 2+ on compile/link errors.
fn default_usage_error_code() -> i32 {
    1
}

/// Extra arguments passed to the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ValidatorArgs {
    /// Pre-tokenized arguments, passed verbatim.
    List(Vec<String>),
    /// A single string split on whitespace.
    Raw(String),
}

impl Default for ValidatorArgs {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl ValidatorArgs {
    /// The arguments as individual tokens.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::List(args) => args.clone(),
            Self::Raw(raw) => raw.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(args) => args.is_empty(),
            Self::Raw(raw) => raw.trim().is_empty(),
        }
    }
}

/// Placement of extra arguments in the validator command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArgsPosition {
    /// Before `-S <stage> <file>`.
    Prepend,
    /// After `-S <stage> <file>`.
    #[default]
    Append,
}
