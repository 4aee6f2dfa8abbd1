//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// glsl-lint - GLSL shader linting through glslangValidator.
#[derive(Debug, Parser)]
#[command(name = "glsl-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (skips discovery of .glsl-lint.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Validator executable (overrides validator_path from config)
    #[arg(long, global = true, env = "GLSL_LINT_VALIDATOR")]
    pub validator: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint shader files
    Lint(LintArgs),

    /// Lint shader files, then re-lint each one when it is saved
    Watch(WatchArgs),

    /// Show which shader stage a file resolves to
    Stage(StageArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Print the JSON Schema for the configuration file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Shader files to lint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format: human, json, sarif
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Shader files to watch
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `stage` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StageArgs {
    /// Shader file to resolve
    pub file: PathBuf,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
