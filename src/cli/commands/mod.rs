//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that need configuration
//! receive a [`ConfigSource`] carrying the global `--config`, `--project`
//! and `--validator` flags.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod lint;
pub mod schema;
pub mod source;
pub mod stage;
pub mod watch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use source::ConfigSource;
