//! Configuration loading and parsing for glsl-lint.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layered merging in [`merger`]
//! - JSON Schema output in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use glsl_lint::config::{load_merged_config, ArgsPosition};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".glsl-lint.yml"),
//!     "validator_path: glslangValidator\nstages:\n  .frag: frag\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.stages[".frag"], "frag");
//! assert_eq!(config.args_position, ArgsPosition::Append);
//! ```
//!
//! # Configuration File Locations
//!
//! glsl-lint discovers and merges configuration in this order:
//! 1. User global config (`<config dir>/glsl-lint/config.yml`)
//! 2. Project config (`.glsl-lint.yml`)
//! 3. Local overrides (`.glsl-lint.local.yml`)

pub mod json_schema;
pub mod loader;
pub mod merger;
pub mod schema;

pub use json_schema::SchemaGenerator;
pub use schema::{ArgsPosition, LinterConfig, ValidatorArgs};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, LOCAL_CONFIG, PROJECT_CONFIG,
};

pub use merger::{deep_merge, merge_configs};
