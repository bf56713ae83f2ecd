//! Command-line interface for record-sleeve.
//!
//! This module provides the commands for rendering an enriched catalog,
//! looking up single releases and inspecting the configuration.

mod commands;

pub use commands::{Cli, Commands, run_command};
