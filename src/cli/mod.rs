//! CLI argument parsing for fieldlock.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldlock: inspect and exercise field-level lock policies.
///
/// Tables and lock declarations are read from a YAML config file and loaded
/// into an in-memory store.
#[derive(Parser, Debug)]
#[command(name = "fieldlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file.
    #[arg(short, long, global = true, default_value = "fieldlock.yaml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for fieldlock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the lock classification of declared types.
    ///
    /// Lists locked, always-locked, optionally-locked, and locking attribute
    /// names per type.
    Show(ShowArgs),

    /// Check whether an update to a record would be accepted.
    ///
    /// Creates a record from `--before`, applies `--after` as an update, and
    /// reports every locked attribute the update changes.
    Check(CheckArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Record type to show. If omitted, shows every declared type.
    pub type_name: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Record type (table) name.
    #[arg(short = 't', long = "type")]
    pub type_name: String,

    /// Attribute values at creation, as a JSON object.
    #[arg(long, default_value = "{}")]
    pub before: String,

    /// Attribute values to update, as a JSON object.
    #[arg(long)]
    pub after: String,

    /// Apply the update inside an unlock scope.
    #[arg(long)]
    pub unlocked: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
