//! Command implementations for fieldlock.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod show;


use crate::cli::Command;
use fieldlock::config::Config;
use fieldlock::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Show(args) => show::cmd_show(config, args),
        Command::Check(args) => check::cmd_check(config, args),
    }
}
