//! Command implementations for stepgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. The repository context is resolved once by the caller
//! and handed to every command.

mod generate;
mod paths;

use crate::cli::Command;
use crate::context::RepoContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, ctx: &RepoContext) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args, ctx),
        Command::Paths(args) => paths::cmd_paths(args, ctx),
    }
}
