//! CLI argument parsing for stepgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Stepgen: scaffold the operations contract and planner prompt for a STEP.
///
/// Each STEP gets two Markdown documents:
/// - docs/operations/step-NN/STEP-NN-<slug>.md
/// - docs/prompts/operational/step-NN/STEP-NN-<slug>-prompt.md
///
/// Existing documents are never overwritten.
#[derive(Parser, Debug)]
#[command(name = "stepgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root to generate into (default: git top-level of the current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print diagnostic logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for stepgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the operations and prompt documents for a STEP.
    ///
    /// Documents that already exist are reported and left untouched.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show where a STEP's documents live and whether they exist.
    Paths(StepArgs),
}

/// Step number and name shared by every command.
#[derive(Args, Debug)]
pub struct StepArgs {
    /// STEP number (non-negative integer, e.g. 2 or 02).
    #[arg(allow_negative_numbers = true)]
    pub step_number: String,

    /// STEP name; multiple words are joined with single spaces.
    ///
    /// Words starting with `-` must follow `--`.
    #[arg(required = true, num_args = 1..)]
    pub step_name: Vec<String>,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub step: StepArgs,

    /// Show what would be created without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
