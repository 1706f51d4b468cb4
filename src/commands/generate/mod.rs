//! Implementation of the `stepgen generate` command.
//!
//! Normalizes the step number and name, then places the operations and
//! prompt documents. Each document is reported on stdout as created,
//! already existing, or (with `--dry-run`) planned.

mod display;


use crate::cli::GenerateArgs;
use crate::context::RepoContext;
use crate::error::Result;
use crate::placement::{PlaceOptions, PlacementReport, place};
use crate::step::StepRequest;
use tracing::debug;

use display::{render_json, render_lines};

/// Execute the `stepgen generate` command.
pub fn cmd_generate(args: GenerateArgs, ctx: &RepoContext) -> Result<()> {
    let report = run_generate(&args, ctx)?;
    debug!(
        step = %report.step.id,
        created = report.created_count(),
        dry_run = args.dry_run,
        "generate finished"
    );

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        for line in render_lines(&report) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Validate the arguments and place the documents, without printing.
pub(crate) fn run_generate(args: &GenerateArgs, ctx: &RepoContext) -> Result<PlacementReport> {
    let request = StepRequest::from_args(&args.step.step_number, &args.step.step_name)?;
    place(
        ctx,
        &request,
        PlaceOptions {
            dry_run: args.dry_run,
        },
    )
}
