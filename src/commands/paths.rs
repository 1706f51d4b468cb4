//! Implementation of the `stepgen paths` command.
//!
//! Read-only: prints the repository-relative location of both documents and
//! whether each one is already present.

use crate::cli::StepArgs;
use crate::context::RepoContext;
use crate::error::Result;
use crate::layout::StepLayout;
use crate::step::StepRequest;

/// Execute the `stepgen paths` command.
pub fn cmd_paths(args: StepArgs, ctx: &RepoContext) -> Result<()> {
    for line in path_lines(&args, ctx)? {
        println!("{}", line);
    }
    Ok(())
}

fn path_lines(args: &StepArgs, ctx: &RepoContext) -> Result<Vec<String>> {
    let request = StepRequest::from_args(&args.step_number, &args.step_name)?;
    let layout = StepLayout::for_step(&request);

    let entries = [
        ("operations", &layout.operations_doc),
        ("prompt", &layout.prompt_doc),
    ];

    Ok(entries
        .into_iter()
        .map(|(label, relative)| {
            let state = if ctx.path_for(relative).exists() {
                "present"
            } else {
                "absent"
            };
            format!("{:<10}  {:<7}  {}", label, state, relative)
        })
        .collect())
}
