//! Deterministic placement of a step's documents.
//!
//! Paths are derived only from the step identifier and slug:
//!
//! ```text
//! docs/operations/step-NN/STEP-NN-<slug>.md
//! docs/prompts/operational/step-NN/STEP-NN-<slug>-prompt.md
//! ```
//!
//! Relative paths always use `/` so they can be embedded in the generated
//! documents; [`RepoContext::path_for`] turns them into native absolute paths.

use crate::context::RepoContext;
use crate::step::StepRequest;
use serde::Serialize;
use std::path::PathBuf;

/// Category root for operations contract documents.
pub const OPERATIONS_DIR: &str = "docs/operations";

/// Category root for planner prompt documents.
pub const PROMPTS_DIR: &str = "docs/prompts/operational";

/// Repository-relative locations for one step's document pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepLayout {
    pub operations_dir: String,
    pub operations_doc: String,
    pub prompts_dir: String,
    pub prompt_doc: String,
}

impl StepLayout {
    pub fn for_step(request: &StepRequest) -> Self {
        let step_dir = request.id.dir_name();
        let stem = request.file_stem();

        let operations_dir = format!("{}/{}", OPERATIONS_DIR, step_dir);
        let prompts_dir = format!("{}/{}", PROMPTS_DIR, step_dir);
        let operations_doc = format!("{}/{}.md", operations_dir, stem);
        let prompt_doc = format!("{}/{}-prompt.md", prompts_dir, stem);

        Self {
            operations_dir,
            operations_doc,
            prompts_dir,
            prompt_doc,
        }
    }

    /// Absolute paths of the two documents under `ctx`.
    pub fn resolve(&self, ctx: &RepoContext) -> ResolvedLayout {
        ResolvedLayout {
            operations_dir: ctx.path_for(&self.operations_dir),
            operations_doc: ctx.path_for(&self.operations_doc),
            prompts_dir: ctx.path_for(&self.prompts_dir),
            prompt_doc: ctx.path_for(&self.prompt_doc),
        }
    }
}

/// [`StepLayout`] anchored at a repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub operations_dir: PathBuf,
    pub operations_doc: PathBuf,
    pub prompts_dir: PathBuf,
    pub prompt_doc: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(number: &str, name: &str) -> StepRequest {
        StepRequest::from_args(number, &[name]).unwrap()
    }

    #[test]
    fn relative_paths_follow_the_convention() {
        let layout = StepLayout::for_step(&request("2", "Infrastructure Baseline"));
        assert_eq!(layout.operations_dir, "docs/operations/step-02");
        assert_eq!(
            layout.operations_doc,
            "docs/operations/step-02/STEP-02-infrastructure-baseline.md"
        );
        assert_eq!(layout.prompts_dir, "docs/prompts/operational/step-02");
        assert_eq!(
            layout.prompt_doc,
            "docs/prompts/operational/step-02/STEP-02-infrastructure-baseline-prompt.md"
        );
    }

    #[test]
    fn wide_step_numbers_are_not_truncated() {
        let layout = StepLayout::for_step(&request("123", "Late Step"));
        assert_eq!(
            layout.operations_doc,
            "docs/operations/step-123/STEP-123-late-step.md"
        );
    }

    #[test]
    fn resolved_paths_live_under_the_root() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RepoContext::at(temp_dir.path());
        let resolved = StepLayout::for_step(&request("2", "Infrastructure Baseline")).resolve(&ctx);

        let root = temp_dir.path();
        assert_eq!(
            resolved.operations_doc,
            root.join("docs")
                .join("operations")
                .join("step-02")
                .join("STEP-02-infrastructure-baseline.md")
        );
        assert_eq!(
            resolved.prompt_doc,
            root.join("docs")
                .join("prompts")
                .join("operational")
                .join("step-02")
                .join("STEP-02-infrastructure-baseline-prompt.md")
        );
        assert_eq!(resolved.operations_doc.parent(), Some(resolved.operations_dir.as_path()));
        assert_eq!(resolved.prompt_doc.parent(), Some(resolved.prompts_dir.as_path()));
        assert!(resolved.operations_dir.starts_with(ctx.path_for(OPERATIONS_DIR)));
        assert!(resolved.prompts_dir.starts_with(ctx.path_for(PROMPTS_DIR)));
    }
}
