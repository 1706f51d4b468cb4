//! Placement of a step's document pair on disk.
//!
//! For each of the two documents:
//!
//! - if the target already exists it is left untouched and reported as
//!   [`FileStatus::Skipped`]
//! - otherwise the document is built and written in full, and reported as
//!   [`FileStatus::Created`]
//!
//! A skipped operations document does not stop the prompt document from being
//! created, and vice versa. In dry-run mode nothing is written; absent targets
//! are reported as [`FileStatus::Planned`].


use crate::context::RepoContext;
use crate::error::Result;
use crate::fs::{WriteOutcome, ensure_dir, write_new_file};
use crate::layout::StepLayout;
use crate::step::StepRequest;
use crate::templates::{TemplateError, build_operations_document, build_prompt_document};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which half of the document pair an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Operations,
    Prompt,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Operations => "operations",
            DocumentKind::Prompt => "prompt",
        }
    }
}

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was absent and has been written.
    Created,
    /// The file already existed and was not modified.
    Skipped,
    /// Dry run: the file is absent and would be written.
    Planned,
}

/// Outcome for a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Outcomes for both documents of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementReport {
    pub step: StepRequest,
    pub operations: FileOutcome,
    pub prompt: FileOutcome,
}

impl PlacementReport {
    /// Outcomes in the order they were processed.
    pub fn outcomes(&self) -> [&FileOutcome; 2] {
        [&self.operations, &self.prompt]
    }

    /// Number of files written by this run.
    pub(crate) fn created_count(&self) -> usize {
        self.outcomes()
            .iter()
            .filter(|o| o.status == FileStatus::Created)
            .count()
    }
}

/// Options controlling a placement run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceOptions {
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

type Builder = fn(&StepRequest) -> std::result::Result<String, TemplateError>;

/// Create the step's directories and write whichever documents are absent.
pub fn place(
    ctx: &RepoContext,
    request: &StepRequest,
    options: PlaceOptions,
) -> Result<PlacementReport> {
    let layout = StepLayout::for_step(request).resolve(ctx);
    debug!(
        step = %request.id,
        slug = %request.slug,
        operations = %layout.operations_doc.display(),
        prompt = %layout.prompt_doc.display(),
        dry_run = options.dry_run,
        "derived document paths"
    );

    if !options.dry_run {
        for dir in [&layout.operations_dir, &layout.prompts_dir] {
            debug!(dir = %dir.display(), "ensuring directory");
            ensure_dir(dir)?;
        }
    }

    let operations = place_document(
        DocumentKind::Operations,
        &layout.operations_doc,
        request,
        build_operations_document,
        options,
    )?;
    let prompt = place_document(
        DocumentKind::Prompt,
        &layout.prompt_doc,
        request,
        build_prompt_document,
        options,
    )?;

    Ok(PlacementReport {
        step: request.clone(),
        operations,
        prompt,
    })
}

fn place_document(
    kind: DocumentKind,
    path: &Path,
    request: &StepRequest,
    build: Builder,
    options: PlaceOptions,
) -> Result<FileOutcome> {
    let outcome = |status| FileOutcome {
        kind,
        path: path.to_path_buf(),
        status,
    };

    if path.exists() {
        warn!(
            document = kind.label(),
            path = %path.display(),
            "document already exists"
        );
        return Ok(outcome(FileStatus::Skipped));
    }

    if options.dry_run {
        return Ok(outcome(FileStatus::Planned));
    }

    let content = build(request)?;
    match write_new_file(path, &content)? {
        WriteOutcome::Written => {
            info!(
                document = kind.label(),
                path = %path.display(),
                bytes = content.len(),
                "created document"
            );
            Ok(outcome(FileStatus::Created))
        }
        WriteOutcome::AlreadyExists => {
            warn!(
                document = kind.label(),
                path = %path.display(),
                "document appeared before it could be written; leaving it untouched"
            );
            Ok(outcome(FileStatus::Skipped))
        }
    }
}
