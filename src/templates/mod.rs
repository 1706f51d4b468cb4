//! Content builders for the operations and prompt documents.
//!
//! Both documents are rendered from embedded templates against the same
//! bindings, so every invocation produces a pair that agrees on the step
//! identifier, name, slug, and cross-referenced paths. Rendering is pure:
//! identical requests give byte-identical output.

mod operations;
mod prompt;
mod render;


pub use render::{Bindings, TemplateError, render};

use crate::layout::StepLayout;
use crate::step::StepRequest;

/// Bindings shared by both templates.
fn bindings_for(request: &StepRequest) -> Bindings {
    let layout = StepLayout::for_step(request);
    Bindings::new()
        .bind("step_id", request.id.to_string())
        .bind("step_number", request.id.digits())
        .bind("step_name", request.name.as_str())
        .bind("slug", request.slug.as_str())
        .bind("operations_path", layout.operations_doc)
        .bind("prompt_path", layout.prompt_doc)
}

/// Build the operations contract document for a step.
pub fn build_operations_document(request: &StepRequest) -> Result<String, TemplateError> {
    render(operations::NAME, operations::TEMPLATE, &bindings_for(request))
}

/// Build the planner prompt document for a step.
pub fn build_prompt_document(request: &StepRequest) -> Result<String, TemplateError> {
    render(prompt::NAME, prompt::TEMPLATE, &bindings_for(request))
}
