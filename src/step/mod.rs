//! Step identity: the normalized number, the human name, and its slug.
//!
//! A [`StepRequest`] is everything the document builders and the layout need
//! to know about one invocation.

mod id;
mod slug;


pub use id::{StepId, normalize_step_number};
pub use slug::{Slug, slugify};

use crate::error::{Result, StepError};
use serde::Serialize;

/// A validated request to scaffold one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRequest {
    pub id: StepId,
    pub name: String,
    pub slug: Slug,
}

impl StepRequest {
    /// Build a request from the raw command-line values.
    ///
    /// Name tokens are joined with single spaces and trimmed. The step number
    /// is validated before the name, so a bad number is always the reported
    /// error.
    pub fn from_args<S: AsRef<str>>(raw_number: &str, name_tokens: &[S]) -> Result<Self> {
        let id = normalize_step_number(raw_number)?;

        let name = name_tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        if name.is_empty() {
            return Err(StepError::InvalidInput(
                "STEP name must not be empty".to_string(),
            ));
        }

        let slug = slugify(&name);
        Ok(Self { id, name, slug })
    }

    /// Base file stem shared by both documents (e.g. `STEP-02-infrastructure-baseline`).
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.id, self.slug)
    }
}
