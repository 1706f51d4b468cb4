//! Error types for the stepgen CLI.
//!
//! Uses thiserror for derive macros. A target file that already exists is
//! not an error; it is reported as a skipped outcome by the placement layer.

use crate::exit_codes;
use crate::templates::TemplateError;
use thiserror::Error;

/// Main error type for stepgen operations.
#[derive(Error, Debug)]
pub enum StepError {
    /// Bad step number, blank step name, or unusable `--root`.
    #[error("{0}")]
    InvalidInput(String),

    /// A directory could not be created or a document could not be written.
    #[error("Filesystem operation failed: {0}")]
    Filesystem(String),

    /// An embedded template failed to render.
    #[error("Template rendering failed: {0}")]
    Template(#[from] TemplateError),

    /// The `--json` report could not be serialized.
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StepError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            StepError::Filesystem(_) => exit_codes::FILESYSTEM_FAILURE,
            StepError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            StepError::Serialization(_) => exit_codes::SERIALIZATION_FAILURE,
        }
    }
}

/// Result type alias for stepgen operations.
pub type Result<T> = std::result::Result<T, StepError>;
