//! Filesystem utilities for stepgen.
//!
//! Generated documents are written once and never replaced.

pub mod exclusive;

pub use exclusive::{WriteOutcome, ensure_dir, write_new_file};
