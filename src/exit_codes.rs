//! Exit code constants for the stepgen CLI.
//!
//! - 0: Success (including files that already existed)
//! - 1: Invalid input (bad step number, blank name, bad `--root`)
//! - 2: Usage error (missing arguments), reported by clap itself
//! - 3: Filesystem failure (directory creation or write)
//! - 4: Template rendering failure
//! - 5: `--json` report serialization failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Invalid input: unparseable or negative step number, blank name, bad root.
pub const INVALID_INPUT: i32 = 1;

/// Filesystem failure: a directory could not be created or a file written.
pub const FILESYSTEM_FAILURE: i32 = 3;

/// Template rendering failure.
pub const TEMPLATE_FAILURE: i32 = 4;

/// The `--json` report could not be serialized.
pub const SERIALIZATION_FAILURE: i32 = 5;
