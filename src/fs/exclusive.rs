//! No-clobber file creation.
//!
//! Documents are never overwritten. A write opens the target with
//! create-new semantics (`O_CREAT | O_EXCL` on POSIX, `CREATE_NEW` on
//! Windows), so a file that appears between an existence check and the
//! write is reported as already present instead of being replaced.
//!
//! # Failure Behavior
//!
//! - The content is written in one `write_all` and synced to disk
//! - If writing or syncing fails, the partially written file is removed

use crate::error::{Result, StepError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Result of a no-clobber write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and now holds the full content.
    Written,
    /// The file already existed and was left untouched.
    AlreadyExists,
}

/// Create `path` with `content`, leaving any existing file untouched.
///
/// The parent directory must already exist.
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<WriteOutcome> {
    let path = path.as_ref();

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::AlreadyExists),
        Err(e) => {
            return Err(StepError::Filesystem(format!(
                "failed to create '{}': {}",
                path.display(),
                e
            )));
        }
    };

    if let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(StepError::Filesystem(format!(
            "failed to write '{}': {}",
            path.display(),
            e
        )));
    }

    Ok(WriteOutcome::Written)
}

/// Create `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| {
        StepError::Filesystem(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}
