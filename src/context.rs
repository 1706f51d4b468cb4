//! Repository-root resolution for stepgen.
//!
//! The root anchor is resolved once at startup and passed explicitly to the
//! placement layer. Resolution order:
//!
//! 1. `--root <DIR>` when given (must be an existing directory)
//! 2. The Git top-level of the current directory
//! 3. The current directory itself

use crate::error::{Result, StepError};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// The repository root that all generated paths are relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Absolute path to the repository root.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Anchor a context at an already-known root without any checks.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        Self {
            repo_root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve the context from an optional override and the current directory.
    pub fn resolve(root_override: Option<&Path>) -> Result<Self> {
        if let Some(root) = root_override {
            return Self::from_override(root);
        }

        let cwd = env::current_dir().map_err(|e| {
            StepError::InvalidInput(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(&cwd))
    }

    /// Resolve the context for a specific working directory.
    ///
    /// Never fails: outside a Git checkout the directory itself is the root.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Self {
        let cwd = cwd.as_ref();

        match git_toplevel(cwd) {
            Some(root) => {
                debug!(root = %root.display(), "using git top-level as repository root");
                Self { repo_root: root }
            }
            None => {
                warn!(
                    cwd = %cwd.display(),
                    "not inside a git repository; using the current directory as repository root"
                );
                Self::at(cwd)
            }
        }
    }

    fn from_override(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(StepError::InvalidInput(format!(
                "repository root '{}' does not exist or is not a directory",
                root.display()
            )));
        }

        let repo_root = root.canonicalize().map_err(|e| {
            StepError::InvalidInput(format!(
                "failed to resolve repository root '{}': {}",
                root.display(),
                e
            ))
        })?;

        debug!(root = %repo_root.display(), "using --root as repository root");
        Ok(Self { repo_root })
    }

    /// Join a `/`-separated repository-relative path onto the root.
    pub fn path_for(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.repo_root.clone(), |path, segment| path.join(segment))
    }
}

/// Ask git for the top-level directory containing `cwd`.
fn git_toplevel(cwd: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| debug!(error = %e, "failed to execute git"))
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let root = stdout.trim();
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DirGuard, create_test_repo};
    use serial_test::serial;
    use tempfile::TempDir;

    fn canonical(path: &Path) -> PathBuf {
        path.canonicalize().unwrap()
    }

    #[test]
    fn path_for_splits_on_forward_slashes() {
        let ctx = RepoContext::at("/repo");
        assert_eq!(
            ctx.path_for("docs/operations/step-01"),
            Path::new("/repo").join("docs").join("operations").join("step-01")
        );
        assert_eq!(ctx.path_for(""), PathBuf::from("/repo"));
    }

    #[test]
    fn override_must_be_an_existing_directory() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing");
        let err = RepoContext::resolve(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, StepError::InvalidInput(_)));

        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let err = RepoContext::resolve(Some(file.as_path())).unwrap_err();
        assert!(matches!(err, StepError::InvalidInput(_)));
    }

    #[test]
    fn override_is_canonicalized() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RepoContext::resolve(Some(temp_dir.path())).unwrap();
        assert_eq!(ctx.repo_root, canonical(temp_dir.path()));
    }

    #[test]
    fn git_subdirectory_resolves_to_toplevel() {
        let temp_dir = create_test_repo();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = RepoContext::resolve_from(&nested);
        assert_eq!(canonical(&ctx.repo_root), canonical(temp_dir.path()));
    }

    #[test]
    #[serial]
    fn resolve_without_override_starts_from_current_directory() {
        let temp_dir = create_test_repo();
        let nested = temp_dir.path().join("tools");
        std::fs::create_dir_all(&nested).unwrap();
        let _guard = DirGuard::new(&nested);

        let ctx = RepoContext::resolve(None).unwrap();
        assert_eq!(canonical(&ctx.repo_root), canonical(temp_dir.path()));
    }
}
