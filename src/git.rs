use std::path::Path;
use std::process::Command;

/// Configuration key git uses to look up its hooks directory.
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// The in-tree directory the key is pointed at, relative to the repository
/// root. Recorded verbatim; never created or validated here.
pub const HOOKS_PATH_VALUE: &str = "utils/git/hooks";

/// Errors from the `git config` step.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GitError {
    /// The subprocess could not be started at all: git is not installed, or
    /// the working directory is missing or inaccessible.
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    /// git ran and reported failure through its exit status.
    #[error("git config exited with code {code}")]
    Exit { code: i32 },
}

/// Point `core.hooksPath` at the in-tree hooks directory.
///
/// Runs `git config core.hooksPath utils/git/hooks` with `root` as the
/// subprocess working directory and blocks until it finishes. A non-zero
/// exit is reported as [`GitError::Exit`]; death by signal maps to code -1.
/// git's own stderr passes through to the user.
pub fn configure_hooks_path(root: &Path) -> Result<(), GitError> {
    let status = Command::new("git")
        .args(["config", HOOKS_PATH_KEY, HOOKS_PATH_VALUE])
        .current_dir(root)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(GitError::Exit {
            code: status.code().unwrap_or(-1),
        })
    }
}
