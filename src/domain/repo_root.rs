use std::path::{Path, PathBuf};

/// Error from resolving the repository root.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RootError {
    /// The path of the running executable could not be determined.
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),
    /// The executable's location has no parent directory to step up through.
    #[error("path {0} has no parent directory")]
    NoParent(PathBuf),
}

/// The repository root every other step operates on.
///
/// Resolved once at startup — either from an explicit `--root` argument or
/// from the location of the running executable — and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot(PathBuf);

impl RepoRoot {
    /// Directory under the root holding the hook scripts to be made
    /// executable.
    const HOOKS_DIR: &'static str = "hooks";

    /// Resolve the root from an explicit path, falling back to the parent of
    /// the directory containing the running executable.
    ///
    /// An explicit path is taken verbatim; whether it exists is discovered by
    /// the first operation that uses it.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, RootError> {
        match explicit {
            Some(path) => Ok(RepoRoot(path.to_path_buf())),
            None => Self::from_current_exe(),
        }
    }

    /// Parent of the directory containing this executable.
    ///
    /// Mirrors the "parent of my own location" rule of a setup program living
    /// one level below the repository root.
    fn from_current_exe() -> Result<Self, RootError> {
        let exe = std::env::current_exe().map_err(RootError::CurrentExe)?;
        let bin_dir = exe
            .parent()
            .ok_or_else(|| RootError::NoParent(exe.clone()))?;
        let root = bin_dir
            .parent()
            .ok_or_else(|| RootError::NoParent(bin_dir.to_path_buf()))?;
        Ok(RepoRoot(root.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The `hooks/` directory whose extensionless entries are the hook
    /// scripts.
    pub fn hooks_dir(&self) -> PathBuf {
        self.0.join(Self::HOOKS_DIR)
    }
}
