use std::path::Path;
use std::process::ExitCode;

use crate::domain::{Platform, RepoRoot, RootError};
use crate::git::{self, GitError};
use crate::permissions::{self, PermissionError};

/// Exit code for failures other than the explicitly modeled git-config one.
const EXIT_FAILURE: u8 = 2;

/// Any failure the install flow cannot recover from.
///
/// `git config` returning non-zero is special-cased in [`run_on`] before the
/// generic handler: it has its own stdout message and exit code 1.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub(crate) enum InstallError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Root(#[from] RootError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Git(#[from] GitError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Permissions(#[from] PermissionError),
}

/// Execute the install subcommand against the host platform.
pub(crate) fn run(root: Option<&Path>) -> ExitCode {
    ExitCode::from(run_on(root, Platform::host()))
}

/// Execute the install flow with the platform injected, and map the result
/// to a process exit code: 0 on success (including the Windows early exit),
/// 1 when git itself reports failure, [`EXIT_FAILURE`] for anything else.
pub(crate) fn run_on(root: Option<&Path>, platform: Platform) -> u8 {
    println!("git-hooks-init called");

    match install(root, platform) {
        Ok(()) => 0,
        Err(InstallError::Git(GitError::Exit { code })) => {
            println!("Something went wrong.\nError code: {code}\n");
            1
        }
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            EXIT_FAILURE
        }
    }
}

/// The linear install sequence: resolve root, configure the hooks path,
/// branch on platform, grant execute bits. Fails fast — the first error
/// aborts the rest with no rollback of already-applied changes.
fn install(root: Option<&Path>, platform: Platform) -> Result<(), InstallError> {
    let root = RepoRoot::resolve(root)?;

    git::configure_hooks_path(root.as_path())?;
    println!("Hooks were configured successfully.");

    // Windows has no POSIX execute bits; configuration completes the job.
    if platform.is_windows() {
        return Ok(());
    }

    permissions::grant_execute(&root.hooks_dir())?;
    println!("Permissions were granted to all hooks successfully.");
    Ok(())
}
