use std::path::{Path, PathBuf};

use crate::domain::is_hook_name;

/// Owner-execute permission bit (`S_IXUSR`).
pub const OWNER_EXECUTE: u32 = 0o100;

/// Errors from the permission-granting step.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PermissionError {
    /// The hooks directory is missing or cannot be listed.
    #[error("failed to read hooks directory {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A hook file's permissions could not be read or updated.
    #[error("failed to update permissions on {}: {source}", path.display())]
    Chmod {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Grant the owner-execute bit to every hook script in `hooks_dir`.
///
/// Entries are selected by [`is_hook_name`]; everything else (samples, dotted
/// files, names that are not valid UTF-8) is left untouched. Each selected
/// file's mode becomes `old | 0o100` — no other bit changes, so running this
/// twice is the same as running it once.
///
/// Returns the number of files updated. The first failure aborts the
/// remaining list; files already processed keep their new bits.
pub fn grant_execute(hooks_dir: &Path) -> Result<usize, PermissionError> {
    let read_dir_err = |source| PermissionError::ReadDir {
        dir: hooks_dir.to_path_buf(),
        source,
    };
    let entries = std::fs::read_dir(hooks_dir).map_err(read_dir_err)?;

    let mut granted = 0;
    for entry in entries {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_hook_name(name) {
            continue;
        }
        make_executable(&entry.path())?;
        granted += 1;
    }
    Ok(granted)
}

/// Set `mode | OWNER_EXECUTE` on `path`, leaving every other bit as it was.
///
/// Compiles to a no-op on targets without POSIX permission bits; the caller
/// never reaches here on Windows because of the platform branch.
fn make_executable(path: &Path) -> Result<(), PermissionError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let chmod_err = |source| PermissionError::Chmod {
            path: path.to_path_buf(),
            source,
        };
        let mut perms = std::fs::metadata(path).map_err(chmod_err)?.permissions();
        perms.set_mode(perms.mode() | OWNER_EXECUTE);
        std::fs::set_permissions(path, perms).map_err(chmod_err)?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}
