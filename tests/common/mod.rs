// Shared helpers for integration tests: temp repositories, hook fixtures,
// and running the real binary. Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_git-hooks-init"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs `git-hooks-init install --root <root>`.
/// Returns (stdout, stderr, exit_code).
pub fn run_install(root: &Path) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(["install", "--root"])
        .arg(root)
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Creates a temp directory holding a fresh git repository.
pub fn init_repo() -> TempDir {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let status = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(tmp.path())
        .status()
        .expect("git must be installed to run these tests");
    assert!(status.success(), "git init failed");
    tmp
}

/// A temp directory with no repository in it, for failure cases.
pub fn empty_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Reads back the configured hooks path from the repository, if any.
pub fn configured_hooks_path(root: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "core.hooksPath"])
        .current_dir(root)
        .output()
        .expect("failed to run git config --get");
    output
        .status
        .success()
        .then(|| String::from_utf8(output.stdout).unwrap().trim().to_string())
}

/// Creates `hooks/` under `root` and populates it with files at the given
/// unix modes (modes are a no-op on non-unix hosts).
pub fn write_hooks(root: &Path, files: &[(&str, u32)]) {
    let hooks = root.join("hooks");
    std::fs::create_dir_all(&hooks).expect("failed to create hooks dir");
    for (name, mode) in files {
        let path = hooks.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").expect("failed to write hook file");
        set_mode(&path, *mode);
    }
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .expect("failed to set mode");
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) {}

#[cfg(unix)]
pub fn mode_of(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("failed to stat")
        .permissions()
        .mode()
        & 0o7777
}
