pub mod domain;
pub mod git;
pub mod permissions;

pub(crate) mod cli;

/// Run the install subcommand: configure the hooks path, then grant execute
/// permissions on non-Windows hosts.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Not a stable
/// integration API — callers should use [`git::configure_hooks_path`] and
/// [`permissions::grant_execute`] directly.
pub fn run_install(root: Option<&std::path::Path>) -> std::process::ExitCode {
    cli::install::run(root)
}
