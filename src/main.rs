use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Repository bootstrapper: configures git's hook lookup path and grants
/// execute permission to the in-tree hook scripts.
#[derive(Debug, Parser)]
#[command(name = "git-hooks-init", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Point core.hooksPath at the in-tree hooks directory and make the hook scripts executable
    Install {
        /// Repository root (defaults to the parent of this binary's directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install { root } => git_hooks_init::run_install(root.as_deref()),
    }
}
