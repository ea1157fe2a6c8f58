pub mod hook_name;
pub mod platform;
pub mod repo_root;

pub use hook_name::is_hook_name;
pub use platform::Platform;
pub use repo_root::{RepoRoot, RootError};
