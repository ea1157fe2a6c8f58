/// Host platform family, as far as the bootstrapper cares: Windows has no
/// POSIX permission bits, everything else does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Detect the family of the host this process runs on.
    pub fn host() -> Self {
        Self::from_family(std::env::consts::FAMILY)
    }

    /// Map a [`std::env::consts::FAMILY`] string to a platform.
    ///
    /// Anything that is not the Windows family is treated as unix-like: the
    /// permission step is skipped only where execute bits do not exist.
    pub fn from_family(family: &str) -> Self {
        if family == "windows" {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }
}
