// File probe implementation
// reason: nix for access(2) so execute permission matches what execve checks
use std::path::{Path, PathBuf};
use tracing::debug;

use ytdlp_launcher_core::port::FileProbe;

/// File probe backed by the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileProbe;

impl SystemFileProbe {
    pub fn new() -> Self {
        Self
    }
}

impl FileProbe for SystemFileProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_executable(&self, path: &Path) -> bool {
        #[cfg(unix)]
        {
            use nix::unistd::{access, AccessFlags};

            access(path, AccessFlags::X_OK).is_ok()
        }

        #[cfg(not(unix))]
        {
            // No execute bit: any existing regular file counts
            path.is_file()
        }
    }

    fn file_size(&self, path: &Path) -> Option<u64> {
        std::fs::metadata(path).ok().map(|m| m.len())
    }
}

/// Directory holding the running executable, `None` if it cannot be determined
///
/// On Linux `current_exe` resolves symlinks, so a symlinked launcher looks
/// next to the file the link points at, not next to the link.
pub fn executable_dir() -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(Path::to_path_buf),
        Err(e) => {
            debug!(error = %e, "Cannot determine current executable");
            None
        }
    }
}
