// File Probe Port
// Abstraction over the file-system checks used for binary resolution

use std::path::Path;

/// File-system queries needed to resolve and diagnose the target binary
///
/// Implementations:
/// - SystemFileProbe: real file system (`ytdlp-launcher-system`)
#[cfg_attr(test, mockall::automock)]
pub trait FileProbe: Send + Sync {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether the current process may execute `path`
    fn is_executable(&self, path: &Path) -> bool;

    /// Size in bytes, `None` if it cannot be read
    fn file_size(&self, path: &Path) -> Option<u64>;
}
