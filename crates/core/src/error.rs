// Central Error Type for the Launcher

use thiserror::Error;

/// Launch-level error type
///
/// `Display` renders the exact diagnostic line written to stderr.
/// A child that starts and exits non-zero is NOT a `LaunchError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// Target executable missing or not executable at the expected path
    #[error("Error: {name} binary not found")]
    BinaryNotFound { name: String },

    /// The OS refused or failed to create (or wait on) the child process
    #[error("Error running {name}: {details}")]
    SpawnFailed { name: String, details: String },
}

impl LaunchError {
    /// Process exit status the launcher terminates with for this error
    pub fn exit_code(&self) -> i32 {
        crate::application::constants::LAUNCH_FAILURE_EXIT_CODE
    }
}

/// Result type alias using LaunchError
pub type Result<T> = std::result::Result<T, LaunchError>;
