// Process Spawner Port
// Abstraction for creating the child process and waiting on it

use thiserror::Error;

use crate::domain::{ExitOutcome, Invocation};

/// Output collected by [`ProcessSpawner::capture`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub outcome: ExitOutcome,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn errors (OS-level failure to start or wait on the child)
///
/// A child that runs and exits non-zero is reported through `ExitOutcome`,
/// never through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    #[error("{0}")]
    SpawnFailed(String),

    #[error("failed to wait for child: {0}")]
    WaitFailed(String),
}

/// Process Spawner trait
///
/// Implementations:
/// - SystemProcessSpawner: `std::process::Command` (`ytdlp-launcher-system`)
#[cfg_attr(test, mockall::automock)]
pub trait ProcessSpawner: Send + Sync {
    /// Start the child with inherited stdio and block until it terminates
    ///
    /// # Errors
    /// - SpawnError::SpawnFailed if the OS cannot create the process
    /// - SpawnError::WaitFailed if waiting on the running child fails
    fn run(&self, invocation: &Invocation) -> Result<ExitOutcome, SpawnError>;

    /// Start the child with piped stdout/stderr and collect both
    ///
    /// # Errors
    /// Same as [`ProcessSpawner::run`]
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, SpawnError>;
}
