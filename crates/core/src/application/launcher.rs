// Launcher use case: configure environment, resolve binary, dispatch
//
// START -> ENV_CONFIGURED -> PATH_RESOLVED {found, not_found}
//   not_found      -> BinaryNotFound (exit 1, nothing spawned)
//   found          -> CHILD_SPAWNED -> CHILD_EXITED (exit = child code)
//   spawn failure  -> SpawnFailed (exit 1)

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::constants::BINARY_NAME;
use crate::domain::{ExitOutcome, Invocation, LaunchEnvironment};
use crate::error::{LaunchError, Result};
use crate::port::{FileProbe, ProcessSpawner};

/// What to launch and with which environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// File name looked up next to the launcher
    pub binary_name: String,
    /// Overrides applied to the child
    pub environment: LaunchEnvironment,
}

impl LauncherConfig {
    /// Candidate path: `dir` joined with the binary name
    pub fn candidate(&self, dir: &Path) -> PathBuf {
        dir.join(&self.binary_name)
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            binary_name: BINARY_NAME.to_string(),
            environment: LaunchEnvironment::sanitized(),
        }
    }
}

/// Single-shot launcher for a co-located executable
pub struct Launcher {
    config: LauncherConfig,
    file_probe: Arc<dyn FileProbe>,
    spawner: Arc<dyn ProcessSpawner>,
}

impl Launcher {
    /// Create a new launcher
    ///
    /// # Example
    /// ```ignore
    /// let launcher = Launcher::new(
    ///     LauncherConfig::default(),
    ///     Arc::new(SystemFileProbe),
    ///     Arc::new(SystemProcessSpawner),
    /// );
    /// ```
    pub fn new(
        config: LauncherConfig,
        file_probe: Arc<dyn FileProbe>,
        spawner: Arc<dyn ProcessSpawner>,
    ) -> Self {
        Self {
            config,
            file_probe,
            spawner,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Environment the child will receive on top of the inherited one
    pub fn configure_environment(&self) -> LaunchEnvironment {
        self.config.environment.clone()
    }

    pub fn candidate(&self, dir: &Path) -> PathBuf {
        self.config.candidate(dir)
    }

    /// Resolve the binary next to `dir`
    ///
    /// Returns `None` (the not-found sentinel) when `dir` is unknown, or the
    /// candidate is missing or not executable. Never fails.
    pub fn resolve(&self, dir: Option<&Path>) -> Option<PathBuf> {
        let Some(dir) = dir else {
            debug!("Launcher directory unknown");
            return None;
        };

        let candidate = self.candidate(dir);
        if !self.file_probe.exists(&candidate) {
            debug!(candidate = %candidate.display(), "Candidate does not exist");
            return None;
        }
        if !self.file_probe.is_executable(&candidate) {
            debug!(candidate = %candidate.display(), "Candidate is not executable");
            return None;
        }

        Some(candidate)
    }

    /// Resolve the binary and run it with `args`, blocking until it exits
    ///
    /// # Errors
    /// - LaunchError::BinaryNotFound if resolution yields nothing; no
    ///   process is spawned in that case
    /// - LaunchError::SpawnFailed if the OS fails to start or wait on the child
    pub fn dispatch<I, S>(&self, dir: Option<&Path>, args: I) -> Result<ExitOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let env = self.configure_environment();

        let program = self.resolve(dir).ok_or_else(|| LaunchError::BinaryNotFound {
            name: self.config.binary_name.clone(),
        })?;

        let invocation = Invocation::new(program, args, env);

        info!(
            program = %invocation.program.display(),
            args = ?invocation.args,
            "Spawning child process"
        );

        let outcome = self.spawner.run(&invocation).map_err(|e| {
            warn!(error = %e, "Child process could not be run");
            LaunchError::SpawnFailed {
                name: self.config.binary_name.clone(),
                details: e.to_string(),
            }
        })?;

        info!(
            outcome = ?outcome,
            exit_code = outcome.exit_code(),
            "Child process exited"
        );

        Ok(outcome)
    }
}
