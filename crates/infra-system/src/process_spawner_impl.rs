// Process spawner implementation
// reason: std::process for a blocking, single-child launch (no runtime needed)
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

use ytdlp_launcher_core::domain::{ExitOutcome, Invocation};
use ytdlp_launcher_core::port::{CapturedOutput, ProcessSpawner, SpawnError};

/// Process spawner backed by `std::process::Command`
///
/// Environment overrides are applied to the child only; the launcher's own
/// environment is never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessSpawner;

impl SystemProcessSpawner {
    pub fn new() -> Self {
        Self
    }

    /// Build the command: program, verbatim args, env overrides on top of
    /// the inherited environment
    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).envs(invocation.env.iter());
        command
    }
}

/// Map an exit status to an outcome
fn outcome_of(status: ExitStatus) -> ExitOutcome {
    if let Some(code) = status.code() {
        return ExitOutcome::Exited(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return ExitOutcome::Signaled(signal);
        }
    }

    // Neither a code nor a signal: report a generic failure
    ExitOutcome::Exited(1)
}

impl ProcessSpawner for SystemProcessSpawner {
    fn run(&self, invocation: &Invocation) -> Result<ExitOutcome, SpawnError> {
        let mut child = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| SpawnError::SpawnFailed(e.to_string()))?;

        info!(pid = child.id(), "Child process started");

        let status = child
            .wait()
            .map_err(|e| SpawnError::WaitFailed(e.to_string()))?;

        debug!(status = %status, "Child process finished");

        Ok(outcome_of(status))
    }

    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, SpawnError> {
        let child = Self::command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SpawnError::SpawnFailed(e.to_string()))?;

        let output = child
            .wait_with_output()
            .map_err(|e| SpawnError::WaitFailed(e.to_string()))?;

        Ok(CapturedOutput {
            outcome: outcome_of(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard};
    use ytdlp_launcher_core::domain::LaunchEnvironment;

    // Avoid ETXTBSY: no test forks while another still holds a script open
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_run_exit_code() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "child", "exit 42");

        let outcome = SystemProcessSpawner::new()
            .run(&Invocation::new(script, Vec::<String>::new(), LaunchEnvironment::new()))
            .unwrap();

        assert_eq!(outcome, ExitOutcome::Exited(42));
    }

    #[test]
    fn test_capture_args_and_env() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "child",
            "printf '%s|' \"$@\"; printf '%s' \"$LC_ALL\"",
        );
        let env = LaunchEnvironment::new().with("LC_ALL", "C");

        let output = SystemProcessSpawner::new()
            .capture(&Invocation::new(script, ["a b", "--x"], env))
            .unwrap();

        assert!(output.outcome.success());
        assert_eq!(output.stdout, "a b|--x|C");
    }

    #[test]
    fn test_signal_outcome() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "child", "kill -TERM $$");

        let outcome = SystemProcessSpawner::new()
            .run(&Invocation::new(script, Vec::<String>::new(), LaunchEnvironment::new()))
            .unwrap();

        assert_eq!(outcome, ExitOutcome::Signaled(15));
        assert_eq!(outcome.exit_code(), 241);
    }

    #[test]
    fn test_spawn_failure_carries_os_text() {
        let _guard = serial();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = SystemProcessSpawner::new()
            .run(&Invocation::new(missing, Vec::<String>::new(), LaunchEnvironment::new()))
            .unwrap_err();

        match err {
            SpawnError::SpawnFailed(details) => assert!(details.contains("os error")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
