// Diagnose use case: explain why the bundled binary does (not) start

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::constants::VERSION_FLAG;
use super::launcher::LauncherConfig;
use crate::domain::Invocation;
use crate::port::{FileProbe, ProcessSpawner};

/// Diagnosis report for the co-located binary
///
/// Every failure is recorded as a field; producing a report never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub binary_name: String,
    pub search_dir: Option<PathBuf>,
    pub candidate: Option<PathBuf>,
    pub exists: bool,
    pub executable: bool,
    pub size_bytes: Option<u64>,
    pub version: Option<String>,
    pub version_error: Option<String>,
}

impl Diagnosis {
    /// Whether the launcher would find the binary
    pub fn resolved(&self) -> bool {
        self.exists && self.executable
    }

    /// Resolved and, if probed, the version check passed
    pub fn healthy(&self) -> bool {
        self.resolved() && self.version_error.is_none()
    }
}

/// Builds [`Diagnosis`] reports using the same ports as the launcher
pub struct Diagnoser {
    config: LauncherConfig,
    file_probe: Arc<dyn FileProbe>,
    spawner: Arc<dyn ProcessSpawner>,
}

impl Diagnoser {
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

    /// Inspect `dir` for the binary; run `<binary> --version` if
    /// `probe_version` is set and the binary resolves
    pub fn diagnose(&self, dir: Option<&Path>, probe_version: bool) -> Diagnosis {
        let mut report = Diagnosis {
            binary_name: self.config.binary_name.clone(),
            search_dir: dir.map(Path::to_path_buf),
            candidate: None,
            exists: false,
            executable: false,
            size_bytes: None,
            version: None,
            version_error: None,
        };

        let Some(dir) = dir else {
            return report;
        };

        let candidate = self.config.candidate(dir);
        report.exists = self.file_probe.exists(&candidate);
        if report.exists {
            report.executable = self.file_probe.is_executable(&candidate);
            report.size_bytes = self.file_probe.file_size(&candidate);
        }
        report.candidate = Some(candidate);

        if probe_version && report.resolved() {
            self.probe_version(&mut report);
        }

        info!(
            candidate = ?report.candidate,
            exists = report.exists,
            executable = report.executable,
            healthy = report.healthy(),
            "Diagnosis complete"
        );

        report
    }

    fn probe_version(&self, report: &mut Diagnosis) {
        let Some(candidate) = report.candidate.clone() else {
            return;
        };
        let invocation = Invocation::new(
            candidate,
            [VERSION_FLAG],
            self.config.environment.clone(),
        );

        debug!(program = %invocation.program.display(), "Probing version");

        match self.spawner.capture(&invocation) {
            Ok(output) if output.outcome.success() => {
                report.version = first_line(&output.stdout);
                if report.version.is_none() {
                    report.version_error = Some("no version printed".to_string());
                }
            }
            Ok(output) => {
                let mut message =
                    format!("exited with status {}", output.outcome.exit_code());
                if let Some(line) = first_line(&output.stderr) {
                    message.push_str(": ");
                    message.push_str(&line);
                }
                report.version_error = Some(message);
            }
            Err(e) => report.version_error = Some(e.to_string()),
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExitOutcome;
    use crate::port::file_probe::MockFileProbe;
    use crate::port::process_spawner::MockProcessSpawner;
    use crate::port::{CapturedOutput, SpawnError};

    fn probe(exists: bool, executable: bool) -> MockFileProbe {
        let mut probe = MockFileProbe::new();
        probe.expect_exists().return_const(exists);
        probe.expect_is_executable().return_const(executable);
        probe.expect_file_size().return_const(Some(2048u64));
        probe
    }

    fn diagnoser(probe: MockFileProbe, spawner: MockProcessSpawner) -> Diagnoser {
        Diagnoser::new(LauncherConfig::default(), Arc::new(probe), Arc::new(spawner))
    }

    fn captured(code: i32, stdout: &str, stderr: &str) -> CapturedOutput {
        CapturedOutput {
            outcome: ExitOutcome::Exited(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_healthy_binary() {
        let mut spawner = MockProcessSpawner::new();
        spawner
            .expect_capture()
            .withf(|inv: &Invocation| inv.args == vec![std::ffi::OsString::from("--version")])
            .times(1)
            .returning(|_| Ok(captured(0, "\n2024.08.06\n", "")));
        let report = diagnoser(probe(true, true), spawner).diagnose(Some(Path::new("/app")), true);

        assert!(report.healthy());
        assert_eq!(report.candidate, Some(PathBuf::from("/app/yt-dlp")));
        assert_eq!(report.size_bytes, Some(2048));
        assert_eq!(report.version.as_deref(), Some("2024.08.06"));
    }

    #[test]
    fn test_missing_binary_skips_probe() {
        let mut probe = MockFileProbe::new();
        probe.expect_exists().return_const(false);
        probe.expect_is_executable().never();
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_capture().never();

        let report = diagnoser(probe, spawner).diagnose(Some(Path::new("/app")), true);

        assert!(!report.exists);
        assert!(!report.resolved());
        assert_eq!(report.size_bytes, None);
    }

    #[test]
    fn test_not_executable() {
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_capture().never();

        let report = diagnoser(probe(true, false), spawner).diagnose(Some(Path::new("/app")), true);

        assert!(report.exists);
        assert!(!report.executable);
        assert!(!report.healthy());
    }

    #[test]
    fn test_version_nonzero_exit() {
        let mut spawner = MockProcessSpawner::new();
        spawner
            .expect_capture()
            .returning(|_| Ok(captured(2, "", "ImportError: no module\n")));

        let report = diagnoser(probe(true, true), spawner).diagnose(Some(Path::new("/app")), true);

        assert!(!report.healthy());
        assert_eq!(
            report.version_error.as_deref(),
            Some("exited with status 2: ImportError: no module")
        );
    }

    #[test]
    fn test_version_spawn_error() {
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_capture().returning(|_| {
            Err(SpawnError::SpawnFailed(
                "Permission denied (os error 13)".to_string(),
            ))
        });

        let report = diagnoser(probe(true, true), spawner).diagnose(Some(Path::new("/app")), true);

        assert_eq!(
            report.version_error.as_deref(),
            Some("Permission denied (os error 13)")
        );
    }

    #[test]
    fn test_skip_version_probe() {
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_capture().never();

        let report = diagnoser(probe(true, true), spawner).diagnose(Some(Path::new("/app")), false);

        assert!(report.healthy());
        assert_eq!(report.version, None);
    }

    #[test]
    fn test_candidate_matches_launcher() {
        use crate::application::Launcher;

        let config = LauncherConfig {
            binary_name: "yt-dlp_macos".to_string(),
            ..Default::default()
        };
        let launcher = Launcher::new(
            config.clone(),
            Arc::new(MockFileProbe::new()),
            Arc::new(MockProcessSpawner::new()),
        );
        let mut probe = MockFileProbe::new();
        probe.expect_exists().return_const(false);
        let diagnoser = Diagnoser::new(config, Arc::new(probe), Arc::new(MockProcessSpawner::new()));

        let report = diagnoser.diagnose(Some(Path::new("/bundle/Resources")), false);

        assert_eq!(
            report.candidate,
            Some(launcher.candidate(Path::new("/bundle/Resources")))
        );
        assert_eq!(report.candidate, Some(PathBuf::from("/bundle/Resources/yt-dlp_macos")));
    }

    #[test]
    fn test_unknown_dir() {
        let report = diagnoser(MockFileProbe::new(), MockProcessSpawner::new()).diagnose(None, true);

        assert_eq!(report.search_dir, None);
        assert_eq!(report.candidate, None);
        assert!(!report.healthy());
    }
}
