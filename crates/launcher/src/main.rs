//! yt-dlp Launcher - Main Entry Point
//!
//! Runs the `yt-dlp` binary sitting next to this executable with a
//! sanitized environment, forwards every argument verbatim and exits with
//! the child's status code.

use std::process::ExitCode;
use std::sync::Arc;

use ytdlp_launcher::telemetry;
use ytdlp_launcher_core::application::{Launcher, LauncherConfig};
use ytdlp_launcher_system::{executable_dir, SystemFileProbe, SystemProcessSpawner};

/// Logging stays silent unless explicitly enabled
const DEFAULT_LOG_FILTER: &str = "off";

fn main() -> ExitCode {
    // 1. Initialize logging (stderr only, off by default).
    // On failure logging stays off: stderr carries only the launch diagnostics.
    telemetry::init_logging(DEFAULT_LOG_FILTER).ok();

    // 2. Setup dependencies (DI wiring)
    let launcher = Launcher::new(
        LauncherConfig::default(),
        Arc::new(SystemFileProbe::new()),
        Arc::new(SystemProcessSpawner::new()),
    );

    // 3. Dispatch with the arguments we received, untouched
    let dir = executable_dir();
    let code = match launcher.dispatch(dir.as_deref(), std::env::args_os().skip(1)) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };

    exit_code(code)
}

/// Convert to `ExitCode`; codes outside `u8` go through `process::exit`
fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(byte) => ExitCode::from(byte),
        Err(_) => std::process::exit(code),
    }
}
