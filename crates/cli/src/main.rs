//! ytdlp-doctor - Diagnostics for the bundled yt-dlp binary
//!
//! Answers "why does the launcher say the binary is missing / not running"
//! without touching the launcher's own argument surface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tabled::{Table, Tabled};

use ytdlp_launcher::telemetry;
use ytdlp_launcher_core::application::constants::BINARY_NAME;
use ytdlp_launcher_core::application::{Diagnoser, Diagnosis, LauncherConfig};
use ytdlp_launcher_core::domain::LaunchEnvironment;
use ytdlp_launcher_system::{executable_dir, SystemFileProbe, SystemProcessSpawner};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "ytdlp-doctor")]
#[command(about = "Diagnose the yt-dlp binary used by yt-dlp-launcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory to look in (default: this executable's directory)
    #[arg(long, global = true, env = "YTDLP_DOCTOR_DIR")]
    dir: Option<PathBuf>,

    /// File name of the binary to look for
    #[arg(long, global = true, default_value = BINARY_NAME)]
    binary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the binary exists, is executable and starts
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Do not run `<binary> --version`
        #[arg(long)]
        skip_version: bool,
    },

    /// Show the environment overrides applied to the child
    Env,
}

#[derive(Tabled)]
struct EnvRow {
    variable: String,
    value: String,
}

fn env_rows(env: &LaunchEnvironment) -> Vec<EnvRow> {
    env.iter()
        .map(|(name, value)| EnvRow {
            variable: name.to_string(),
            value: format!("{value:?}"),
        })
        .collect()
}

fn mark(ok: bool) -> colored::ColoredString {
    if ok {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    }
}

/// Human-readable report lines
fn render(report: &Diagnosis) -> Vec<String> {
    let mut lines = Vec::new();

    let dir = report
        .search_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string());
    lines.push(format!("Search directory: {dir}"));

    let Some(candidate) = &report.candidate else {
        lines.push(format!("{} cannot determine where to look", mark(false)));
        return lines;
    };

    lines.push(format!(
        "{} {} exists: {}",
        mark(report.exists),
        report.binary_name,
        candidate.display()
    ));
    if !report.exists {
        return lines;
    }

    lines.push(format!("{} executable", mark(report.executable)));
    if let Some(size) = report.size_bytes {
        lines.push(format!("  size: {:.1} MB", size as f64 / (1024.0 * 1024.0)));
    }

    if let Some(version) = &report.version {
        lines.push(format!("{} version {version}", mark(true)));
    }
    if let Some(error) = &report.version_error {
        lines.push(format!("{} version check failed: {error}", mark(false)));
    }

    lines
}

fn run(cli: Cli) -> Result<bool> {
    let config = LauncherConfig {
        binary_name: cli.binary,
        ..Default::default()
    };

    match cli.command {
        Commands::Check { json, skip_version } => {
            let dir = cli.dir.or_else(executable_dir);
            let diagnoser = Diagnoser::new(
                config,
                Arc::new(SystemFileProbe::new()),
                Arc::new(SystemProcessSpawner::new()),
            );
            let report = diagnoser.diagnose(dir.as_deref(), !skip_version);

            if json {
                let text =
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
                println!("{text}");
            } else {
                for line in render(&report) {
                    println!("{line}");
                }
                println!();
                if report.healthy() {
                    println!("{}", "✓ yt-dlp-launcher will run this binary".green().bold());
                } else {
                    println!("{}", "✗ yt-dlp-launcher cannot run this binary".red().bold());
                }
            }

            Ok(report.healthy())
        }

        Commands::Env => {
            println!("{}", "Environment applied to the child".cyan().bold());
            println!();
            println!("{}", Table::new(env_rows(&config.environment)));
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = telemetry::init_logging(DEFAULT_LOG_FILTER) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
