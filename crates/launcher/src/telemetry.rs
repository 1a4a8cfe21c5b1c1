//! Logging setup shared by `yt-dlp-launcher` and `ytdlp-doctor`
//!
//! Logs always go to stderr: stdout belongs to the child process.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives (EnvFilter syntax)
pub const LOG_FILTER_ENV: &str = "YTDLP_LAUNCHER_LOG";

/// Output format: `json`, `pretty`, anything else is compact text
pub const LOG_FORMAT_ENV: &str = "YTDLP_LAUNCHER_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

/// Initialize the global subscriber
///
/// # Environment Variables
///
/// - `YTDLP_LAUNCHER_LOG`: filter directives (default: `default_filter`)
/// - `YTDLP_LAUNCHER_LOG_FORMAT`: `json` | `pretty` | compact
///
/// # Example
///
/// ```text
/// YTDLP_LAUNCHER_LOG=debug YTDLP_LAUNCHER_LOG_FORMAT=json \
///     ./yt-dlp-launcher --version
/// ```
pub fn init_logging(default_filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    let format = std::env::var(LOG_FORMAT_ENV)
        .map(|v| LogFormat::parse(&v))
        .unwrap_or(LogFormat::Compact);

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
