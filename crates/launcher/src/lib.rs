//! yt-dlp Launcher - shared setup for the launcher binaries

pub mod telemetry;
