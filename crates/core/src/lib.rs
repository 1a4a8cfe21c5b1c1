// yt-dlp Launcher Core - Launch Logic & Ports
// NO process creation, NO file-system access (hexagonal core)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{LaunchError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
