// Application Layer - Use Cases

pub mod constants;
pub mod diagnose;
pub mod launcher;

// Re-exports
pub use diagnose::{Diagnoser, Diagnosis};
pub use launcher::{Launcher, LauncherConfig};
