// Port Layer - Interfaces for the operating system

pub mod file_probe;
pub mod process_spawner;

// Re-exports
pub use file_probe::FileProbe;
pub use process_spawner::{CapturedOutput, ProcessSpawner, SpawnError};
