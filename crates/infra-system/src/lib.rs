// yt-dlp Launcher Infrastructure - System Adapters
// Implements: FileProbe, ProcessSpawner

pub mod file_probe_impl;
pub mod process_spawner_impl;

pub use file_probe_impl::{executable_dir, SystemFileProbe};
pub use process_spawner_impl::SystemProcessSpawner;
