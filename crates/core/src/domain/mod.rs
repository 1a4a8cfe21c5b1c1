// Domain Layer - Launch entities (no behaviour beyond pure data)

pub mod environment;
pub mod exit;
pub mod invocation;

// Re-exports
pub use environment::LaunchEnvironment;
pub use exit::ExitOutcome;
pub use invocation::Invocation;
