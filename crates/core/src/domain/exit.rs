// Exit outcome of a finished child process

use crate::application::constants::EXIT_STATUS_MASK;

/// How the child terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal exit with a status code
    Exited(i32),
    /// Terminated by a signal (unix only), no status code available
    Signaled(i32),
}

impl ExitOutcome {
    /// Exit status the launcher propagates
    ///
    /// `Exited(c)` is copied verbatim; `Signaled(s)` becomes `-s` truncated to
    /// an exit status byte, e.g. SIGTERM (15) gives 241.
    pub fn exit_code(&self) -> i32 {
        match *self {
            ExitOutcome::Exited(code) => code,
            ExitOutcome::Signaled(signal) => signal.wrapping_neg() & EXIT_STATUS_MASK,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}
