// Invocation: everything needed to start the child once

use std::ffi::OsString;
use std::path::PathBuf;

use super::LaunchEnvironment;

/// A single child launch: program, forwarded arguments, environment overrides
///
/// Arguments are opaque `OsString`s taken verbatim from the launcher's own
/// command line; they are never parsed or re-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: LaunchEnvironment,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I, env: LaunchEnvironment) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            env,
        }
    }

    /// Full child argument vector: `[program] + args`
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}
