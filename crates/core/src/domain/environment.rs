// Launch environment: variables forced onto the child process

use crate::application::constants::{
    LOCALE_VALUE, UNBUFFERED_VALUE, WARNINGS_FILTER_VALUE,
};

/// Ordered set of environment overrides applied to the child at spawn time
///
/// Overrides always replace any inherited value; nothing is read from the
/// launcher's own environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchEnvironment {
    vars: Vec<(String, String)>,
}

impl LaunchEnvironment {
    /// Empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// The five overrides every yt-dlp invocation receives
    ///
    /// - `PYTHONPATH` / `PYTHONHOME` cleared so the bundled runtime ignores
    ///   any host interpreter setup
    /// - `PYTHONUNBUFFERED=1` for live progress output
    /// - `LC_ALL=C` for locale-independent parsing
    /// - `PYTHONWARNINGS` silencing unverified-HTTPS-request warnings
    pub fn sanitized() -> Self {
        Self::new()
            .with("PYTHONPATH", "")
            .with("PYTHONHOME", "")
            .with("PYTHONUNBUFFERED", UNBUFFERED_VALUE)
            .with("LC_ALL", LOCALE_VALUE)
            .with("PYTHONWARNINGS", WARNINGS_FILTER_VALUE)
    }

    /// Set `name` to `value`, replacing an earlier override of the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((name, value)),
        }
    }

    #[cfg(test)]
    fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Overrides in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
