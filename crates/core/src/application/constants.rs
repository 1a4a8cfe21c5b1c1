// Launcher constants (no magic values)

/// File name of the co-located executable the launcher dispatches to
pub const BINARY_NAME: &str = "yt-dlp";

/// `PYTHONUNBUFFERED` value requesting unbuffered output
pub const UNBUFFERED_VALUE: &str = "1";

/// `LC_ALL` value: POSIX/C locale
pub const LOCALE_VALUE: &str = "C";

/// `PYTHONWARNINGS` filter silencing unverified-HTTPS-request warnings
pub const WARNINGS_FILTER_VALUE: &str = "ignore:Unverified HTTPS request";

/// Exit status for both launch failures (binary not found, spawn failed)
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 1;

/// Mask applied to `-signal` when the child was killed by a signal
pub const EXIT_STATUS_MASK: i32 = 0xFF;

/// Flag passed to the binary by the version probe
pub const VERSION_FLAG: &str = "--version";
