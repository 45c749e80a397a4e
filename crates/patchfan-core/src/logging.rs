//! Opt-in tracing setup
//!
//! Logging is off unless the user asks for it with `--log`; with a file target
//! the output goes through a non-blocking appender whose guard must outlive the
//! run so buffered lines are flushed on exit.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Where log output goes, derived from the `--log[=FILE]` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// No `--log` flag: no subscriber is installed, tracing calls are no-ops.
    #[default]
    Disabled,
    /// `--log` without a file: human-readable output on stderr.
    Stderr,
    /// `--log=FILE`: append to the given file.
    File(PathBuf),
}

/// Install the global subscriber for the chosen target.
///
/// Returns the appender guard when logging to a file; callers keep it alive
/// until the process exits.
pub fn init_logging(target: &LogTarget) -> Option<WorkerGuard> {
    match target {
        LogTarget::Disabled => None,
        LogTarget::Stderr => {
            fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(std::io::stderr)
                .init();
            None
        }
        LogTarget::File(path) => {
            let dir = match path.parent() {
                Some(p) if p != Path::new("") => p,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "patchfan.log".into());
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
    }
}
