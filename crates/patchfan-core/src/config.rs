//! Run configuration handed to the diff pipeline
//!
//! The CLI layer validates arguments and converts them into a [`RunConfig`]
//! before the pipeline touches the repository. Commit-range parsing lives here
//! so malformed ranges are rejected without any repository I/O.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Delimiter between the two ends of a commit range, as in `abc123..def456`.
pub const RANGE_DELIMITER: &str = "..";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid commit range '{0}': expected exactly two commits separated by '..'")]
    InvalidRange(String),
}

/// A pair of commit specs parsed from a `OLD..NEW` range string.
///
/// Each side is kept verbatim; resolution (short SHAs, tags, refs) is the
/// repository layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub old: String,
    pub new: String,
}

impl FromStr for CommitRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(RANGE_DELIMITER).collect();
        match parts.as_slice() {
            [old, new] if !old.is_empty() && !new.is_empty() => Ok(CommitRange {
                old: (*old).to_string(),
                new: (*new).to_string(),
            }),
            _ => Err(ConfigError::InvalidRange(s.to_string())),
        }
    }
}

impl std::fmt::Display for CommitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.old, RANGE_DELIMITER, self.new)
    }
}

/// Tuning knobs forwarded to the text-diff component.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Context lines around each hunk, git's default is 3.
    pub context_lines: usize,
    /// Upper bound on diff computation time for pathological inputs.
    pub timeout: Option<Duration>,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            timeout: None,
        }
    }
}

/// Validated configuration for one diff-and-patch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory of the git repository.
    pub repository: PathBuf,
    /// The two commits to diff.
    pub range: CommitRange,
    /// Where patch files land; defaults to the repository directory.
    pub output_dir: Option<PathBuf>,
    /// Compute everything but skip the file writes.
    pub dry_run: bool,
    pub patch: PatchOptions,
}

impl RunConfig {
    pub fn new(repository: impl Into<PathBuf>, range: CommitRange) -> Self {
        Self {
            repository: repository.into(),
            range,
            output_dir: None,
            dry_run: false,
            patch: PatchOptions::default(),
        }
    }

    /// Effective output directory for patch files.
    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.repository)
    }
}
