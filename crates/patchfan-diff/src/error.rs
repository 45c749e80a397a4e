use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors. Any of these aborts the whole run; there is no
/// partial-success mode once the repository or the trees cannot be resolved.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] patchfan_core::ConfigError),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error, propagating libgit2's raw code where
    /// one exists.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Git(e) => {
                let raw = (e.raw_code() as i32).abs();
                if raw == 0 {
                    1
                } else {
                    raw
                }
            }
            Error::Io(_) => 1,
        }
    }
}

/// Per-file patch-write failures. These are recoverable: the run skips the
/// file, keeps going, and reports a summary at the end.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("refusing unsafe output path '{0}'")]
    UnsafePath(PathBuf),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
