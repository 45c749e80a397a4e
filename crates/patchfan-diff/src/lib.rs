//! Commit-range tree diffing and per-file patch generation
//!
//! The pipeline resolves a `OLD..NEW` commit range into two tree snapshots,
//! collects one record per changed path, fetches both sides' blob content
//! (tolerating a side that does not exist), and writes one unified-diff patch
//! file per changed path.
//!
//! ## Modules
//!
//! - `engine`: commit resolution and tree-to-tree structural diff
//! - `collector`: ordered, deduplicated set of changed-path records
//! - `resolver`: blob content lookup with absence as a first-class state
//! - `patch`: unified-diff rendering and patch-file output
//! - `pipeline`: one full diff-and-patch run

mod collector;
mod engine;
mod error;
mod patch;
mod pipeline;
mod resolver;

pub use collector::{ChangeKind, ChangeRecord, ChangeSet};
pub use engine::diff_commit_range;
pub use error::{Error, PatchError, Result};
pub use patch::{patch_target, render_patch, write_patch};
pub use pipeline::{run, RunReport, SkippedPatch};
pub use resolver::{resolve_content, ResolvedContent};
