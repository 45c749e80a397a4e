//! One full diff-and-patch run
//!
//! Fatal errors (unreadable repository, unresolvable commits) abort the run.
//! A patch file that cannot be written is skipped with a warning and reported
//! in the summary, so one bad path does not blank out the rest of the set.

use git2::Repository;
use patchfan_core::RunConfig;
use tracing::{info, warn};

use crate::collector::ChangeSet;
use crate::engine::diff_commit_range;
use crate::error::{PatchError, Result};
use crate::patch::write_patch;
use crate::resolver::resolve_content;

/// A change whose patch file could not be written.
#[derive(Debug)]
pub struct SkippedPatch {
    pub new_path: String,
    pub reason: PatchError,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Every changed path between the two trees, in enumeration order.
    pub changes: ChangeSet,
    /// Patch files written (or, on a dry run, the paths that would be written).
    pub written: Vec<std::path::PathBuf>,
    /// Per-file failures, in enumeration order.
    pub skipped: Vec<SkippedPatch>,
}

/// Run the whole pipeline: resolve the commit range, enumerate changed paths,
/// and emit one patch file per path.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let repo = Repository::open(&config.repository)?;
    let changes = diff_commit_range(&repo, &config.range)?;
    info!(range = %config.range, changed_paths = changes.len(), "diff complete");

    let output_dir = config.output_dir();
    let mut written = Vec::new();
    let mut skipped = Vec::new();

    for record in &changes {
        let old = resolve_content(&repo, record.old_id);
        let new = resolve_content(&repo, record.new_id);

        match write_patch(output_dir, record, &old, &new, &config.patch, config.dry_run) {
            Ok(target) => written.push(target),
            Err(reason) => {
                warn!(path = %record.new_path, error = %reason, "skipping patch");
                skipped.push(SkippedPatch {
                    new_path: record.new_path.clone(),
                    reason,
                });
            }
        }
    }

    Ok(RunReport {
        changes,
        written,
        skipped,
    })
}
