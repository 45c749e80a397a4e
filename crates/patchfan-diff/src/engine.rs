//! Commit resolution and tree-to-tree structural diff

use git2::{Commit, Repository};
use patchfan_core::CommitRange;
use tracing::debug;

use crate::collector::ChangeSet;
use crate::error::Result;

/// Resolve a commit spec to a commit object. Goes through revparse so short
/// SHAs, tags and ref names all work.
fn resolve_commit<'repo>(repo: &'repo Repository, spec: &str) -> Result<Commit<'repo>> {
    let commit = repo.revparse_single(spec)?.peel_to_commit()?;
    debug!(spec, id = %commit.id(), "resolved commit");
    Ok(commit)
}

/// Diff the root trees of the two commits in `range` and collect one record
/// per changed path.
///
/// Renames appear only if the underlying diff reports them; no similarity
/// detection is requested on top.
pub fn diff_commit_range(repo: &Repository, range: &CommitRange) -> Result<ChangeSet> {
    let old_commit = resolve_commit(repo, &range.old)?;
    let new_commit = resolve_commit(repo, &range.new)?;

    let old_tree = old_commit.tree()?;
    let new_tree = new_commit.tree()?;

    let diff = repo.diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)?;

    let mut changes = ChangeSet::new();
    diff.foreach(
        &mut |delta, _progress| {
            changes.record_delta(&delta);
            true
        },
        None,
        None,
        None,
    )?;

    debug!(range = %range, changed_paths = changes.len(), "tree diff complete");
    Ok(changes)
}
