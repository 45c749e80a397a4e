//! Unified-diff rendering and patch-file output
//!
//! The text diff itself is delegated to the `similar` crate; this module only
//! feeds it both sides' content, serializes the result in unified format, and
//! writes one `.patch` file per changed path.

use std::fs;
use std::path::{Component, Path, PathBuf};

use patchfan_core::PatchOptions;
use similar::{Algorithm, TextDiffConfig};
use tracing::{debug, info};

use crate::collector::ChangeRecord;
use crate::error::PatchError;
use crate::resolver::ResolvedContent;

/// Render the unified-diff patch text for one change.
///
/// Absent sides diff as empty content, so an added file renders as a pure
/// addition and a deleted file as a pure deletion. The headers follow git's
/// `a/`, `b/` convention with `/dev/null` for a side that does not exist.
pub fn render_patch(
    record: &ChangeRecord,
    old: &ResolvedContent,
    new: &ResolvedContent,
    options: &PatchOptions,
) -> String {
    let old_text = old.text();
    let new_text = new.text();

    let mut config = TextDiffConfig::default();
    config.algorithm(Algorithm::Myers);
    if let Some(timeout) = options.timeout {
        config.timeout(timeout);
    }
    let diff = config.diff_lines(old_text.as_ref(), new_text.as_ref());

    let old_header = if old.present {
        format!("a/{}", record.old_path)
    } else {
        "/dev/null".to_string()
    };
    let new_header = if new.present {
        format!("b/{}", record.new_path)
    } else {
        "/dev/null".to_string()
    };

    diff.unified_diff()
        .context_radius(options.context_lines)
        .header(&old_header, &new_header)
        .to_string()
}

/// Compute the output file path `{output_dir}/{new_path}.patch`, rejecting
/// new paths that would escape the output directory.
pub fn patch_target(output_dir: &Path, new_path: &str) -> Result<PathBuf, PatchError> {
    let rel = Path::new(new_path);
    let escapes = rel.is_absolute()
        || rel
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
    if escapes {
        return Err(PatchError::UnsafePath(rel.to_path_buf()));
    }
    Ok(output_dir.join(format!("{new_path}.patch")))
}

/// Diff one change and write the patch file, overwriting any existing file at
/// the target path. Parent directories are created as needed so changes under
/// subdirectories land next to their file.
///
/// With `dry_run` the patch is still computed but nothing touches the
/// filesystem; the would-be target path is returned either way.
pub fn write_patch(
    output_dir: &Path,
    record: &ChangeRecord,
    old: &ResolvedContent,
    new: &ResolvedContent,
    options: &PatchOptions,
    dry_run: bool,
) -> Result<PathBuf, PatchError> {
    let target = patch_target(output_dir, &record.new_path)?;
    let patch = render_patch(record, old, new, options);

    if dry_run {
        debug!(target = %target.display(), bytes = patch.len(), "dry run, skipping write");
        return Ok(target);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| PatchError::Write {
            path: target.clone(),
            source,
        })?;
    }
    fs::write(&target, patch).map_err(|source| PatchError::Write {
        path: target.clone(),
        source,
    })?;

    info!(target = %target.display(), kind = record.kind.as_str(), "wrote patch");
    Ok(target)
}
