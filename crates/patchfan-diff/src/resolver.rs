//! Blob content lookup
//!
//! A blob id that does not resolve is not an error here: added and deleted
//! files carry a zero id on the side where they do not exist, and the diff
//! step substitutes empty content for that side.

use std::borrow::Cow;

use git2::{Oid, Repository};
use tracing::debug;

/// Raw content of one side of a change. `present == false` means the file did
/// not exist on that side; the bytes are empty in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub bytes: Vec<u8>,
    pub present: bool,
}

impl ResolvedContent {
    pub fn present(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            present: true,
        }
    }

    pub fn absent() -> Self {
        Self {
            bytes: Vec::new(),
            present: false,
        }
    }

    /// Lossy text view for the line-oriented diff step.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Look up blob content by id, mapping both the zero id and a lookup miss to
/// the absent state.
pub fn resolve_content(repo: &Repository, id: Oid) -> ResolvedContent {
    if id.is_zero() {
        return ResolvedContent::absent();
    }
    match repo.find_blob(id) {
        Ok(blob) => ResolvedContent::present(blob.content().to_vec()),
        Err(e) => {
            debug!(%id, error = %e, "blob not found, treating side as absent");
            ResolvedContent::absent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_has_empty_bytes() {
        let content = ResolvedContent::absent();
        assert!(!content.present);
        assert!(content.bytes.is_empty());
        assert_eq!(content.text(), "");
    }

    #[test]
    fn test_present_keeps_bytes() {
        let content = ResolvedContent::present(b"hello\n".to_vec());
        assert!(content.present);
        assert_eq!(content.text(), "hello\n");
    }

    #[test]
    fn test_zero_id_is_absent_without_repo_io() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let content = resolve_content(&repo, Oid::zero());
        assert!(!content.present);
    }

    #[test]
    fn test_unknown_id_is_absent_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let id = Oid::from_bytes(&[7; 20]).unwrap();
        let content = resolve_content(&repo, id);
        assert!(!content.present);
        assert!(content.bytes.is_empty());
    }
}
