//! Changed-path accumulation
//!
//! The structural diff reports one delta per changed path, but the enumeration
//! is allowed to call back more than once for the same file. The collector
//! keeps the first sighting per old path and ignores the rest, preserving
//! insertion order.

use std::collections::HashSet;

use git2::{Delta, DiffDelta, Oid};
use tracing::debug;

/// Kind of change a record represents. Renames are taken as reported by the
/// structural diff, never re-detected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
    Renamed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Modified => "modified",
            ChangeKind::Renamed => "renamed",
        }
    }
}

impl From<Delta> for ChangeKind {
    fn from(status: Delta) -> Self {
        match status {
            Delta::Added => ChangeKind::Added,
            Delta::Deleted => ChangeKind::Deleted,
            Delta::Renamed => ChangeKind::Renamed,
            _ => ChangeKind::Modified,
        }
    }
}

/// One changed path between the two trees, pairing the old path/blob id with
/// the new ones. A zero id means the file does not exist on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub old_path: String,
    pub new_path: String,
    pub old_id: Oid,
    pub new_id: Oid,
    pub kind: ChangeKind,
}

/// Ordered set of [`ChangeRecord`]s, unique by old path.
///
/// Owned by a single run and returned by value from enumeration; there is no
/// shared state between runs.
#[derive(Debug, Default)]
pub struct ChangeSet {
    records: Vec<ChangeRecord>,
    seen: HashSet<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record unless its old path was already recorded. Returns
    /// whether the record was kept.
    pub fn record(
        &mut self,
        old_path: String,
        new_path: String,
        old_id: Oid,
        new_id: Oid,
        kind: ChangeKind,
    ) -> bool {
        if self.seen.contains(&old_path) {
            debug!(path = %old_path, "duplicate delta for path, keeping first sighting");
            return false;
        }
        self.seen.insert(old_path.clone());
        self.records.push(ChangeRecord {
            old_path,
            new_path,
            old_id,
            new_id,
            kind,
        });
        true
    }

    /// Accumulate one structural delta from the tree-to-tree diff.
    ///
    /// Deltas without a usable path on either side are dropped. When one side
    /// has no path (libgit2 leaves it unset for some statuses), the other
    /// side's path stands in for both.
    pub fn record_delta(&mut self, delta: &DiffDelta<'_>) -> bool {
        let old_path = delta
            .old_file()
            .path()
            .or_else(|| delta.new_file().path())
            .map(|p| p.to_string_lossy().into_owned());
        let new_path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path())
            .map(|p| p.to_string_lossy().into_owned());
        let (Some(old_path), Some(new_path)) = (old_path, new_path) else {
            debug!("delta without any path, skipping");
            return false;
        };
        self.record(
            old_path,
            new_path,
            delta.old_file().id(),
            delta.new_file().id(),
            ChangeKind::from(delta.status()),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a ChangeRecord;
    type IntoIter = std::slice::Iter<'a, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut set = ChangeSet::new();
        assert!(set.record("a.txt".into(), "a.txt".into(), oid(1), oid(2), ChangeKind::Modified));
        assert!(set.record("b.txt".into(), "b.txt".into(), oid(3), oid(4), ChangeKind::Added));
        let paths: Vec<&str> = set.iter().map(|r| r.old_path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_duplicate_old_path_keeps_first_sighting() {
        let mut set = ChangeSet::new();
        assert!(set.record("a.txt".into(), "a.txt".into(), oid(1), oid(2), ChangeKind::Modified));
        assert!(!set.record("a.txt".into(), "a.txt".into(), oid(9), oid(9), ChangeKind::Deleted));
        assert_eq!(set.len(), 1);
        let record = &set.records()[0];
        assert_eq!(record.old_id, oid(1));
        assert_eq!(record.new_id, oid(2));
        assert_eq!(record.kind, ChangeKind::Modified);
    }

    #[test]
    fn test_old_paths_pairwise_distinct() {
        let mut set = ChangeSet::new();
        for name in ["x", "y", "x", "z", "y"] {
            set.record(name.into(), name.into(), oid(1), oid(2), ChangeKind::Modified);
        }
        assert_eq!(set.len(), 3);
        let mut paths: Vec<&str> = set.iter().map(|r| r.old_path.as_str()).collect();
        paths.dedup();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_rename_keeps_both_paths() {
        let mut set = ChangeSet::new();
        set.record("old.txt".into(), "new.txt".into(), oid(1), oid(1), ChangeKind::Renamed);
        let record = &set.records()[0];
        assert_eq!(record.old_path, "old.txt");
        assert_eq!(record.new_path, "new.txt");
    }

    #[test]
    fn test_change_kind_from_delta_status() {
        assert_eq!(ChangeKind::from(Delta::Added), ChangeKind::Added);
        assert_eq!(ChangeKind::from(Delta::Deleted), ChangeKind::Deleted);
        assert_eq!(ChangeKind::from(Delta::Renamed), ChangeKind::Renamed);
        assert_eq!(ChangeKind::from(Delta::Modified), ChangeKind::Modified);
        assert_eq!(ChangeKind::from(Delta::Typechange), ChangeKind::Modified);
    }
}
