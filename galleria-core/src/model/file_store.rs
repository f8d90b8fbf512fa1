//! src/model/file_store.rs
//! ============================================================================
//! # `FileStore`: owner of every `FileRecord`
//!
//! Insertion-ordered map from id to record. Derived views (active, deleted,
//! per-album) are recomputed on each call rather than cached, so a mutation
//! and the views derived from it can never disagree.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::model::{
    album::AlbumId,
    file_record::{FileBreakdown, FileId, FileKind, FileRecord},
    lifecycle,
};

#[derive(Debug, Clone, Default)]
pub struct FileStore {
    records: IndexMap<FileId, FileRecord>,
}

impl FileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records. Later duplicates replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = FileRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Insert or replace a record, returning the replaced one.
    pub fn insert(&mut self, record: FileRecord) -> Option<FileRecord> {
        self.records.insert(record.id.clone(), record)
    }

    #[must_use]
    pub fn get(&self, id: &FileId) -> Option<&FileRecord> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &FileId) -> Option<&mut FileRecord> {
        self.records.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &FileId) -> bool {
        self.records.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn list_active(&self) -> Vec<&FileRecord> {
        self.iter().filter(|r| r.is_active()).collect()
    }

    #[must_use]
    pub fn list_deleted(&self) -> Vec<&FileRecord> {
        self.iter().filter(|r| r.is_deleted()).collect()
    }

    /// Active records referencing `album_id`.
    #[must_use]
    pub fn list_by_album(&self, album_id: &AlbumId) -> Vec<&FileRecord> {
        self.iter()
            .filter(|r| r.is_active() && r.album_id.as_ref() == Some(album_id))
            .collect()
    }

    #[must_use]
    pub fn count_in_album(&self, album_id: &AlbumId) -> usize {
        self.iter()
            .filter(|r| r.is_active() && r.album_id.as_ref() == Some(album_id))
            .count()
    }

    #[must_use]
    pub fn deleted_ids(&self) -> Vec<FileId> {
        self.iter()
            .filter(|r| r.is_deleted())
            .map(|r| r.id.clone())
            .collect()
    }

    /// Stamp `deleted_at = now`. Re-stamps an already deleted record.
    pub fn mark_deleted(&mut self, id: &FileId, now: DateTime<Utc>) -> bool {
        match self.records.get_mut(id) {
            Some(record) => {
                record.deleted_at = Some(now);
                true
            }
            None => false,
        }
    }

    /// Clear `deleted_at`. Only records currently in the bin count.
    pub fn clear_deleted(&mut self, id: &FileId) -> bool {
        match self.records.get_mut(id) {
            Some(record) if record.is_deleted() => {
                record.deleted_at = None;
                true
            }
            _ => false,
        }
    }

    /// Remove a record outright, keeping the order of the rest.
    pub fn remove(&mut self, id: &FileId) -> Option<FileRecord> {
        self.records.shift_remove(id)
    }

    /// Drop every record whose retention window has elapsed at `now`.
    pub fn remove_expired(&mut self, now: DateTime<Utc>) -> Vec<FileId> {
        let expired: Vec<FileId> = self
            .iter()
            .filter(|r| lifecycle::is_expired(r, now))
            .map(|r| r.id.clone())
            .collect();

        for id in &expired {
            self.records.shift_remove(id);
        }

        if !expired.is_empty() {
            debug!(count = expired.len(), "Removed expired records");
        }
        expired
    }

    /// Per-kind counts of active files, skipping kinds with no files.
    #[must_use]
    pub fn breakdown(&self) -> Vec<FileBreakdown> {
        let breakdown: Vec<FileBreakdown> = FileKind::ALL
            .iter()
            .map(|&kind| FileBreakdown {
                kind,
                count: self.iter().filter(|r| r.is_active() && r.kind == kind).count(),
            })
            .filter(|b| b.count > 0)
            .collect();

        trace!(kinds = breakdown.len(), "Computed file breakdown");
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    fn store() -> FileStore {
        FileStore::from_records([
            FileRecord::new("1", "3D Model.obj", FileKind::Model3d),
            FileRecord::new("2", "Project Brief.docx", FileKind::Document)
                .with_album(AlbumId::from("ak")),
            FileRecord::new("5", "Design Specs.docx", FileKind::Document),
            FileRecord::new("6", "Iceland Cliff.jpg", FileKind::Image)
                .with_album(AlbumId::from("ak")),
        ])
    }

    #[test]
    fn test_active_and_deleted_partition_store() {
        let mut store = store();
        assert!(store.mark_deleted(&FileId::from("2"), now()));
        assert!(store.mark_deleted(&FileId::from("6"), now()));

        let active = store.list_active();
        let deleted = store.list_deleted();

        assert_eq!(active.len() + deleted.len(), store.len());
        for record in &active {
            assert!(!deleted.iter().any(|d| d.id == record.id));
        }
        assert_eq!(store.deleted_ids(), vec![FileId::from("2"), FileId::from("6")]);
    }

    #[test]
    fn test_clear_deleted_ignores_active_and_unknown() {
        let mut store = store();
        assert!(!store.clear_deleted(&FileId::from("1")));
        assert!(!store.clear_deleted(&FileId::from("missing")));
        assert!(!store.mark_deleted(&FileId::from("missing"), now()));
    }

    #[test]
    fn test_album_listing_skips_deleted() {
        let mut store = store();
        let ak = AlbumId::from("ak");
        assert_eq!(store.count_in_album(&ak), 2);

        store.mark_deleted(&FileId::from("6"), now());
        let names: Vec<&str> = store
            .list_by_album(&ak)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Project Brief.docx"]);
        assert_eq!(store.count_in_album(&ak), 1);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store = store();
        store.remove(&FileId::from("2"));
        let ids: Vec<&str> = store.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5", "6"]);
    }

    #[test]
    fn test_remove_expired_is_idempotent() {
        let mut store = store();
        store.mark_deleted(&FileId::from("1"), now() - Duration::days(31));
        store.mark_deleted(&FileId::from("5"), now() - Duration::days(2));

        let first = store.remove_expired(now());
        assert_eq!(first, vec![FileId::from("1")]);
        let snapshot: Vec<FileRecord> = store.iter().cloned().collect();

        assert!(store.remove_expired(now()).is_empty());
        let again: Vec<FileRecord> = store.iter().cloned().collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn test_breakdown_counts_active_only() {
        let mut store = store();
        store.mark_deleted(&FileId::from("1"), now());

        let breakdown = store.breakdown();
        assert_eq!(
            breakdown,
            vec![
                FileBreakdown {
                    kind: FileKind::Image,
                    count: 1
                },
                FileBreakdown {
                    kind: FileKind::Document,
                    count: 2
                },
            ]
        );
        assert_eq!(breakdown[1].label(), FileKind::Document.label());
    }
}
