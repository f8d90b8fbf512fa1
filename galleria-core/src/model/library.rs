//! src/model/library.rs
//! ============================================================================
//! # `Library`: the single mutable store behind every view
//!
//! Wraps the [`FileStore`], [`AlbumIndex`] and [`QuickAccessIndex`] behind one
//! mutation API. Callers pass `now` explicitly so retention arithmetic stays
//! deterministic. Every mutation finishes with a purge pass, so a caller never
//! observes a mutation without its derived consequences.
//!
//! The API is tolerant: unknown ids are no-ops reported through the return
//! value. Callers that want strict semantics use [`Library::require`].

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    model::{
        album::{Album, AlbumId, AlbumIndex, AlbumSummary},
        file_record::{FileBreakdown, FileId, FileRecord, Folder},
        file_store::FileStore,
        lifecycle,
        quick_access::{QuickAccessIndex, QuickAccessItem},
    },
    util::names::normalize_name,
};

#[derive(Debug, Clone, Default)]
pub struct Library {
    files: FileStore,
    albums: AlbumIndex,
    quick_access: QuickAccessIndex,
    folders: Vec<Folder>,
}

// ---------------------------------------------------------------------------
// construction + read API
// ---------------------------------------------------------------------------
impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_parts(
        files: FileStore,
        albums: AlbumIndex,
        quick_access: QuickAccessIndex,
        folders: Vec<Folder>,
    ) -> Self {
        Self {
            files,
            albums,
            quick_access,
            folders,
        }
    }

    #[must_use]
    pub const fn files(&self) -> &FileStore {
        &self.files
    }

    #[must_use]
    pub const fn albums(&self) -> &AlbumIndex {
        &self.albums
    }

    #[must_use]
    pub const fn quick_access(&self) -> &QuickAccessIndex {
        &self.quick_access
    }

    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    #[must_use]
    pub fn get(&self, id: &FileId) -> Option<&FileRecord> {
        self.files.get(id)
    }

    /// Strict lookup for callers that treat an unknown id as an error.
    pub fn require(&self, id: &FileId) -> AppResult<&FileRecord> {
        self.files
            .get(id)
            .ok_or_else(|| AppError::FileNotFound(id.clone()))
    }

    /// Strict album lookup.
    pub fn require_album(&self, id: &AlbumId) -> AppResult<&Album> {
        self.albums
            .get(id)
            .ok_or_else(|| AppError::AlbumNotFound(id.clone()))
    }

    #[must_use]
    pub fn list_active(&self) -> Vec<&FileRecord> {
        self.files.list_active()
    }

    #[must_use]
    pub fn list_deleted(&self) -> Vec<&FileRecord> {
        self.files.list_deleted()
    }

    /// Active files of an album. An album that no longer exists lists nothing,
    /// even though records may still carry its id.
    #[must_use]
    pub fn list_by_album(&self, album_id: &AlbumId) -> Vec<&FileRecord> {
        if !self.albums.contains(album_id) {
            return Vec::new();
        }
        self.files.list_by_album(album_id)
    }

    /// The album a record belongs to, or `None` when unfiled or dangling.
    #[must_use]
    pub fn resolve_album(&self, record: &FileRecord) -> Option<&Album> {
        record.album_id.as_ref().and_then(|id| self.albums.get(id))
    }

    #[must_use]
    pub fn album_summaries(&self) -> Vec<AlbumSummary> {
        self.albums
            .iter()
            .map(|album| AlbumSummary {
                id: album.id.clone(),
                name: album.name.clone(),
                file_count: self.files.count_in_album(&album.id),
            })
            .collect()
    }

    #[must_use]
    pub fn quick_access_items(&self) -> Vec<QuickAccessItem> {
        self.quick_access.items(&self.files)
    }

    #[must_use]
    pub fn is_pinned(&self, id: &FileId) -> bool {
        self.quick_access.contains(id)
    }

    #[must_use]
    pub fn breakdown(&self) -> Vec<FileBreakdown> {
        self.files.breakdown()
    }

    /// Days left before purge, or `None` for an unknown id.
    #[must_use]
    pub fn days_remaining(&self, id: &FileId, now: DateTime<Utc>) -> Option<i64> {
        self.files
            .get(id)
            .map(|record| lifecycle::days_remaining(record.deleted_at, now))
    }

    #[must_use]
    pub fn deleted_count(&self) -> usize {
        self.files.iter().filter(|r| r.is_deleted()).count()
    }
}

// ---------------------------------------------------------------------------
// lifecycle transitions
// ---------------------------------------------------------------------------
impl Library {
    /// Move a file to the recycle bin and unpin it. Calling it again re-stamps
    /// the deletion time.
    #[instrument(level = "debug", skip(self), fields(file_id = %id))]
    pub fn soft_delete(&mut self, id: &FileId, now: DateTime<Utc>) -> bool {
        let deleted = self.files.mark_deleted(id, now);
        if deleted {
            self.quick_access.remove_by_id(id);
            info!(file_id = %id, "Moved to recycle bin");
        }
        self.settle(now);
        deleted
    }

    /// Clear the deletion stamp on every listed file that is in the bin.
    /// Unknown and already active ids are ignored.
    #[instrument(level = "debug", skip(self, ids), fields(requested = ids.len()))]
    pub fn recover(&mut self, ids: &[FileId], now: DateTime<Utc>) -> usize {
        let recovered = ids.iter().filter(|id| self.files.clear_deleted(id)).count();
        info!(recovered, requested = ids.len(), "Recovered files");
        self.settle(now);
        recovered
    }

    pub fn recover_all(&mut self, now: DateTime<Utc>) -> usize {
        let ids = self.files.deleted_ids();
        self.recover(&ids, now)
    }

    /// Remove files outright, whatever their state. Confirmation is the
    /// caller's job.
    #[instrument(level = "debug", skip(self, ids), fields(requested = ids.len()))]
    pub fn permanently_delete(&mut self, ids: &[FileId], now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        for id in ids {
            if let Some(record) = self.files.remove(id) {
                if record.is_active() {
                    warn!(file_id = %id, "Permanently deleted a file that was not in the recycle bin");
                }
                self.quick_access.remove_by_id(id);
                removed += 1;
            }
        }
        info!(removed, requested = ids.len(), "Permanently deleted files");
        self.settle(now);
        removed
    }

    pub fn delete_all(&mut self, now: DateTime<Utc>) -> usize {
        let ids = self.files.deleted_ids();
        self.permanently_delete(&ids, now)
    }

    /// Remove every record whose retention window elapsed at `now`.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> Vec<FileId> {
        let purged = self.files.remove_expired(now);
        for id in &purged {
            self.quick_access.remove_by_id(id);
        }
        if !purged.is_empty() {
            info!(count = purged.len(), "Purged expired files from recycle bin");
        }
        purged
    }

    fn settle(&mut self, now: DateTime<Utc>) {
        let purged = self.purge_expired(now);
        debug!(
            purged = purged.len(),
            total = self.files.len(),
            "Library settled after mutation"
        );
    }
}

// ---------------------------------------------------------------------------
// record edits, albums, quick access
// ---------------------------------------------------------------------------
impl Library {
    pub fn insert(&mut self, record: FileRecord, now: DateTime<Utc>) -> Option<FileRecord> {
        debug!(file_id = %record.id, name = %record.name, "Inserting record");
        let replaced = self.files.insert(record);
        self.settle(now);
        replaced
    }

    /// Rename a file. Blank names are rejected and leave the record untouched.
    pub fn rename_file(
        &mut self,
        id: &FileId,
        new_name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let new_name = normalize_name("file_name", new_name)?;
        let renamed = match self.files.get_mut(id) {
            Some(record) => {
                info!(file_id = %id, from = %record.name, to = %new_name, "File renamed");
                record.name = new_name;
                true
            }
            None => false,
        };
        self.settle(now);
        Ok(renamed)
    }

    /// Store editor output and bump the modification time.
    pub fn save_edit(&mut self, id: &FileId, content: String, now: DateTime<Utc>) -> bool {
        let saved = match self.files.get_mut(id) {
            Some(record) => {
                info!(file_id = %id, bytes = content.len(), "Saved edited content");
                record.edited_content = Some(content);
                record.modified_at = Some(now);
                true
            }
            None => false,
        };
        self.settle(now);
        saved
    }

    /// Point a file at an album. Both ids must resolve.
    pub fn assign_to_album(&mut self, id: &FileId, album_id: &AlbumId, now: DateTime<Utc>) -> bool {
        if !self.albums.contains(album_id) {
            warn!(album_id = %album_id, "Assignment to unknown album ignored");
            return false;
        }
        let assigned = match self.files.get_mut(id) {
            Some(record) => {
                let previous = record.album_id.replace(album_id.clone());
                info!(file_id = %id, album_id = %album_id, previous = ?previous, "Assigned to album");
                true
            }
            None => false,
        };
        self.settle(now);
        assigned
    }

    pub fn create_album(&mut self, name: &str, now: DateTime<Utc>) -> AppResult<AlbumId> {
        let id = self.albums.create(name)?;
        self.settle(now);
        Ok(id)
    }

    pub fn rename_album(&mut self, id: &AlbumId, name: &str, now: DateTime<Utc>) -> AppResult<bool> {
        let renamed = self.albums.rename(id, name)?;
        self.settle(now);
        Ok(renamed)
    }

    /// Remove an album. Member files keep their (now dangling) `album_id`.
    pub fn delete_album(&mut self, id: &AlbumId, now: DateTime<Utc>) -> Option<Album> {
        let removed = self.albums.delete(id);
        self.settle(now);
        removed
    }

    /// Toggle a file's pin. `None` when the file is unknown or in the bin.
    pub fn toggle_quick_access(&mut self, id: &FileId, now: DateTime<Utc>) -> Option<bool> {
        let pinnable = self.files.get(id).is_some_and(FileRecord::is_active);
        let result = pinnable.then(|| self.quick_access.toggle(id));
        self.settle(now);
        result
    }

    pub fn remove_from_quick_access(&mut self, id: &FileId, now: DateTime<Utc>) -> bool {
        let removed = self.quick_access.remove_by_id(id);
        self.settle(now);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::file_record::FileKind;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap()
    }

    fn f(id: &str) -> FileId {
        FileId::from(id)
    }

    fn library() -> Library {
        let mut albums = AlbumIndex::new();
        albums.create_with_id(AlbumId::from("albumA"), "A").unwrap();
        albums.create_with_id(AlbumId::from("albumB"), "B").unwrap();

        let files = FileStore::from_records([
            FileRecord::new("f1", "Project Brief.docx", FileKind::Document),
            FileRecord::new("f2", "Budget 2024.xlsx", FileKind::Spreadsheet),
            FileRecord::new("f3", "Iceland Cliff.jpg", FileKind::Image),
        ]);

        let mut quick_access = QuickAccessIndex::new();
        quick_access.toggle(&f("f2"));

        Library::from_parts(files, albums, quick_access, Vec::new())
    }

    fn assert_partition(lib: &Library) {
        let active = lib.list_active();
        let deleted = lib.list_deleted();
        assert_eq!(active.len() + deleted.len(), lib.files().len());
        for record in lib.files().iter() {
            let in_active = active.iter().any(|r| r.id == record.id);
            let in_deleted = deleted.iter().any(|r| r.id == record.id);
            assert_ne!(in_active, in_deleted);
            assert_eq!(in_active, record.deleted_at.is_none());
        }
    }

    #[test]
    fn test_soft_delete_unpins_and_partitions() {
        let mut lib = library();
        assert!(lib.is_pinned(&f("f2")));

        assert!(lib.soft_delete(&f("f2"), t0()));
        assert!(!lib.is_pinned(&f("f2")));
        assert_eq!(lib.deleted_count(), 1);
        assert_partition(&lib);

        assert!(!lib.soft_delete(&f("missing"), t0()));
        assert_partition(&lib);
    }

    #[test]
    fn test_soft_delete_twice_restamps() {
        let mut lib = library();
        lib.soft_delete(&f("f1"), t0());
        let later = t0() + Duration::days(5);
        lib.soft_delete(&f("f1"), later);

        assert_eq!(lib.get(&f("f1")).unwrap().deleted_at, Some(later));
        assert_eq!(lib.days_remaining(&f("f1"), later), Some(30));
    }

    #[test]
    fn test_recover_round_trip() {
        let mut lib = library();
        lib.soft_delete(&f("f1"), t0());

        assert_eq!(lib.recover(&[f("f1")], t0()), 1);
        assert_eq!(lib.recover(&[f("f1")], t0()), 0);

        let record = lib.get(&f("f1")).unwrap();
        assert!(record.deleted_at.is_none());
        assert_partition(&lib);
    }

    #[test]
    fn test_recover_ignores_unknown_and_active() {
        let mut lib = library();
        lib.soft_delete(&f("f3"), t0());

        let count = lib.recover(&[f("f1"), f("nope"), f("f3")], t0());
        assert_eq!(count, 1);
        assert!(lib.list_deleted().is_empty());
    }

    #[test]
    fn test_recover_all_and_delete_all() {
        let mut lib = library();
        lib.soft_delete(&f("f1"), t0());
        lib.soft_delete(&f("f3"), t0());

        assert_eq!(lib.recover_all(t0()), 2);
        assert!(lib.list_deleted().is_empty());

        lib.soft_delete(&f("f1"), t0());
        lib.soft_delete(&f("f3"), t0());
        assert_eq!(lib.delete_all(t0()), 2);
        assert_eq!(lib.files().len(), 1);
        assert!(lib.get(&f("f2")).is_some());
    }

    #[test]
    fn test_permanently_delete_any_state() {
        let mut lib = library();
        let removed = lib.permanently_delete(&[f("f2"), f("ghost")], t0());

        assert_eq!(removed, 1);
        assert!(lib.get(&f("f2")).is_none());
        assert!(lib.quick_access_items().is_empty());
        assert!(lib.require(&f("f2")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_purge_boundary_at_thirty_days() {
        let mut lib = library();
        lib.soft_delete(&f("f1"), t0());

        assert!(lib.purge_expired(t0() + Duration::days(29)).is_empty());
        assert!(lib.list_deleted().iter().any(|r| r.id == f("f1")));

        let purged = lib.purge_expired(t0() + Duration::days(30));
        assert_eq!(purged, vec![f("f1")]);
        assert!(lib.get(&f("f1")).is_none());
    }

    #[test]
    fn test_purge_is_idempotent() {
        let mut lib = library();
        lib.soft_delete(&f("f1"), t0());
        lib.soft_delete(&f("f3"), t0() + Duration::days(10));

        let now = t0() + Duration::days(31);
        lib.purge_expired(now);
        let first: Vec<FileRecord> = lib.files().iter().cloned().collect();
        lib.purge_expired(now);
        let second: Vec<FileRecord> = lib.files().iter().cloned().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_any_mutation_purges_expired() {
        let mut lib = library();
        lib.soft_delete(&f("f1"), t0());

        lib.toggle_quick_access(&f("f3"), t0() + Duration::days(45));
        assert!(lib.get(&f("f1")).is_none());
    }

    #[test]
    fn test_reassignment_moves_derived_counts() {
        let mut lib = library();
        let a = AlbumId::from("albumA");
        let b = AlbumId::from("albumB");

        assert!(lib.assign_to_album(&f("f1"), &a, t0()));
        let counts = |lib: &Library| -> Vec<usize> {
            lib.album_summaries().iter().map(|s| s.file_count).collect()
        };
        assert_eq!(counts(&lib), vec![1, 0]);

        assert!(lib.assign_to_album(&f("f1"), &b, t0()));
        assert_eq!(counts(&lib), vec![0, 1]);

        lib.soft_delete(&f("f1"), t0());
        assert_eq!(counts(&lib), vec![0, 0]);
    }

    #[test]
    fn test_assign_to_unknown_album_is_noop() {
        let mut lib = library();
        assert!(!lib.assign_to_album(&f("f1"), &AlbumId::from("nope"), t0()));
        assert!(lib.get(&f("f1")).unwrap().album_id.is_none());
    }

    #[test]
    fn test_delete_album_leaves_dangling_reference() {
        let mut lib = library();
        let a = AlbumId::from("albumA");
        lib.assign_to_album(&f("f1"), &a, t0());

        assert!(lib.delete_album(&a, t0()).is_some());

        let record = lib.get(&f("f1")).unwrap();
        assert_eq!(record.album_id.as_ref(), Some(&a));
        assert!(lib.resolve_album(record).is_none());
        assert!(lib.list_by_album(&a).is_empty());
        assert!(lib.require_album(&a).is_err());
    }

    #[test]
    fn test_rename_file_fails_closed() {
        let mut lib = library();
        assert!(lib.rename_file(&f("f1"), "  ", t0()).is_err());
        assert_eq!(lib.get(&f("f1")).unwrap().name, "Project Brief.docx");

        assert!(lib.rename_file(&f("f1"), "Brief v2.docx", t0()).unwrap());
        assert_eq!(lib.get(&f("f1")).unwrap().name, "Brief v2.docx");
        assert!(!lib.rename_file(&f("zzz"), "x", t0()).unwrap());
    }

    #[test]
    fn test_save_edit_sets_modified() {
        let mut lib = library();
        let at = t0() + Duration::hours(2);
        assert!(lib.save_edit(&f("f1"), "PROJECT BRIEF".into(), at));

        let record = lib.get(&f("f1")).unwrap();
        assert_eq!(record.edited_content.as_deref(), Some("PROJECT BRIEF"));
        assert_eq!(record.modified_at, Some(at));
    }

    #[test]
    fn test_quick_access_rejects_deleted_files() {
        let mut lib = library();
        lib.soft_delete(&f("f3"), t0());
        assert_eq!(lib.toggle_quick_access(&f("f3"), t0()), None);
        assert_eq!(lib.toggle_quick_access(&f("f1"), t0()), Some(true));
        assert!(lib.remove_from_quick_access(&f("f1"), t0()));
    }
}
