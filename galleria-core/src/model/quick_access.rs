//! src/model/quick_access.rs
//! ============================================================================
//! # Quick Access: pinned file shortcuts
//!
//! Holds file ids only, in pin order. The `{id, name, kind}` projection is
//! rebuilt from the store on read so renames show up without bookkeeping.

use indexmap::IndexSet;
use tracing::debug;

use crate::model::{
    file_record::{FileId, FileKind},
    file_store::FileStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAccessItem {
    pub id: FileId,
    pub name: String,
    pub kind: FileKind,
}

#[derive(Debug, Clone, Default)]
pub struct QuickAccessIndex {
    pinned: IndexSet<FileId>,
}

impl QuickAccessIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin if absent, unpin if present. Returns the new membership.
    pub fn toggle(&mut self, id: &FileId) -> bool {
        if self.pinned.shift_remove(id) {
            debug!(file_id = %id, "Unpinned from quick access");
            false
        } else {
            self.pinned.insert(id.clone());
            debug!(file_id = %id, "Pinned to quick access");
            true
        }
    }

    /// Unconditional removal; returns whether the id was pinned.
    pub fn remove_by_id(&mut self, id: &FileId) -> bool {
        self.pinned.shift_remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &FileId) -> bool {
        self.pinned.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pinned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &FileId> {
        self.pinned.iter()
    }

    /// Projections for every pinned id that still resolves in `store`.
    #[must_use]
    pub fn items(&self, store: &FileStore) -> Vec<QuickAccessItem> {
        self.pinned
            .iter()
            .filter_map(|id| store.get(id))
            .map(|record| QuickAccessItem {
                id: record.id.clone(),
                name: record.name.clone(),
                kind: record.kind,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::file_record::FileRecord;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut index = QuickAccessIndex::new();
        let pinned = FileId::from("4");
        index.toggle(&pinned);

        let target = FileId::from("2");
        let before: Vec<FileId> = index.ids().cloned().collect();

        assert!(index.toggle(&target));
        assert!(index.contains(&target));
        assert!(!index.toggle(&target));

        let after: Vec<FileId> = index.ids().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let mut index = QuickAccessIndex::new();
        let id = FileId::from("7");
        index.toggle(&id);
        index.toggle(&id);
        index.toggle(&id);
        assert_eq!(index.len(), 1);

        assert!(index.remove_by_id(&id));
        assert!(!index.remove_by_id(&id));
        assert!(index.is_empty());
    }

    #[test]
    fn test_items_project_from_store() {
        let mut store = FileStore::from_records([
            FileRecord::new("4", "Budget 2024.xlsx", FileKind::Spreadsheet),
            FileRecord::new("9", "Background Music.mp3", FileKind::Audio),
        ]);
        let mut index = QuickAccessIndex::new();
        index.toggle(&FileId::from("9"));
        index.toggle(&FileId::from("4"));
        index.toggle(&FileId::from("gone"));

        store.get_mut(&FileId::from("4")).unwrap().name = "Budget 2025.xlsx".into();

        let names: Vec<String> = index.items(&store).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Background Music.mp3", "Budget 2025.xlsx"]);
    }
}
