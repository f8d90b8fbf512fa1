//! src/model/album.rs
//! ============================================================================
//! # Albums
//!
//! Albums hold a name and nothing else. Membership lives on the file record
//! (`FileRecord::album_id`) and counts are derived from the store on demand,
//! so re-assigning a file can never leave a stale counter behind.

use std::fmt;

use compact_str::{CompactString, format_compact};
use indexmap::IndexMap;
use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::AppResult, util::names::normalize_name};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(CompactString);

impl AlbumId {
    /// Fresh `album-<nanoid>` identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format_compact!("album-{}", nanoid!(10)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for AlbumId {
    fn from(value: &str) -> Self {
        Self(CompactString::new(value))
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
}

/// Album with its derived file count, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub name: String,
    pub file_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AlbumIndex {
    albums: IndexMap<AlbumId, Album>,
}

impl AlbumIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an album with a generated id. Names need not be unique.
    pub fn create(&mut self, name: &str) -> AppResult<AlbumId> {
        self.create_with_id(AlbumId::generate(), name)
    }

    /// Create an album with a caller-chosen id, replacing any album with that id.
    pub fn create_with_id(&mut self, id: AlbumId, name: &str) -> AppResult<AlbumId> {
        let name = normalize_name("album_name", name)?;
        info!(album_id = %id, name = %name, "Album created");
        self.albums.insert(
            id.clone(),
            Album {
                id: id.clone(),
                name,
            },
        );
        Ok(id)
    }

    /// Insert a trusted album as-is, replacing any album with the same id.
    pub fn insert(&mut self, album: Album) {
        self.albums.insert(album.id.clone(), album);
    }

    /// Rename in place. Unknown ids are a no-op and return `Ok(false)`.
    pub fn rename(&mut self, id: &AlbumId, new_name: &str) -> AppResult<bool> {
        let new_name = normalize_name("album_name", new_name)?;
        match self.albums.get_mut(id) {
            Some(album) => {
                info!(album_id = %id, from = %album.name, to = %new_name, "Album renamed");
                album.name = new_name;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the album. Files referencing it are left untouched.
    pub fn delete(&mut self, id: &AlbumId) -> Option<Album> {
        let removed = self.albums.shift_remove(id);
        if let Some(album) = &removed {
            info!(album_id = %id, name = %album.name, "Album deleted");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &AlbumId) -> bool {
        self.albums.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Album> {
        self.albums.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Album at `index` in creation order, for cycling the sidebar filter.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Album> {
        self.albums.get_index(index).map(|(_, album)| album)
    }

    #[must_use]
    pub fn position(&self, id: &AlbumId) -> Option<usize> {
        self.albums.get_index_of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_create_generates_prefixed_ids() {
        let mut index = AlbumIndex::new();
        let a = index.create("Trips").unwrap();
        let b = index.create("Trips").unwrap();

        assert_ne!(a, b);
        assert!(a.as_str().starts_with("album-"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_blank_names_fail_closed() {
        let mut index = AlbumIndex::new();
        let id = index.create_with_id(AlbumId::from("ak"), "AK").unwrap();

        assert!(matches!(
            index.create("   "),
            Err(AppError::InvalidInput { .. })
        ));
        assert!(index.rename(&id, "").is_err());
        assert_eq!(index.get(&id).unwrap().name, "AK");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_rename_and_delete() {
        let mut index = AlbumIndex::new();
        let id = index.create_with_id(AlbumId::from("ak"), "AK").unwrap();

        assert!(index.rename(&id, "Archive").unwrap());
        assert_eq!(index.get(&id).unwrap().name, "Archive");
        assert!(!index.rename(&AlbumId::from("nope"), "X").unwrap());

        assert!(index.delete(&id).is_some());
        assert!(index.delete(&id).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_insert_keeps_given_album() {
        let mut index = AlbumIndex::new();
        let id = AlbumId::from("ak");
        index.insert(Album {
            id: id.clone(),
            name: "AK".into(),
        });
        index.insert(Album {
            id: id.clone(),
            name: "Archive".into(),
        });

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&id).unwrap().name, "Archive");
    }

    #[test]
    fn test_positions_follow_creation_order() {
        let mut index = AlbumIndex::new();
        let first = index.create_with_id(AlbumId::from("a"), "A").unwrap();
        let second = index.create_with_id(AlbumId::from("b"), "B").unwrap();

        assert_eq!(index.position(&first), Some(0));
        assert_eq!(index.position(&second), Some(1));
        assert_eq!(index.get_index(1).map(|a| a.name.as_str()), Some("B"));
    }
}
