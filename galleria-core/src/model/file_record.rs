//! src/model/file_record.rs
//! ============================================================================
//! # `FileRecord`: the unit the library stores
//!
//! A record is *active* while `deleted_at` is `None` and sits in the recycle
//! bin once it carries a deletion timestamp. Albums and quick access only ever
//! hold a [`FileId`], never a copy of the record.

use std::fmt;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::model::album::AlbumId;

/// Immutable identifier of a [`FileRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(CompactString);

impl FileId {
    #[must_use]
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(CompactString::new(value))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of file kinds the library knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Document,
    Spreadsheet,
    Presentation,
    Video,
    Audio,
    #[serde(rename = "3d")]
    Model3d,
    #[serde(rename = "apk")]
    Package,
    Folder,
}

impl FileKind {
    /// Every kind, in breakdown display order.
    pub const ALL: [Self; 9] = [
        Self::Image,
        Self::Document,
        Self::Spreadsheet,
        Self::Presentation,
        Self::Video,
        Self::Audio,
        Self::Package,
        Self::Model3d,
        Self::Folder,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Document => "Document",
            Self::Spreadsheet => "Spreadsheet",
            Self::Presentation => "Presentation",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Model3d => "3D",
            Self::Package => "Apk",
            Self::Folder => "Folder",
        }
    }

    /// Kinds the editor overlay accepts.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Document | Self::Spreadsheet | Self::Presentation)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single file in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,

    /// Mutable display name.
    pub name: String,

    pub kind: FileKind,

    /// `None` means unfiled. May dangle after the album is deleted.
    pub album_id: Option<AlbumId>,

    /// Presence marks the record as "in recycle bin".
    pub deleted_at: Option<DateTime<Utc>>,

    /// Content override written by the editor.
    pub edited_content: Option<String>,

    pub size_bytes: Option<u64>,

    pub modified_at: Option<DateTime<Utc>>,

    pub starred: bool,

    pub thumbnail: Option<String>,

    pub url: Option<String>,
}

impl FileRecord {
    #[must_use]
    pub fn new(id: impl Into<FileId>, name: impl Into<String>, kind: FileKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            album_id: None,
            deleted_at: None,
            edited_content: None,
            size_bytes: None,
            modified_at: None,
            starred: false,
            thumbnail: None,
            url: None,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    #[must_use]
    pub const fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    #[must_use]
    pub fn with_album(mut self, album_id: AlbumId) -> Self {
        self.album_id = Some(album_id);
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Case-insensitive substring match on the display name. An empty query
    /// matches everything.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        Self(CompactString::from(value))
    }
}

/// Folder shown by the file manager view. Navigation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: CompactString,
    pub name: String,
    pub parent_id: Option<CompactString>,
}

impl Folder {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: CompactString::new(id),
            name: name.to_string(),
            parent_id: None,
        }
    }
}

/// Count of active files of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileBreakdown {
    pub kind: FileKind,
    pub count: usize,
}

impl FileBreakdown {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_active() {
        let record = FileRecord::new("1", "Budget 2024.xlsx", FileKind::Spreadsheet)
            .with_size(1_100_000)
            .starred();

        assert!(record.is_active());
        assert!(!record.is_deleted());
        assert!(record.starred);
        assert_eq!(record.size_bytes, Some(1_100_000));
        assert_eq!(record.album_id, None);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let record = FileRecord::new("6", "Iceland Cliff.jpg", FileKind::Image);

        assert!(record.matches_query(""));
        assert!(record.matches_query("cliff"));
        assert!(record.matches_query("ICELAND"));
        assert!(record.matches_query("d C"));
        assert!(!record.matches_query("bench"));
    }

    #[test]
    fn test_kind_serde_names() {
        let json_like = toml::to_string(&Holder {
            kind: FileKind::Model3d,
        })
        .unwrap();
        assert_eq!(json_like.trim(), "kind = \"3d\"");

        let back: Holder = toml::from_str("kind = \"apk\"").unwrap();
        assert_eq!(back.kind, FileKind::Package);
    }

    #[derive(Serialize, Deserialize)]
    struct Holder {
        kind: FileKind,
    }

    #[test]
    fn test_editable_kinds() {
        assert!(FileKind::Document.is_editable());
        assert!(!FileKind::Image.is_editable());
        assert!(!FileKind::Folder.is_editable());
    }
}
