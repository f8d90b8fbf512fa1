//! src/model/view_mode.rs
//! ============================================================================

use std::fmt;

/// Top-level views. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Gallery,
    FileManager,
    RecycleBin,
}

impl ViewMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gallery => "Gallery",
            Self::FileManager => "File Manager",
            Self::RecycleBin => "Recycle Bin",
        }
    }

    /// Tab order of the view toggle. The recycle bin is not part of it.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Gallery => Self::FileManager,
            Self::FileManager | Self::RecycleBin => Self::Gallery,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
