//! src/view/icons.rs
//! ============================================================================
//! # File Kind Icons (Nerd Fonts)
//!
//! Nerd Font glyphs for each file kind plus the few fixed UI markers.

use crate::model::file_record::FileKind;

pub const FOLDER_ICON: &str = "";
pub const FILE_ICON: &str = "";
pub const IMAGE_ICON: &str = "";
pub const DOCUMENT_ICON: &str = "";
pub const SPREADSHEET_ICON: &str = "";
pub const PRESENTATION_ICON: &str = "";
pub const VIDEO_ICON: &str = "";
pub const AUDIO_ICON: &str = "";
pub const MODEL_ICON: &str = "";
pub const PACKAGE_ICON: &str = "";

pub const ALBUM_ICON: &str = "";
pub const STAR_ICON: &str = "";
pub const PIN_ICON: &str = "";
pub const TRASH_ICON: &str = "";
pub const STORAGE_ICON: &str = "";

pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";

#[must_use]
pub const fn kind_icon(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Image => IMAGE_ICON,
        FileKind::Document => DOCUMENT_ICON,
        FileKind::Spreadsheet => SPREADSHEET_ICON,
        FileKind::Presentation => PRESENTATION_ICON,
        FileKind::Video => VIDEO_ICON,
        FileKind::Audio => AUDIO_ICON,
        FileKind::Model3d => MODEL_ICON,
        FileKind::Package => PACKAGE_ICON,
        FileKind::Folder => FOLDER_ICON,
    }
}
