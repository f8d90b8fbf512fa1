//! src/model/ui_state.rs
//! ============================================================================
//! # `UIState`: presentation-only state
//!
//! Cursor, overlays, prompt input, the editor buffer and the current
//! notification. Nothing here owns library data; overlays refer to files and
//! albums by id and re-resolve them on every frame.

use chrono::{DateTime, Utc};
use compact_str::CompactString;

use crate::model::{album::AlbumId, editor::EditorState, file_record::FileId};

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NotificationLevel {
    Info = 0,
    Success = 1,
    Warning = 2,
    Error = 3,
}

/// Toast shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: CompactString,
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: DateTime<Utc>,
}

/// What an input prompt will do on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPromptType {
    /// Live filter; every keystroke updates the query.
    Search,
    RenameFile(FileId),
    CreateAlbum,
    RenameAlbum(AlbumId),
}

impl InputPromptType {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Search => " Search Files ",
            Self::RenameFile(_) => " Rename File ",
            Self::CreateAlbum => " Create Album ",
            Self::RenameAlbum(_) => " Rename Album ",
        }
    }
}

/// Destructive operations that need a yes/no first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmKind {
    /// Move a file to the recycle bin.
    DeleteFile(FileId),
    DeleteAlbum(AlbumId),
    /// Permanently delete the recycle bin selection.
    DeleteSelected(Vec<FileId>),
    /// Empty the recycle bin.
    DeleteAll,
}

/// Lists shown in a small picker overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerKind {
    /// Choose the album to file `FileId` under.
    Album(FileId),
    QuickAccess,
}

/// Modal overlays. At most one is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UIOverlay {
    #[default]
    None,
    Help,
    Prompt(InputPromptType),
    Confirm(ConfirmKind),
    Details(FileId),
    Viewer(FileId),
    Editor,
    Picker(PickerKind),
}

impl UIOverlay {
    #[must_use]
    pub const fn accepts_text(&self) -> bool {
        matches!(self, Self::Prompt(_) | Self::Editor)
    }
}

#[derive(Debug, Clone)]
pub struct UIState {
    /// Cursor into the list of the active view.
    pub selected: usize,

    /// Cursor inside picker overlays.
    pub picker_selected: usize,

    pub overlay: UIOverlay,

    /// Text typed into the active prompt.
    pub input: String,

    pub editor: Option<EditorState>,

    pub notification: Option<Notification>,

    pub show_sidebar: bool,

    redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: 0,
            picker_selected: 0,
            overlay: UIOverlay::None,
            input: String::new(),
            editor: None,
            notification: None,
            show_sidebar: true,
            redraw: true,
        }
    }

    #[inline]
    pub const fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[inline]
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw
    }

    #[inline]
    pub const fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    /// Keep the cursor inside a list of `len` entries.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.redraw = true;
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
        self.redraw = true;
    }

    pub fn show_prompt(&mut self, prompt: InputPromptType, initial: &str) {
        self.input = initial.to_string();
        self.overlay = UIOverlay::Prompt(prompt);
        self.redraw = true;
    }

    pub fn show_overlay(&mut self, overlay: UIOverlay) {
        self.picker_selected = 0;
        self.overlay = overlay;
        self.redraw = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = UIOverlay::None;
        self.input.clear();
        self.editor = None;
        self.redraw = true;
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: &str,
        message: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) {
        self.notification = Some(Notification {
            title: CompactString::new(title),
            message: message.into(),
            level,
            expires_at,
        });
        self.redraw = true;
    }

    /// Drop the notification once it has expired.
    pub fn expire_notification(&mut self, now: DateTime<Utc>) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.expires_at <= now)
        {
            self.notification = None;
            self.redraw = true;
        }
    }
}
