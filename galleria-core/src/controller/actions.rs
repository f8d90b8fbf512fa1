//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Every user intent and timer event the controller responds to. Key handling
//! produces these; the controller turns them into library mutations.

use crate::model::{
    album::AlbumId,
    editor::CursorMove,
    file_record::FileId,
    ui_state::{ConfirmKind, InputPromptType},
    view_mode::ViewMode,
};

/// Represents a high-level action that the application can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,

    /// An internal tick event for periodic updates.
    Tick,

    /// A terminal resize event.
    Resize(u16, u16),

    // ---- navigation ----
    MoveSelectionUp,

    MoveSelectionDown,

    /// Jump to first entry.
    SelectFirst,

    /// Jump to last entry.
    SelectLast,

    /// Gallery <-> file manager.
    CycleView,

    SwitchView(ViewMode),

    OpenRecycleBin,

    /// Close the active overlay, or leave the recycle bin.
    Back,

    /// Open the file under the cursor, or enter the folder under it.
    EnterSelected,

    /// Set or clear the album filter.
    SelectAlbum(Option<AlbumId>),

    NextAlbum,

    PreviousAlbum,

    ToggleHelp,

    ToggleSidebar,

    // ---- prompts and confirmations ----
    ShowInputPrompt(InputPromptType),

    InputChar(char),

    InputBackspace,

    SubmitInputPrompt,

    ShowConfirm(ConfirmKind),

    Confirm,

    // ---- file overlays ----
    ShowDetails,

    OpenViewer,

    ViewerNext,

    ViewerPrevious,

    OpenEditor,

    SaveEditor,

    /// Move the editor cursor.
    EditorCursor(CursorMove),

    /// Delete the char under the editor cursor.
    EditorDelete,

    EditorUndo,

    EditorRedo,

    ShowAlbumPicker,

    ShowQuickAccess,

    /// Enter inside a picker overlay.
    PickerSubmit,

    /// Unpin the quick access entry under the picker cursor.
    PickerRemove,

    /// Delete the file behind the quick access entry under the picker cursor.
    PickerDelete,

    // ---- selection-relative intents ----
    /// Ask to move the file under the cursor to the recycle bin.
    RequestDelete,

    RequestRename,

    RequestRenameAlbum,

    RequestDeleteAlbum,

    ToggleQuickAccess,

    Share,

    Download,

    // ---- recycle bin ----
    ToggleBinSelection,

    ToggleSelectAll,

    RecoverSelected,

    RecoverAll,

    RequestDeleteSelected,

    RequestDeleteAll,

    // ---- direct library intents ----
    SoftDelete(FileId),

    Recover(Vec<FileId>),

    PermanentlyDelete(Vec<FileId>),

    DeleteAll,

    PurgeExpired,

    AssignToAlbum { file: FileId, album: AlbumId },

    CreateAlbum(String),

    RenameAlbum { album: AlbumId, name: String },

    DeleteAlbum(AlbumId),

    RenameFile { file: FileId, name: String },

    SaveEdit { file: FileId, content: String },

    Search(String),

    NavigateFolder(String),

    /// No operation. Used when an event is consumed but no state change is needed.
    NoOp,
}
