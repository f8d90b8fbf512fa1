pub mod error;

pub mod config;

pub mod logging;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod key_map;

    pub mod view_controller;
    pub use view_controller::{ControllerSettings, ViewController};
}

pub mod model {
    pub mod file_record;
    pub use file_record::{FileBreakdown, FileId, FileKind, FileRecord, Folder};

    pub mod lifecycle;

    pub mod file_store;

    pub mod album;
    pub use album::{Album, AlbumId, AlbumIndex, AlbumSummary};

    pub mod quick_access;

    pub mod editor;
    pub use editor::{CursorMove, EditorState};

    pub mod library;
    pub use library::Library;

    pub mod seed;

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, UIOverlay, UIState};

    pub mod view_mode;
    pub use view_mode::ViewMode;
}

pub mod view {
    pub mod icons;

    pub mod layout;

    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod confirm_overlay;
        pub mod details_overlay;
        pub mod editor_overlay;
        pub mod file_table;
        pub mod folder_list;
        pub mod help_overlay;
        pub mod notification_overlay;
        pub mod picker_overlay;
        pub mod prompt_overlay;
        pub mod recycle_bin;
        pub mod sidebar;
        pub mod status_bar;
        pub mod viewer_overlay;
    }
}

pub mod util;

pub use controller::ViewController;
pub use error::AppError;
pub use model::Library;
