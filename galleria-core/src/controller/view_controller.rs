//! src/controller/view_controller.rs
//! ============================================================================
//! # `ViewController`: routes actions into the library
//!
//! Owns the [`Library`] and everything the views need on top of it: the
//! active view, album filter, search query, recycle bin selection and the
//! [`UIState`]. All mutations happen synchronously inside [`ViewController::dispatch`];
//! the renderer only ever reads.

use chrono::{DateTime, TimeDelta, Utc};
use indexmap::IndexSet;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    controller::actions::Action,
    error::AppError,
    model::{
        album::{Album, AlbumId},
        editor::{CursorMove, EditorState},
        file_record::{FileId, FileRecord, Folder},
        library::Library,
        seed::{self, DEVICE_STORAGE},
        ui_state::{
            ConfirmKind, InputPromptType, NotificationLevel, PickerKind, UIOverlay, UIState,
        },
        view_mode::ViewMode,
    },
};

/// Controller knobs taken from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub purge_interval: TimeDelta,
    pub notification_ttl: TimeDelta,
    pub confirm_delete_all: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            purge_interval: TimeDelta::from_std(config.recycle_bin.purge_interval)
                .unwrap_or_else(|_| TimeDelta::hours(1)),
            notification_ttl: TimeDelta::from_std(config.ui.notification_ttl)
                .unwrap_or_else(|_| TimeDelta::seconds(3)),
            confirm_delete_all: config.recycle_bin.confirm_delete_all,
        }
    }
}

#[derive(Debug)]
pub struct ViewController {
    library: Library,
    view: ViewMode,
    selected_album: Option<AlbumId>,
    search_query: String,
    current_path: String,
    bin_selection: IndexSet<FileId>,
    ui: UIState,
    settings: ControllerSettings,
    last_purge: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// ctor + read API
// ---------------------------------------------------------------------------
impl ViewController {
    #[must_use]
    pub fn new(library: Library, settings: ControllerSettings, now: DateTime<Utc>) -> Self {
        Self {
            library,
            view: ViewMode::Gallery,
            selected_album: None,
            search_query: String::new(),
            current_path: DEVICE_STORAGE.to_string(),
            bin_selection: IndexSet::new(),
            ui: UIState::new(),
            settings,
            last_purge: now,
        }
    }

    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub const fn selected_album(&self) -> Option<&AlbumId> {
        self.selected_album.as_ref()
    }

    /// The album behind the filter, if it still exists.
    #[must_use]
    pub fn selected_album_entry(&self) -> Option<&Album> {
        self.selected_album
            .as_ref()
            .and_then(|id| self.library.albums().get(id))
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    #[must_use]
    pub const fn ui(&self) -> &UIState {
        &self.ui
    }

    pub const fn ui_mut(&mut self) -> &mut UIState {
        &mut self.ui
    }

    #[must_use]
    pub fn is_bin_selected(&self, id: &FileId) -> bool {
        self.bin_selection.contains(id)
    }

    #[must_use]
    pub fn bin_selection_len(&self) -> usize {
        self.bin_selection.len()
    }

    /// Active files, narrowed by the album filter and the search query.
    #[must_use]
    pub fn visible_files(&self) -> Vec<&FileRecord> {
        self.library
            .list_active()
            .into_iter()
            .filter(|record| {
                self.selected_album
                    .as_ref()
                    .is_none_or(|album| record.album_id.as_ref() == Some(album))
            })
            .filter(|record| record.matches_query(&self.search_query))
            .collect()
    }

    #[must_use]
    pub fn deleted_files(&self) -> Vec<&FileRecord> {
        self.library.list_deleted()
    }

    /// Length of the list the cursor moves over in the active view.
    #[must_use]
    pub fn current_len(&self) -> usize {
        match self.view {
            ViewMode::Gallery => self.visible_files().len(),
            ViewMode::FileManager => self.library.folders().len(),
            ViewMode::RecycleBin => self.deleted_files().len(),
        }
    }

    /// Record under the cursor in the gallery or recycle bin.
    #[must_use]
    pub fn selected_file(&self) -> Option<&FileRecord> {
        match self.view {
            ViewMode::Gallery => self.visible_files().get(self.ui.selected).copied(),
            ViewMode::RecycleBin => self.deleted_files().get(self.ui.selected).copied(),
            ViewMode::FileManager => None,
        }
    }

    #[must_use]
    pub fn selected_folder(&self) -> Option<&Folder> {
        match self.view {
            ViewMode::FileManager => self.library.folders().get(self.ui.selected),
            _ => None,
        }
    }

    /// File an action without an explicit id applies to: the viewer's file if
    /// the viewer is open, else the one under the cursor.
    #[must_use]
    pub fn focused_file_id(&self) -> Option<FileId> {
        match &self.ui.overlay {
            UIOverlay::Viewer(id) | UIOverlay::Details(id) => Some(id.clone()),
            _ => self.selected_file().map(|r| r.id.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------------
impl ViewController {
    /// Apply one action. Returns `false` when the application should exit.
    pub fn dispatch(&mut self, action: Action, now: DateTime<Utc>) -> bool {
        if action != Action::Tick {
            debug!(?action, "Dispatching action");
        }

        match action {
            Action::Quit => return false,
            Action::Tick => self.on_tick(now),
            Action::Resize(..) | Action::NoOp => {}

            Action::MoveSelectionUp => self.move_selection(-1, now),
            Action::MoveSelectionDown => self.move_selection(1, now),
            Action::SelectFirst => self.ui.selected = 0,
            Action::SelectLast => self.ui.selected = self.current_len().saturating_sub(1),
            Action::CycleView => self.switch_view(self.view.toggled(), now),
            Action::SwitchView(view) => self.switch_view(view, now),
            Action::OpenRecycleBin => self.switch_view(ViewMode::RecycleBin, now),
            Action::Back => self.back(now),
            Action::EnterSelected => self.enter_selected(now),
            Action::SelectAlbum(album) => self.select_album(album),
            Action::NextAlbum => self.cycle_album(true),
            Action::PreviousAlbum => self.cycle_album(false),
            Action::ToggleHelp => {
                if self.ui.overlay == UIOverlay::Help {
                    self.ui.close_overlay();
                } else {
                    self.ui.show_overlay(UIOverlay::Help);
                }
            }
            Action::ToggleSidebar => self.ui.show_sidebar = !self.ui.show_sidebar,

            Action::ShowInputPrompt(prompt) => self.show_prompt(prompt),
            Action::InputChar(c) => self.input_char(c),
            Action::InputBackspace => self.input_backspace(),
            Action::SubmitInputPrompt => self.submit_prompt(now),
            Action::ShowConfirm(kind) => self.ui.show_overlay(UIOverlay::Confirm(kind)),
            Action::Confirm => self.confirm(now),

            Action::ShowDetails => {
                if let Some(id) = self.focused_file_id() {
                    self.ui.show_overlay(UIOverlay::Details(id));
                }
            }
            Action::OpenViewer => {
                if let Some(id) = self.focused_file_id() {
                    self.ui.show_overlay(UIOverlay::Viewer(id));
                }
            }
            Action::ViewerNext => self.step_viewer(1),
            Action::ViewerPrevious => self.step_viewer(-1),
            Action::OpenEditor => self.open_editor(now),
            Action::SaveEditor => self.save_editor(now),
            Action::EditorCursor(motion) => self.edit(|e| e.move_cursor(motion)),
            Action::EditorDelete => self.edit(EditorState::delete),
            Action::EditorUndo => self.edit(|e| {
                e.undo();
            }),
            Action::EditorRedo => self.edit(|e| {
                e.redo();
            }),
            Action::ShowAlbumPicker => self.show_album_picker(now),
            Action::ShowQuickAccess => self
                .ui
                .show_overlay(UIOverlay::Picker(PickerKind::QuickAccess)),
            Action::PickerSubmit => self.picker_submit(now),
            Action::PickerRemove => self.picker_remove(now),
            Action::PickerDelete => {
                if let Some(id) = self.picked_quick_access() {
                    self.ui
                        .show_overlay(UIOverlay::Confirm(ConfirmKind::DeleteFile(id)));
                }
            }

            Action::RequestDelete => {
                if let Some(id) = self.focused_file_id().filter(|id| self.is_active(id)) {
                    self.ui
                        .show_overlay(UIOverlay::Confirm(ConfirmKind::DeleteFile(id)));
                }
            }
            Action::RequestRename => {
                if let Some(id) = self.focused_file_id().filter(|id| self.is_active(id)) {
                    self.show_prompt(InputPromptType::RenameFile(id));
                }
            }
            Action::RequestRenameAlbum => match self.selected_album.clone() {
                Some(album) => self.show_prompt(InputPromptType::RenameAlbum(album)),
                None => self.notify_no_album(now),
            },
            Action::RequestDeleteAlbum => match self.selected_album.clone() {
                Some(album) => self
                    .ui
                    .show_overlay(UIOverlay::Confirm(ConfirmKind::DeleteAlbum(album))),
                None => self.notify_no_album(now),
            },
            Action::ToggleQuickAccess => self.toggle_quick_access(now),
            Action::Share => {
                if let Some(name) = self.focused_name() {
                    self.notify(NotificationLevel::Info, "Share", format!("Sharing \"{name}\"..."), now);
                }
            }
            Action::Download => {
                if let Some(name) = self.focused_name() {
                    self.notify(
                        NotificationLevel::Info,
                        "Downloading",
                        format!("\"{name}\" is being downloaded."),
                        now,
                    );
                }
            }

            Action::ToggleBinSelection => self.toggle_bin_selection(),
            Action::ToggleSelectAll => self.toggle_select_all(),
            Action::RecoverSelected => {
                if !self.bin_selection.is_empty() {
                    let ids: Vec<FileId> = self.bin_selection.iter().cloned().collect();
                    self.recover(ids, now);
                }
            }
            Action::RecoverAll => {
                if self.library.deleted_count() > 0 {
                    let count = self.library.recover_all(now);
                    self.notify(
                        NotificationLevel::Success,
                        "All Files Recovered",
                        format!("{count} file(s) have been restored."),
                        now,
                    );
                }
            }
            Action::RequestDeleteSelected => {
                if !self.bin_selection.is_empty() {
                    let ids = self.bin_selection.iter().cloned().collect();
                    self.ui
                        .show_overlay(UIOverlay::Confirm(ConfirmKind::DeleteSelected(ids)));
                }
            }
            Action::RequestDeleteAll => {
                if self.library.deleted_count() == 0 {
                    // nothing to empty
                } else if self.settings.confirm_delete_all {
                    self.ui
                        .show_overlay(UIOverlay::Confirm(ConfirmKind::DeleteAll));
                } else {
                    self.delete_all(now);
                }
            }

            Action::SoftDelete(id) => self.soft_delete(&id, now),
            Action::Recover(ids) => self.recover(ids, now),
            Action::PermanentlyDelete(ids) => self.permanently_delete(&ids, now),
            Action::DeleteAll => self.delete_all(now),
            Action::PurgeExpired => self.purge(now),
            Action::AssignToAlbum { file, album } => self.assign_to_album(&file, &album, now),
            Action::CreateAlbum(name) => {
                self.create_album(&name, now);
            }
            Action::RenameAlbum { album, name } => {
                self.rename_album(&album, &name, now);
            }
            Action::DeleteAlbum(album) => self.delete_album(&album, now),
            Action::RenameFile { file, name } => {
                self.rename_file(&file, &name, now);
            }
            Action::SaveEdit { file, content } => self.save_edit(&file, content, now),
            Action::Search(query) => {
                self.search_query = query;
                self.ui.selected = 0;
            }
            Action::NavigateFolder(folder_id) => self.navigate_folder(&folder_id, now),
        }

        self.settle();
        true
    }

    /// Re-establish view invariants after any action.
    fn settle(&mut self) {
        let library = &self.library;
        self.bin_selection
            .retain(|id| library.get(id).is_some_and(FileRecord::is_deleted));
        let len = self.current_len();
        self.ui.clamp_selection(len);

        // overlays pointing at files that are gone close themselves
        let stale = match &self.ui.overlay {
            UIOverlay::Viewer(id) | UIOverlay::Details(id) => self.library.get(id).is_none(),
            UIOverlay::Editor => self
                .ui
                .editor
                .as_ref()
                .is_none_or(|e| self.library.get(&e.file_id).is_none()),
            _ => false,
        };
        if stale {
            self.ui.close_overlay();
        }

        self.ui.request_redraw();
    }

    fn on_tick(&mut self, now: DateTime<Utc>) {
        self.ui.expire_notification(now);
        if now - self.last_purge >= self.settings.purge_interval {
            debug!("Periodic purge timer fired");
            self.purge(now);
        }
    }

    fn purge(&mut self, now: DateTime<Utc>) {
        let purged = self.library.purge_expired(now);
        self.last_purge = now;
        if !purged.is_empty() {
            self.notify(
                NotificationLevel::Info,
                "Recycle Bin",
                format!("{} file(s) expired and were permanently deleted.", purged.len()),
                now,
            );
        }
    }

    fn notify(
        &mut self,
        level: NotificationLevel,
        title: &str,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        let expires_at = now + self.settings.notification_ttl;
        self.ui.notify(level, title, message, expires_at);
    }

    fn notify_error(&mut self, err: &AppError, now: DateTime<Utc>) {
        warn!(error = %err, "Operation rejected");
        self.notify(NotificationLevel::Error, "Error", err.to_string(), now);
    }

    fn notify_no_album(&mut self, now: DateTime<Utc>) {
        self.notify(
            NotificationLevel::Warning,
            "No Album Selected",
            "Select an album first.",
            now,
        );
    }

    fn is_active(&self, id: &FileId) -> bool {
        self.library.get(id).is_some_and(FileRecord::is_active)
    }

    fn focused_name(&self) -> Option<String> {
        self.focused_file_id()
            .and_then(|id| self.library.get(&id))
            .map(|r| r.name.clone())
    }

    fn file_name(&self, id: &FileId) -> String {
        self.library
            .get(id)
            .map_or_else(|| id.to_string(), |r| r.name.clone())
    }
}

// ---------------------------------------------------------------------------
// navigation
// ---------------------------------------------------------------------------
impl ViewController {
    fn switch_view(&mut self, view: ViewMode, now: DateTime<Utc>) {
        if view == ViewMode::RecycleBin {
            self.selected_album = None;
            self.purge(now);
        }
        if self.view == ViewMode::RecycleBin && view != ViewMode::RecycleBin {
            self.bin_selection.clear();
        }
        if self.view != view {
            info!(from = %self.view, to = %view, "Switched view");
            self.ui.selected = 0;
        }
        self.view = view;
    }

    fn move_selection(&mut self, delta: isize, now: DateTime<Utc>) {
        match &self.ui.overlay {
            UIOverlay::Picker(kind) => {
                let len = self.picker_len(kind);
                if delta < 0 {
                    self.ui.picker_selected = self.ui.picker_selected.saturating_sub(1);
                } else if self.ui.picker_selected + 1 < len {
                    self.ui.picker_selected += 1;
                }
            }
            UIOverlay::Viewer(_) => self.step_viewer(delta),
            UIOverlay::None => {
                if delta < 0 {
                    self.ui.move_up();
                } else {
                    let len = self.current_len();
                    self.ui.move_down(len);
                }
            }
            _ => {
                debug!(at = %now, "Selection move ignored while an overlay is open");
            }
        }
    }

    fn back(&mut self, now: DateTime<Utc>) {
        match &self.ui.overlay {
            UIOverlay::None => {
                if self.view == ViewMode::RecycleBin {
                    self.switch_view(ViewMode::Gallery, now);
                } else if self.selected_album.is_some() {
                    self.select_album(None);
                }
            }
            UIOverlay::Prompt(InputPromptType::Search) => {
                self.search_query.clear();
                self.ui.close_overlay();
            }
            _ => self.ui.close_overlay(),
        }
    }

    fn enter_selected(&mut self, now: DateTime<Utc>) {
        match self.view {
            ViewMode::Gallery => {
                if let Some(id) = self.selected_file().map(|r| r.id.clone()) {
                    self.ui.show_overlay(UIOverlay::Viewer(id));
                }
            }
            ViewMode::FileManager => {
                if let Some(folder_id) = self.selected_folder().map(|f| f.id.to_string()) {
                    self.navigate_folder(&folder_id, now);
                }
            }
            ViewMode::RecycleBin => self.toggle_bin_selection(),
        }
    }

    fn select_album(&mut self, album: Option<AlbumId>) {
        if let Some(id) = &album {
            if !self.library.albums().contains(id) {
                warn!(album_id = %id, "Cannot filter by unknown album");
                return;
            }
        }
        self.selected_album = album;
        if self.view == ViewMode::RecycleBin {
            self.view = ViewMode::Gallery;
        }
        self.ui.selected = 0;
    }

    /// None -> first -> ... -> last -> None, or the reverse.
    fn cycle_album(&mut self, forward: bool) {
        let albums = self.library.albums();
        let count = albums.len();
        if count == 0 {
            return;
        }

        let current = self
            .selected_album
            .as_ref()
            .and_then(|id| albums.position(id));

        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(i), false) if i > 0 => Some(i - 1),
            _ => None,
        };

        let album = next.and_then(|i| albums.get_index(i)).map(|a| a.id.clone());
        self.select_album(album);
    }

    fn step_viewer(&mut self, delta: isize) {
        let UIOverlay::Viewer(current) = &self.ui.overlay else {
            return;
        };

        let visible = self.visible_files();
        let Some(index) = visible.iter().position(|r| &r.id == current) else {
            return;
        };

        let target = index.checked_add_signed(delta).filter(|&i| i < visible.len());
        if let Some(next) = target.map(|i| visible[i].id.clone()) {
            self.ui.overlay = UIOverlay::Viewer(next);
        }
    }

    fn navigate_folder(&mut self, folder_id: &str, now: DateTime<Utc>) {
        let Some(name) = self
            .library
            .folders()
            .iter()
            .find(|f| f.id == folder_id)
            .map(|f| f.name.clone())
        else {
            return;
        };

        self.current_path = format!("{DEVICE_STORAGE} / {name}");
        self.notify(
            NotificationLevel::Info,
            &format!("Opened {name}"),
            "Folder navigation is a demo feature.",
            now,
        );
    }
}

// ---------------------------------------------------------------------------
// prompts, confirmations, pickers, editor
// ---------------------------------------------------------------------------
impl ViewController {
    fn show_prompt(&mut self, prompt: InputPromptType) {
        let initial = match &prompt {
            InputPromptType::Search => self.search_query.clone(),
            InputPromptType::RenameFile(id) => self.file_name(id),
            InputPromptType::RenameAlbum(id) => self
                .library
                .albums()
                .get(id)
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            InputPromptType::CreateAlbum => String::new(),
        };
        self.ui.show_prompt(prompt, &initial);
    }

    fn input_char(&mut self, c: char) {
        match &self.ui.overlay {
            UIOverlay::Prompt(prompt) => {
                let live_search = *prompt == InputPromptType::Search;
                if c != '\n' {
                    self.ui.input.push(c);
                }
                if live_search {
                    self.search_query = self.ui.input.clone();
                    self.ui.selected = 0;
                }
            }
            UIOverlay::Editor => self.edit(|e| e.insert(c)),
            _ => {}
        }
    }

    fn input_backspace(&mut self) {
        match &self.ui.overlay {
            UIOverlay::Prompt(prompt) => {
                let live_search = *prompt == InputPromptType::Search;
                self.ui.input.pop();
                if live_search {
                    self.search_query = self.ui.input.clone();
                    self.ui.selected = 0;
                }
            }
            UIOverlay::Editor => self.edit(EditorState::backspace),
            _ => {}
        }
    }

    fn submit_prompt(&mut self, now: DateTime<Utc>) {
        let UIOverlay::Prompt(prompt) = self.ui.overlay.clone() else {
            return;
        };
        let input = self.ui.input.clone();

        // a rejected submit keeps the prompt open with the text intact
        let accepted = match prompt {
            InputPromptType::Search => true,
            InputPromptType::RenameFile(id) => self.rename_file(&id, &input, now),
            InputPromptType::CreateAlbum => self.create_album(&input, now),
            InputPromptType::RenameAlbum(id) => self.rename_album(&id, &input, now),
        };

        if accepted {
            self.ui.overlay = UIOverlay::None;
            self.ui.input.clear();
        }
    }

    fn confirm(&mut self, now: DateTime<Utc>) {
        let UIOverlay::Confirm(kind) = self.ui.overlay.clone() else {
            return;
        };
        self.ui.close_overlay();

        match kind {
            ConfirmKind::DeleteFile(id) => self.soft_delete(&id, now),
            ConfirmKind::DeleteAlbum(album) => self.delete_album(&album, now),
            ConfirmKind::DeleteSelected(ids) => self.permanently_delete(&ids, now),
            ConfirmKind::DeleteAll => self.delete_all(now),
        }
    }

    fn open_editor(&mut self, now: DateTime<Utc>) {
        let Some(record) = self.focused_file_id().and_then(|id| self.library.get(&id)) else {
            return;
        };

        if !record.kind.is_editable() {
            let message = format!("Editing is not supported for {} files.", record.kind);
            self.notify(NotificationLevel::Warning, "Cannot Edit", message, now);
            return;
        }

        let buffer = record
            .edited_content
            .clone()
            .unwrap_or_else(|| seed::document_content(&record.name).to_string());
        let editor = EditorState::new(record.id.clone(), buffer);

        self.ui.show_overlay(UIOverlay::Editor);
        self.ui.editor = Some(editor);
    }

    fn edit(&mut self, f: impl FnOnce(&mut EditorState)) {
        if self.ui.overlay != UIOverlay::Editor {
            return;
        }
        if let Some(editor) = self.ui.editor.as_mut() {
            f(editor);
        }
    }

    fn save_editor(&mut self, now: DateTime<Utc>) {
        if self.ui.overlay != UIOverlay::Editor {
            return;
        }
        if let Some(editor) = self.ui.editor.take() {
            self.save_edit(&editor.file_id, editor.buffer, now);
        }
        self.ui.close_overlay();
    }

    fn show_album_picker(&mut self, now: DateTime<Utc>) {
        let Some(id) = self.focused_file_id().filter(|id| self.is_active(id)) else {
            return;
        };
        if self.library.albums().is_empty() {
            self.notify(
                NotificationLevel::Warning,
                "No Albums",
                "Create an album first.",
                now,
            );
            return;
        }
        self.ui
            .show_overlay(UIOverlay::Picker(PickerKind::Album(id)));
    }

    fn picker_len(&self, kind: &PickerKind) -> usize {
        match kind {
            PickerKind::Album(_) => self.library.albums().len(),
            PickerKind::QuickAccess => self.library.quick_access_items().len(),
        }
    }

    fn picked_quick_access(&self) -> Option<FileId> {
        match &self.ui.overlay {
            UIOverlay::Picker(PickerKind::QuickAccess) => self
                .library
                .quick_access_items()
                .get(self.ui.picker_selected)
                .map(|item| item.id.clone()),
            _ => None,
        }
    }

    fn picker_submit(&mut self, now: DateTime<Utc>) {
        let UIOverlay::Picker(kind) = self.ui.overlay.clone() else {
            return;
        };

        match kind {
            PickerKind::Album(file) => {
                let album = self
                    .library
                    .albums()
                    .get_index(self.ui.picker_selected)
                    .map(|a| a.id.clone());
                self.ui.close_overlay();
                if let Some(album) = album {
                    self.assign_to_album(&file, &album, now);
                }
            }
            PickerKind::QuickAccess => {
                if let Some(id) = self.picked_quick_access() {
                    self.ui.show_overlay(UIOverlay::Viewer(id));
                }
            }
        }
    }

    fn picker_remove(&mut self, now: DateTime<Utc>) {
        let Some(id) = self.picked_quick_access() else {
            return;
        };
        let name = self.file_name(&id);
        if self.library.remove_from_quick_access(&id, now) {
            self.ui.picker_selected = self.ui.picker_selected.saturating_sub(1);
            self.notify(
                NotificationLevel::Info,
                "Removed from Quick Access",
                format!("\"{name}\" removed from Quick Access."),
                now,
            );
        }
    }

    fn toggle_bin_selection(&mut self) {
        if self.view != ViewMode::RecycleBin {
            return;
        }
        let Some(id) = self.selected_file().map(|r| r.id.clone()) else {
            return;
        };
        if !self.bin_selection.shift_remove(&id) {
            self.bin_selection.insert(id);
        }
    }

    /// Select every deleted file, or clear the selection if all already are.
    fn toggle_select_all(&mut self) {
        if self.view != ViewMode::RecycleBin {
            return;
        }
        let deleted = self.library.files().deleted_ids();
        if self.bin_selection.len() == deleted.len() {
            self.bin_selection.clear();
        } else {
            self.bin_selection = deleted.into_iter().collect();
        }
    }
}

// ---------------------------------------------------------------------------
// library mutations + their notifications
// ---------------------------------------------------------------------------
impl ViewController {
    fn soft_delete(&mut self, id: &FileId, now: DateTime<Utc>) {
        let name = self.file_name(id);
        if self.library.soft_delete(id, now) {
            if self.ui.overlay == UIOverlay::Viewer(id.clone()) {
                self.ui.close_overlay();
            }
            self.notify(
                NotificationLevel::Success,
                "Moved to Recycle Bin",
                format!("\"{name}\" will be permanently deleted in 30 days."),
                now,
            );
        }
    }

    fn recover(&mut self, ids: Vec<FileId>, now: DateTime<Utc>) {
        let count = self.library.recover(&ids, now);
        for id in &ids {
            self.bin_selection.shift_remove(id);
        }
        self.notify(
            NotificationLevel::Success,
            "Files Recovered",
            format!("{count} file(s) have been restored."),
            now,
        );
    }

    fn permanently_delete(&mut self, ids: &[FileId], now: DateTime<Utc>) {
        let count = self.library.permanently_delete(ids, now);
        for id in ids {
            self.bin_selection.shift_remove(id);
        }
        self.notify(
            NotificationLevel::Success,
            "Permanently Deleted",
            format!("{count} file(s) have been permanently deleted."),
            now,
        );
    }

    fn delete_all(&mut self, now: DateTime<Utc>) {
        let count = self.library.delete_all(now);
        self.bin_selection.clear();
        self.notify(
            NotificationLevel::Success,
            "Recycle Bin Emptied",
            format!("{count} file(s) have been permanently deleted."),
            now,
        );
    }

    fn assign_to_album(&mut self, file: &FileId, album: &AlbumId, now: DateTime<Utc>) {
        if self.library.assign_to_album(file, album, now) {
            let album_name = self
                .library
                .albums()
                .get(album)
                .map(|a| a.name.clone())
                .unwrap_or_default();
            let name = self.file_name(file);
            self.notify(
                NotificationLevel::Success,
                "Added to Album",
                format!("\"{name}\" added to \"{album_name}\"."),
                now,
            );
        }
    }

    fn create_album(&mut self, name: &str, now: DateTime<Utc>) -> bool {
        match self.library.create_album(name, now) {
            Ok(id) => {
                let name = self
                    .library
                    .albums()
                    .get(&id)
                    .map(|a| a.name.clone())
                    .unwrap_or_default();
                self.notify(
                    NotificationLevel::Success,
                    "Album Created",
                    format!("\"{name}\" has been created successfully."),
                    now,
                );
                true
            }
            Err(err) => {
                self.notify_error(&err, now);
                false
            }
        }
    }

    fn rename_album(&mut self, album: &AlbumId, name: &str, now: DateTime<Utc>) -> bool {
        match self.library.rename_album(album, name, now) {
            Ok(renamed) => {
                if renamed {
                    self.notify(
                        NotificationLevel::Success,
                        "Album Renamed",
                        format!("Album renamed to \"{}\".", name.trim()),
                        now,
                    );
                }
                true
            }
            Err(err) => {
                self.notify_error(&err, now);
                false
            }
        }
    }

    fn delete_album(&mut self, album: &AlbumId, now: DateTime<Utc>) {
        if let Some(removed) = self.library.delete_album(album, now) {
            if self.selected_album.as_ref() == Some(album) {
                self.selected_album = None;
            }
            self.notify(
                NotificationLevel::Success,
                "Album Deleted",
                format!("\"{}\" has been deleted.", removed.name),
                now,
            );
        }
    }

    fn rename_file(&mut self, file: &FileId, name: &str, now: DateTime<Utc>) -> bool {
        match self.library.rename_file(file, name, now) {
            Ok(renamed) => {
                if renamed {
                    self.notify(
                        NotificationLevel::Success,
                        "File Renamed",
                        format!("File renamed to \"{}\".", name.trim()),
                        now,
                    );
                }
                true
            }
            Err(err) => {
                self.notify_error(&err, now);
                false
            }
        }
    }

    fn save_edit(&mut self, file: &FileId, content: String, now: DateTime<Utc>) {
        if self.library.save_edit(file, content, now) {
            let name = self.file_name(file);
            self.notify(
                NotificationLevel::Success,
                "File Saved",
                format!("\"{name}\" has been updated."),
                now,
            );
        }
    }

    fn toggle_quick_access(&mut self, now: DateTime<Utc>) {
        let Some(id) = self.focused_file_id() else {
            return;
        };
        let name = self.file_name(&id);
        match self.library.toggle_quick_access(&id, now) {
            Some(true) => self.notify(
                NotificationLevel::Success,
                "Added to Quick Access",
                format!("\"{name}\" added to Quick Access."),
                now,
            ),
            Some(false) => self.notify(
                NotificationLevel::Info,
                "Removed from Quick Access",
                format!("\"{name}\" removed from Quick Access."),
                now,
            ),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::seed_library;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 20, 10, 0, 0).unwrap()
    }

    fn controller() -> ViewController {
        ViewController::new(seed_library(t0()), ControllerSettings::default(), t0())
    }

    fn names(ctl: &ViewController) -> Vec<String> {
        ctl.visible_files().iter().map(|r| r.name.clone()).collect()
    }

    fn select(ctl: &mut ViewController, name: &str) {
        let index = ctl
            .visible_files()
            .iter()
            .position(|r| r.name == name)
            .unwrap();
        ctl.ui_mut().selected = index;
    }

    #[test]
    fn test_visible_files_combines_album_and_search() {
        let mut ctl = controller();
        assert_eq!(ctl.visible_files().len(), 11);

        ctl.dispatch(Action::SelectAlbum(Some(AlbumId::from("ak"))), t0());
        assert_eq!(names(&ctl), vec!["Iceland Cliff.jpg", "Winter Bench.jpg"]);

        ctl.dispatch(Action::Search("BENCH".into()), t0());
        assert_eq!(names(&ctl), vec!["Winter Bench.jpg"]);

        ctl.dispatch(Action::SelectAlbum(None), t0());
        assert_eq!(names(&ctl), vec!["Winter Bench.jpg"]);
    }

    #[test]
    fn test_live_search_prompt() {
        let mut ctl = controller();
        ctl.dispatch(Action::ShowInputPrompt(InputPromptType::Search), t0());
        for c in "docx".chars() {
            ctl.dispatch(Action::InputChar(c), t0());
        }
        assert_eq!(names(&ctl), vec!["Project Brief.docx", "Design Specs.docx"]);

        ctl.dispatch(Action::SubmitInputPrompt, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::None);
        assert_eq!(ctl.search_query(), "docx");

        ctl.dispatch(Action::ShowInputPrompt(InputPromptType::Search), t0());
        ctl.dispatch(Action::Back, t0());
        assert_eq!(ctl.search_query(), "");
    }

    #[test]
    fn test_recycle_bin_entry_clears_album_filter() {
        let mut ctl = controller();
        ctl.dispatch(Action::SelectAlbum(Some(AlbumId::from("ak"))), t0());
        ctl.dispatch(Action::OpenRecycleBin, t0());

        assert_eq!(ctl.view(), ViewMode::RecycleBin);
        assert!(ctl.selected_album().is_none());

        ctl.dispatch(Action::SelectAlbum(Some(AlbumId::from("ak"))), t0());
        assert_eq!(ctl.view(), ViewMode::Gallery);
        assert_eq!(ctl.selected_album(), Some(&AlbumId::from("ak")));
    }

    #[test]
    fn test_delete_flow_goes_through_confirmation() {
        let mut ctl = controller();
        select(&mut ctl, "Budget 2024.xlsx");

        ctl.dispatch(Action::RequestDelete, t0());
        assert!(matches!(
            ctl.ui().overlay,
            UIOverlay::Confirm(ConfirmKind::DeleteFile(_))
        ));
        assert_eq!(ctl.library().deleted_count(), 0);

        ctl.dispatch(Action::Confirm, t0());
        assert_eq!(ctl.library().deleted_count(), 1);
        assert_eq!(ctl.visible_files().len(), 10);

        let toast = ctl.ui().notification.as_ref().unwrap();
        assert_eq!(toast.title, "Moved to Recycle Bin");
        assert_eq!(
            toast.message,
            "\"Budget 2024.xlsx\" will be permanently deleted in 30 days."
        );
    }

    #[test]
    fn test_deleting_viewed_file_closes_viewer() {
        let mut ctl = controller();
        select(&mut ctl, "Iceland Cliff.jpg");
        ctl.dispatch(Action::EnterSelected, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Viewer(FileId::from("6")));

        ctl.dispatch(Action::SoftDelete(FileId::from("6")), t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::None);
    }

    #[test]
    fn test_viewer_steps_through_visible_files() {
        let mut ctl = controller();
        ctl.dispatch(Action::SelectAlbum(Some(AlbumId::from("ak"))), t0());
        ctl.dispatch(Action::OpenViewer, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Viewer(FileId::from("6")));

        ctl.dispatch(Action::ViewerNext, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Viewer(FileId::from("8")));
        ctl.dispatch(Action::ViewerNext, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Viewer(FileId::from("8")));
        ctl.dispatch(Action::MoveSelectionUp, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Viewer(FileId::from("6")));
    }

    #[test]
    fn test_bin_select_all_toggle_and_recover_selected() {
        let mut ctl = controller();
        for id in ["2", "5", "7"] {
            ctl.dispatch(Action::SoftDelete(FileId::from(id)), t0());
        }
        ctl.dispatch(Action::OpenRecycleBin, t0());

        ctl.dispatch(Action::ToggleSelectAll, t0());
        assert_eq!(ctl.bin_selection_len(), 3);
        ctl.dispatch(Action::ToggleSelectAll, t0());
        assert_eq!(ctl.bin_selection_len(), 0);

        ctl.dispatch(Action::ToggleBinSelection, t0());
        ctl.dispatch(Action::MoveSelectionDown, t0());
        ctl.dispatch(Action::EnterSelected, t0());
        assert_eq!(ctl.bin_selection_len(), 2);

        ctl.dispatch(Action::ToggleSelectAll, t0());
        assert_eq!(ctl.bin_selection_len(), 3);

        ctl.dispatch(Action::MoveSelectionDown, t0());
        ctl.dispatch(Action::ToggleBinSelection, t0());
        assert!(!ctl.is_bin_selected(&FileId::from("7")));

        ctl.dispatch(Action::RecoverSelected, t0());
        assert_eq!(ctl.bin_selection_len(), 0);
        let remaining: Vec<&str> = ctl.deleted_files().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(remaining, vec!["7"]);
    }

    #[test]
    fn test_delete_all_respects_confirmation_setting() {
        let mut ctl = controller();
        ctl.dispatch(Action::SoftDelete(FileId::from("1")), t0());
        ctl.dispatch(Action::OpenRecycleBin, t0());

        ctl.dispatch(Action::RequestDeleteAll, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Confirm(ConfirmKind::DeleteAll));
        ctl.dispatch(Action::Back, t0());
        assert_eq!(ctl.library().deleted_count(), 1);

        let settings = ControllerSettings {
            confirm_delete_all: false,
            ..ControllerSettings::default()
        };
        let mut ctl = ViewController::new(seed_library(t0()), settings, t0());
        ctl.dispatch(Action::SoftDelete(FileId::from("1")), t0());
        ctl.dispatch(Action::RequestDeleteAll, t0());
        assert_eq!(ctl.library().deleted_count(), 0);
        assert_eq!(ctl.library().files().len(), 10);
    }

    #[test]
    fn test_tick_purges_after_interval() {
        let mut ctl = controller();
        ctl.dispatch(Action::SoftDelete(FileId::from("3")), t0());

        let later = t0() + Duration::days(30);
        // the library was not mutated; only the timer can notice expiry
        ctl.dispatch(Action::Tick, later);
        assert!(ctl.library().get(&FileId::from("3")).is_none());
    }

    #[test]
    fn test_tick_before_interval_does_not_purge() {
        let settings = ControllerSettings {
            purge_interval: TimeDelta::days(365),
            ..ControllerSettings::default()
        };
        let mut ctl = ViewController::new(seed_library(t0()), settings, t0());
        ctl.dispatch(Action::SoftDelete(FileId::from("3")), t0());

        ctl.dispatch(Action::Tick, t0() + Duration::days(31));
        assert!(ctl.library().get(&FileId::from("3")).is_some());

        ctl.dispatch(Action::OpenRecycleBin, t0() + Duration::days(31));
        assert!(ctl.library().get(&FileId::from("3")).is_none());
    }

    #[test]
    fn test_blank_album_name_keeps_prompt_open() {
        let mut ctl = controller();
        ctl.dispatch(Action::ShowInputPrompt(InputPromptType::CreateAlbum), t0());
        ctl.dispatch(Action::InputChar(' '), t0());
        ctl.dispatch(Action::SubmitInputPrompt, t0());

        assert_eq!(
            ctl.ui().overlay,
            UIOverlay::Prompt(InputPromptType::CreateAlbum)
        );
        assert_eq!(ctl.library().albums().len(), 1);
        assert_eq!(
            ctl.ui().notification.as_ref().unwrap().level,
            NotificationLevel::Error
        );

        ctl.dispatch(Action::InputBackspace, t0());
        for c in "Trips".chars() {
            ctl.dispatch(Action::InputChar(c), t0());
        }
        ctl.dispatch(Action::SubmitInputPrompt, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::None);
        assert_eq!(ctl.library().albums().len(), 2);
    }

    #[test]
    fn test_deleting_selected_album_clears_filter() {
        let mut ctl = controller();
        ctl.dispatch(Action::NextAlbum, t0());
        assert_eq!(ctl.selected_album(), Some(&AlbumId::from("ak")));

        ctl.dispatch(Action::RequestDeleteAlbum, t0());
        ctl.dispatch(Action::Confirm, t0());

        assert!(ctl.selected_album().is_none());
        assert!(ctl.library().albums().is_empty());
        let cliff = ctl.library().get(&FileId::from("6")).unwrap();
        assert_eq!(cliff.album_id, Some(AlbumId::from("ak")));
        assert_eq!(ctl.visible_files().len(), 11);
    }

    #[test]
    fn test_album_picker_assigns_file() {
        let mut ctl = controller();
        select(&mut ctl, "Budget 2024.xlsx");
        ctl.dispatch(Action::ShowAlbumPicker, t0());
        ctl.dispatch(Action::PickerSubmit, t0());

        let budget = ctl.library().get(&FileId::from("4")).unwrap();
        assert_eq!(budget.album_id, Some(AlbumId::from("ak")));
        assert_eq!(ctl.library().album_summaries()[0].file_count, 3);
    }

    #[test]
    fn test_quick_access_picker_remove_and_open() {
        let mut ctl = controller();
        select(&mut ctl, "Budget 2024.xlsx");
        ctl.dispatch(Action::ToggleQuickAccess, t0());
        assert_eq!(ctl.library().quick_access_items().len(), 2);

        ctl.dispatch(Action::ShowQuickAccess, t0());
        ctl.dispatch(Action::PickerRemove, t0());
        let pinned: Vec<String> = ctl
            .library()
            .quick_access_items()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(pinned, vec!["Budget 2024.xlsx"]);

        ctl.dispatch(Action::PickerSubmit, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Viewer(FileId::from("4")));
    }

    #[test]
    fn test_editor_saves_content() {
        let mut ctl = controller();
        select(&mut ctl, "Project Brief.docx");
        ctl.dispatch(Action::OpenEditor, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::Editor);
        assert!(
            ctl.ui()
                .editor
                .as_ref()
                .unwrap()
                .buffer
                .starts_with("PROJECT BRIEF")
        );

        ctl.dispatch(Action::EditorCursor(CursorMove::DocumentEnd), t0());
        ctl.dispatch(Action::InputChar('!'), t0());
        let at = t0() + Duration::minutes(5);
        ctl.dispatch(Action::SaveEditor, at);

        let brief = ctl.library().get(&FileId::from("2")).unwrap();
        assert!(brief.edited_content.as_deref().unwrap().ends_with('!'));
        assert_eq!(brief.modified_at, Some(at));
        assert_eq!(ctl.ui().overlay, UIOverlay::None);
    }

    #[test]
    fn test_editor_edits_at_cursor() {
        let mut ctl = controller();
        select(&mut ctl, "Project Brief.docx");
        ctl.dispatch(Action::OpenEditor, t0());

        // second line, then back to its start
        ctl.dispatch(Action::EditorCursor(CursorMove::Down), t0());
        ctl.dispatch(Action::EditorCursor(CursorMove::Down), t0());
        ctl.dispatch(Action::EditorCursor(CursorMove::LineEnd), t0());
        ctl.dispatch(Action::EditorCursor(CursorMove::LineStart), t0());
        ctl.dispatch(Action::InputChar('>'), t0());
        ctl.dispatch(Action::EditorCursor(CursorMove::DocumentStart), t0());
        ctl.dispatch(Action::InputChar('X'), t0());

        let buffer = &ctl.ui().editor.as_ref().unwrap().buffer;
        assert!(buffer.starts_with("XPROJECT BRIEF"));
        assert!(buffer.contains("\n>Project Name:"));

        ctl.dispatch(Action::EditorUndo, t0());
        ctl.dispatch(Action::EditorDelete, t0());
        let buffer = &ctl.ui().editor.as_ref().unwrap().buffer;
        assert!(buffer.starts_with("ROJECT BRIEF"));

        ctl.dispatch(Action::SaveEditor, t0());
        let brief = ctl.library().get(&FileId::from("2")).unwrap();
        assert!(brief.edited_content.as_deref().unwrap().starts_with("ROJECT"));
    }

    #[test]
    fn test_editor_actions_ignored_without_editor() {
        let mut ctl = controller();
        ctl.dispatch(Action::EditorCursor(CursorMove::Right), t0());
        ctl.dispatch(Action::EditorUndo, t0());
        assert!(ctl.ui().editor.is_none());
        assert_eq!(ctl.ui().overlay, UIOverlay::None);
    }

    #[test]
    fn test_recover_all_on_empty_bin_is_silent() {
        let mut ctl = controller();
        ctl.dispatch(Action::OpenRecycleBin, t0());
        ctl.ui_mut().notification = None;
        ctl.dispatch(Action::RecoverAll, t0());
        assert!(ctl.ui().notification.is_none());
    }

    #[test]
    fn test_editor_rejects_images() {
        let mut ctl = controller();
        select(&mut ctl, "Winter Bench.jpg");
        ctl.dispatch(Action::OpenEditor, t0());
        assert_eq!(ctl.ui().overlay, UIOverlay::None);
        assert_eq!(
            ctl.ui().notification.as_ref().unwrap().level,
            NotificationLevel::Warning
        );
    }

    #[test]
    fn test_folder_navigation_updates_path() {
        let mut ctl = controller();
        ctl.dispatch(Action::CycleView, t0());
        assert_eq!(ctl.view(), ViewMode::FileManager);

        ctl.dispatch(Action::MoveSelectionDown, t0());
        ctl.dispatch(Action::EnterSelected, t0());
        assert_eq!(ctl.current_path(), "Device Storage / DCIM");
    }

    #[test]
    fn test_quit_stops_dispatch() {
        let mut ctl = controller();
        assert!(ctl.dispatch(Action::NoOp, t0()));
        assert!(!ctl.dispatch(Action::Quit, t0()));
    }
}
