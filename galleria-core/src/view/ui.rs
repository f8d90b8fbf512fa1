//! src/view/ui.rs
//! ============================================================================
//! Frame renderer. Draws the whole TUI from a shared borrow of the
//! `ViewController`; nothing here mutates library state.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::Block};
use tracing::instrument;

use crate::{
    controller::view_controller::ViewController,
    model::{ui_state::UIOverlay, view_mode::ViewMode},
    view::{
        components::{
            confirm_overlay::ConfirmOverlay, details_overlay::DetailsOverlay,
            editor_overlay::EditorOverlay, file_table::FileTable, folder_list::FolderList,
            help_overlay::HelpOverlay, notification_overlay::NotificationOverlay,
            picker_overlay::PickerOverlay, prompt_overlay::PromptOverlay,
            recycle_bin::RecycleBinTable, sidebar::Sidebar, status_bar::StatusBar,
            viewer_overlay::ViewerOverlay,
        },
        theme::Palette,
    },
};

const SIDEBAR_WIDTH: u16 = 30;

/// ---------------------------------------------------------------------------
/// Renderer struct (palette + layout cache)
/// ---------------------------------------------------------------------------
pub struct UIRenderer {
    palette: &'static Palette,
    cache: LayoutCache,
    frames: u64,
}

#[derive(Default)]
struct LayoutCache {
    key: Option<(Rect, bool)>,
    /// sidebar, content, status bar
    areas: [Rect; 3],
    hit: u64,
    miss: u64,
}

/// ---------------------------------------------------------------------------
/// ctor
/// ---------------------------------------------------------------------------
impl UIRenderer {
    pub fn new(palette: &'static Palette) -> Self {
        Self {
            palette,
            cache: LayoutCache::default(),
            frames: 0,
        }
    }

    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

/// ---------------------------------------------------------------------------
/// public API
/// ---------------------------------------------------------------------------
impl UIRenderer {
    #[instrument(level = "trace", skip_all, fields(frame = self.frames))]
    pub fn render(&mut self, f: &mut Frame<'_>, ctl: &ViewController, now: DateTime<Utc>) {
        let p = self.palette;
        let screen = f.area();
        let [sidebar, content, status] = self.layout(screen, ctl.ui().show_sidebar);

        f.render_widget(Block::default().style(p.base()), screen);

        if ctl.ui().show_sidebar {
            Sidebar::new().render(f, ctl, p, sidebar);
        }

        match ctl.view() {
            ViewMode::Gallery => FileTable::new().render(f, ctl, p, content),
            ViewMode::FileManager => FolderList::new().render(f, ctl, p, content),
            ViewMode::RecycleBin => RecycleBinTable::new().render(f, ctl, p, now, content),
        }

        StatusBar::new().render(f, ctl, p, status);
        self.draw_overlays(f, ctl, now, screen);

        self.frames += 1;
    }
}

/// ---------------------------------------------------------------------------
/// overlays
/// ---------------------------------------------------------------------------
impl UIRenderer {
    fn draw_overlays(
        &self,
        f: &mut Frame<'_>,
        ctl: &ViewController,
        now: DateTime<Utc>,
        screen: Rect,
    ) {
        let p = self.palette;
        let ui = ctl.ui();
        let library = ctl.library();

        // modal overlay ------------------------------------------------------
        match &ui.overlay {
            UIOverlay::None => {}
            UIOverlay::Help => HelpOverlay::new().render(f, p, screen),
            UIOverlay::Prompt(prompt) => PromptOverlay::render(f, prompt, &ui.input, p, screen),
            UIOverlay::Confirm(kind) => ConfirmOverlay::render(f, kind, library, p, screen),
            UIOverlay::Details(id) => {
                if let Some(record) = library.get(id) {
                    DetailsOverlay::render(f, record, library, p, now, screen);
                }
            }
            UIOverlay::Viewer(id) => {
                if let Some(record) = library.get(id) {
                    let visible = ctl.visible_files();
                    let position = visible
                        .iter()
                        .position(|r| &r.id == id)
                        .map(|i| (i + 1, visible.len()));
                    ViewerOverlay::render(f, record, position, p, screen);
                }
            }
            UIOverlay::Editor => {
                if let Some(editor) = &ui.editor {
                    let name = library
                        .get(&editor.file_id)
                        .map_or("", |r| r.name.as_str());
                    EditorOverlay::render(f, editor, name, p, screen);
                }
            }
            UIOverlay::Picker(kind) => {
                PickerOverlay::render(f, kind, ui.picker_selected, library, p, screen);
            }
        }

        // toast --------------------------------------------------------------
        if let Some(n) = &ui.notification {
            let area = NotificationOverlay::area(screen, n.level);
            NotificationOverlay::new().render_notification(f, n, p, now, area);
        }
    }
}

/// ---------------------------------------------------------------------------
/// util: layout
/// ---------------------------------------------------------------------------
impl UIRenderer {
    fn layout(&mut self, screen: Rect, show_sidebar: bool) -> [Rect; 3] {
        let key = (screen, show_sidebar);
        if self.cache.key == Some(key) {
            self.cache.hit += 1;
            return self.cache.areas;
        }
        self.cache.miss += 1;

        let [body, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(screen);

        let [sidebar, content] = if show_sidebar {
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .areas(body)
        } else {
            [Rect::default(), body]
        };

        self.cache.key = Some(key);
        self.cache.areas = [sidebar, content, status];
        self.cache.areas
    }
}
