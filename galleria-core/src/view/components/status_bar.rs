//! src/view/components/status_bar.rs
//! ============================================================================
//! One-line footer: active view, location (album filter or folder path),
//! search query on the left; counts and the help hint on the right.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::{
    controller::view_controller::ViewController,
    model::view_mode::ViewMode,
    view::theme::Palette,
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ctl: &ViewController, p: &Palette, area: Rect) {
        let library = ctl.library();

        let location = match ctl.view() {
            ViewMode::FileManager => ctl.current_path().to_string(),
            ViewMode::Gallery => ctl
                .selected_album_entry()
                .map_or_else(|| "All Files".to_string(), |a| a.name.clone()),
            ViewMode::RecycleBin => format!("{} selected", ctl.bin_selection_len()),
        };

        let mut left_text = format!(" {} | {}", ctl.view(), location);
        if !ctl.search_query().is_empty() {
            left_text.push_str(&format!(" | Search: {}", ctl.search_query()));
        }

        let right_text = format!(
            "Files: {} | Bin: {} | ? help ",
            library.list_active().len(),
            library.deleted_count()
        );

        // Split area into left and right halves
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let style = Style::default().fg(p.foreground).bg(p.current_line);

        Paragraph::new(left_text)
            .style(style)
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(style)
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
