//! src/view/components/confirm_overlay.rs
//! ============================================================================

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    model::{library::Library, lifecycle::RETENTION_DAYS, ui_state::ConfirmKind},
    view::{layout::centered_fixed, theme::Palette},
};

/// Yes/no dialog in front of every destructive operation.
pub struct ConfirmOverlay;

impl ConfirmOverlay {
    pub fn render(
        frame: &mut Frame<'_>,
        kind: &ConfirmKind,
        library: &Library,
        p: &Palette,
        area: Rect,
    ) {
        let (title, message) = Self::describe(kind, library);

        let overlay_area = centered_fixed(56, 8, area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .title_style(p.danger())
            .border_style(Style::default().fg(p.red))
            .style(Style::default().bg(p.background));

        let text = Text::from(vec![
            Line::from(message),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", p.key_hint()),
                Span::styled(" confirm   ", p.muted()),
                Span::styled("n/Esc", p.key_hint()),
                Span::styled(" cancel", p.muted()),
            ])
            .alignment(Alignment::Center),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(p.foreground))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, overlay_area);
    }

    fn describe(kind: &ConfirmKind, library: &Library) -> (&'static str, String) {
        match kind {
            ConfirmKind::DeleteFile(id) => {
                let name = library.get(id).map_or("this file", |r| r.name.as_str());
                (
                    " Move to Recycle Bin ",
                    format!(
                        "Move \"{name}\" to the Recycle Bin? It will be permanently deleted after {RETENTION_DAYS} days."
                    ),
                )
            }
            ConfirmKind::DeleteAlbum(id) => {
                let name = library.albums().get(id).map_or("this album", |a| a.name.as_str());
                (
                    " Delete Album ",
                    format!("Delete album \"{name}\"? Files in it are kept."),
                )
            }
            ConfirmKind::DeleteSelected(ids) => (
                " Delete Permanently ",
                format!(
                    "Permanently delete {} selected file(s)? This cannot be undone.",
                    ids.len()
                ),
            ),
            ConfirmKind::DeleteAll => (
                " Empty Recycle Bin ",
                format!(
                    "Permanently delete all {} file(s) in the Recycle Bin? This cannot be undone.",
                    library.deleted_count()
                ),
            ),
        }
    }
}
