//! src/view/components/viewer_overlay.rs
//! ============================================================================
//! # Viewer: full-screen preview of one file
//!
//! A terminal can't show the media itself, so each kind gets a textual
//! preview: the source url for images and media, the document text for
//! editable kinds, and the file facts for everything else.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    model::{
        file_record::{FileKind, FileRecord},
        seed,
    },
    util::humanize,
    view::{icons, layout::centered_rect, theme::Palette},
};

pub struct ViewerOverlay;

impl ViewerOverlay {
    /// `position` is the 1-based index in the visible list plus its length.
    pub fn render(
        frame: &mut Frame<'_>,
        record: &FileRecord,
        position: Option<(usize, usize)>,
        p: &Palette,
        area: Rect,
    ) {
        let overlay_area = centered_rect(90, 90, area);
        frame.render_widget(Clear, overlay_area);

        let counter = position.map_or_else(String::new, |(i, n)| format!(" {i} / {n} "));
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} {} ", icons::kind_icon(record.kind), record.name))
            .title_style(p.title())
            .title_bottom(Line::from(counter).right_aligned())
            .border_style(p.border())
            .style(Style::default().bg(p.background));

        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let [body_area, hint_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

        let body = Paragraph::new(Self::preview(record, p))
            .style(Style::default().fg(p.foreground))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, body_area);

        let hints = Line::from(vec![
            Span::styled("←/→", p.key_hint()),
            Span::styled(" prev/next  ", p.muted()),
            Span::styled("e", p.key_hint()),
            Span::styled(" edit  ", p.muted()),
            Span::styled("d", p.key_hint()),
            Span::styled(" delete  ", p.muted()),
            Span::styled("i", p.key_hint()),
            Span::styled(" details  ", p.muted()),
            Span::styled("s", p.key_hint()),
            Span::styled(" share  ", p.muted()),
            Span::styled("o", p.key_hint()),
            Span::styled(" download  ", p.muted()),
            Span::styled("Esc", p.key_hint()),
            Span::styled(" close", p.muted()),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), hint_area);
    }

    fn preview<'a>(record: &'a FileRecord, p: &Palette) -> Text<'a> {
        let facts = Line::from(Span::styled(
            format!(
                "{} • {} • modified {}",
                record.kind,
                humanize::file_size(record.size_bytes),
                humanize::short_date(record.modified_at)
            ),
            p.muted(),
        ));

        let mut lines = vec![facts, Line::from("")];
        match record.kind {
            FileKind::Image => {
                lines.push(Line::from("Image preview"));
                if let Some(src) = record.thumbnail.as_deref() {
                    lines.push(Line::from(Span::styled(src, Style::default().fg(p.cyan))));
                }
            }
            FileKind::Video | FileKind::Audio => {
                lines.push(Line::from(format!("{} stream", record.kind)));
                if let Some(url) = record.url.as_deref() {
                    lines.push(Line::from(Span::styled(url, Style::default().fg(p.cyan))));
                }
            }
            kind if kind.is_editable() => {
                let content = record
                    .edited_content
                    .as_deref()
                    .unwrap_or_else(|| seed::document_content(&record.name));
                if content.is_empty() {
                    lines.push(Line::from(Span::styled("(empty document)", p.muted())));
                } else {
                    lines.extend(content.lines().map(Line::from));
                }
            }
            _ => lines.push(Line::from(Span::styled(
                "No preview available for this file type.",
                p.muted(),
            ))),
        }
        Text::from(lines)
    }
}
