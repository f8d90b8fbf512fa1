//! src/view/components/help_overlay.rs
//! ============================================================================
//! Help overlay: key bindings grouped by what they act on
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::view::{layout::centered_rect, theme::Palette};

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const NAVIGATION: Section = (
    "Navigation",
    &[
        ("↑↓ / k j", "Move selection"),
        ("g / G", "First / last item"),
        ("Enter", "Open file or folder"),
        ("Tab", "Gallery / File Manager"),
        ("b", "Recycle Bin"),
        ("Esc", "Close overlay / back"),
        ("Ctrl+B", "Toggle sidebar"),
        ("q / Ctrl+C", "Quit"),
        ("?", "Toggle this help"),
    ],
);

const FILES: Section = (
    "Files",
    &[
        ("/", "Search by name"),
        ("i", "Details"),
        ("r", "Rename"),
        ("e", "Edit document"),
        ("d / Del", "Move to Recycle Bin"),
        ("p", "Pin / unpin quick access"),
        ("f", "Quick access list"),
        ("s / o", "Share / download"),
    ],
);

const ALBUMS: Section = (
    "Albums",
    &[
        ("[ / ]", "Previous / next album"),
        ("c", "Show all files"),
        ("a", "Add file to album"),
        ("n", "New album"),
        ("R", "Rename album"),
        ("D", "Delete album"),
    ],
);

const RECYCLE_BIN: Section = (
    "Recycle Bin",
    &[
        ("Space", "Select / unselect"),
        ("A", "Select all / none"),
        ("u / U", "Recover selected / all"),
        ("x / X", "Delete selected / all"),
    ],
);

const EDITOR: Section = (
    "Editor",
    &[
        ("←→↑↓", "Move cursor"),
        ("Home / End", "Line start / end"),
        ("Ctrl+Home/End", "Document start / end"),
        ("Del", "Delete under cursor"),
        ("Ctrl+Z / Ctrl+Y", "Undo / redo"),
        ("Ctrl+S", "Save"),
    ],
);

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, p: &Palette, area: Rect) {
        let overlay_area = centered_rect(80, 80, area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Galleria Help ")
            .title_alignment(Alignment::Center)
            .title_style(p.title())
            .title_bottom(Line::from(Span::styled(" Esc/?/q close ", p.muted())).centered())
            .border_style(p.focused_border())
            .style(Style::default().bg(p.background));

        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inner);

        frame.render_widget(
            Paragraph::new(Self::sections(&[NAVIGATION, ALBUMS, EDITOR], p)),
            left,
        );
        frame.render_widget(
            Paragraph::new(Self::sections(&[FILES, RECYCLE_BIN], p)),
            right,
        );
    }

    fn sections(sections: &[Section], p: &Palette) -> Text<'static> {
        let mut lines = Vec::new();
        for (title, bindings) in sections {
            lines.push(Line::from(Span::styled(*title, p.header())));
            lines.extend(bindings.iter().map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), p.key_hint()),
                    Span::styled(*what, Style::default().fg(p.foreground)),
                ])
            }));
            lines.push(Line::from(""));
        }
        Text::from(lines)
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}
