//! src/view/components/editor_overlay.rs
//! ============================================================================

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    model::editor::EditorState,
    view::{layout::centered_rect, theme::Palette},
};

/// Plain-text document editor with a visible cursor.
pub struct EditorOverlay;

impl EditorOverlay {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(
        frame: &mut Frame<'_>,
        editor: &EditorState,
        file_name: &str,
        p: &Palette,
        area: Rect,
    ) {
        let overlay_area = centered_rect(80, 85, area);
        frame.render_widget(Clear, overlay_area);

        let dirty = if editor.dirty { " [+]" } else { "" };
        let (row, col) = editor.cursor_position();
        let stats = format!(
            " Ln {}, Col {} • {} lines • {} words ",
            row + 1,
            col + 1,
            editor.line_count(),
            editor.word_count()
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Editing {file_name}{dirty} "))
            .title_style(p.title())
            .title_bottom(Line::from(stats).right_aligned())
            .title_bottom(
                Line::from(vec![
                    Span::styled(" Ctrl+S", p.key_hint()),
                    Span::styled(" save  ", p.muted()),
                    Span::styled("Ctrl+Z/Y", p.key_hint()),
                    Span::styled(" undo/redo  ", p.muted()),
                    Span::styled("Esc", p.key_hint()),
                    Span::styled(" discard ", p.muted()),
                ])
                .left_aligned(),
            )
            .border_style(p.focused_border())
            .style(Style::default().bg(p.background));

        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        // scroll so the cursor cell stays inside the box
        let row = row as u16;
        let col = col as u16;
        let scroll_y = row.saturating_sub(inner.height.saturating_sub(1));
        let scroll_x = col.saturating_sub(inner.width.saturating_sub(1));

        let paragraph = Paragraph::new(editor.buffer.as_str())
            .style(Style::default().fg(p.foreground))
            .scroll((scroll_y, scroll_x));
        frame.render_widget(paragraph, inner);

        if inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + col - scroll_x, inner.y + row - scroll_y));
        }
    }
}
