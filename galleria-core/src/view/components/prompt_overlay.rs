//! src/view/components/prompt_overlay.rs
//! ============================================================================
//! # `PromptOverlay`: single-line input for search, renames and new albums

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    model::ui_state::InputPromptType,
    view::{layout::centered_fixed, theme::Palette},
};

pub struct PromptOverlay;

impl PromptOverlay {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(
        frame: &mut Frame<'_>,
        prompt: &InputPromptType,
        input: &str,
        p: &Palette,
        area: Rect,
    ) {
        let overlay_area = centered_fixed(area.width * 6 / 10, 3, area);
        frame.render_widget(Clear, overlay_area);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(prompt.title())
            .title_alignment(Alignment::Center)
            .title_style(p.title())
            .border_style(p.border())
            .style(Style::default().bg(p.background));

        let input_paragraph = Paragraph::new(input)
            .block(input_block)
            .style(Style::default().fg(p.foreground));

        frame.render_widget(input_paragraph, overlay_area);

        // Show cursor
        let cursor_x = (input.chars().count() as u16 + 1).min(overlay_area.width.saturating_sub(2));
        frame.set_cursor_position((overlay_area.x + cursor_x, overlay_area.y + 1));

        // Render help text below the box
        let help_text = match prompt {
            InputPromptType::Search => "Type to filter • Enter to keep • Esc to clear",
            _ => "Type name • Enter to confirm • Esc to cancel",
        };
        let help_paragraph = Paragraph::new(help_text)
            .style(p.muted())
            .alignment(Alignment::Center);

        let help_area = Rect {
            x: overlay_area.x,
            y: overlay_area.y + overlay_area.height,
            width: overlay_area.width,
            height: 1,
        };

        if help_area.y < area.bottom() {
            frame.render_widget(help_paragraph, help_area);
        }
    }
}
