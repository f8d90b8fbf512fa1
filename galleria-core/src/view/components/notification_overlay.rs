//! src/view/components/notification_overlay.rs
//! ============================================================================

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::trace;

use crate::{
    model::ui_state::{Notification, NotificationLevel},
    view::theme::Palette,
};

/// Toast in the top-right corner until it expires.
pub struct NotificationOverlay;

impl NotificationOverlay {
    pub fn new() -> Self {
        Self
    }

    /// Where the toast goes for a screen of `screen` size.
    #[must_use]
    pub fn area(screen: Rect, level: NotificationLevel) -> Rect {
        let height = if level == NotificationLevel::Error { 5 } else { 4 };
        let width = (screen.width * 40 / 100).max(36).min(screen.width);
        Rect {
            x: screen.x + screen.width - width,
            y: screen.y + 1,
            width,
            height: height.min(screen.height),
        }
    }

    pub fn render_notification(
        &self,
        frame: &mut Frame<'_>,
        notification: &Notification,
        p: &Palette,
        now: DateTime<Utc>,
        area: Rect,
    ) {
        trace!(level = ?notification.level, title = %notification.title, "Rendering notification");

        frame.render_widget(Clear, area);

        let border_style = p.notification(notification.level);
        let icon = match notification.level {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Warning => "⚠",
            NotificationLevel::Error => "✕",
            NotificationLevel::Success => "✓",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {icon} {} ", notification.title))
            .title_style(border_style.bold())
            .border_style(border_style)
            .style(Style::default().bg(p.background));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let [message_area, dismiss_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner_area);

        let message = Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(p.foreground))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(message, message_area);

        let seconds_left = (notification.expires_at - now).num_seconds().max(0);
        let dismiss = Paragraph::new(format!("dismissing in {seconds_left}s"))
            .style(
                Style::default()
                    .fg(p.comment)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Right);
        frame.render_widget(dismiss, dismiss_area);
    }
}

impl Default for NotificationOverlay {
    fn default() -> Self {
        Self::new()
    }
}
