//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Theme Color Palettes
//!
//! Mocha (dark) and Latte (light) flavours. Colors are from the official
//! Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};
use tracing::{debug, instrument};

use crate::{config::Theme, model::ui_state::NotificationLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub current_line: Color,
    pub foreground: Color,
    pub comment: Color,
    pub cyan: Color,
    pub green: Color,
    pub orange: Color,
    pub pink: Color,
    pub purple: Color,
    pub red: Color,
    pub yellow: Color,
}

pub const MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),    // Base
    current_line: Color::Rgb(69, 71, 90),  // Surface1
    foreground: Color::Rgb(205, 214, 244), // Text
    comment: Color::Rgb(127, 132, 156),    // Overlay1
    cyan: Color::Rgb(137, 220, 235),       // Sky
    green: Color::Rgb(166, 227, 161),      // Green
    orange: Color::Rgb(250, 179, 135),     // Peach
    pink: Color::Rgb(245, 194, 231),       // Pink
    purple: Color::Rgb(203, 166, 247),     // Mauve
    red: Color::Rgb(243, 139, 168),        // Red
    yellow: Color::Rgb(249, 226, 175),     // Yellow
};

pub const LATTE: Palette = Palette {
    background: Color::Rgb(239, 241, 245),
    current_line: Color::Rgb(188, 192, 204),
    foreground: Color::Rgb(76, 79, 105),
    comment: Color::Rgb(140, 143, 161),
    cyan: Color::Rgb(4, 165, 229),
    green: Color::Rgb(64, 160, 43),
    orange: Color::Rgb(254, 100, 11),
    pink: Color::Rgb(234, 118, 203),
    purple: Color::Rgb(136, 57, 239),
    red: Color::Rgb(210, 15, 57),
    yellow: Color::Rgb(223, 142, 29),
};

/// Resolve the configured flavour. Logs the palette once at startup.
#[instrument(level = "debug")]
pub fn init_theme(theme: Theme) -> &'static Palette {
    let palette = palette(theme);
    debug!("Background: {:?}", palette.background);
    debug!("Foreground: {:?}", palette.foreground);
    debug!("Current line: {:?}", palette.current_line);
    palette
}

#[must_use]
pub const fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Mocha => &MOCHA,
        Theme::Latte => &LATTE,
    }
}

impl Palette {
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    #[must_use]
    pub fn border(&self) -> Style {
        Style::default().fg(self.purple)
    }

    #[must_use]
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.cyan)
    }

    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.pink).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn header(&self) -> Style {
        Style::default().fg(self.yellow).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.current_line)
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.comment)
    }

    #[must_use]
    pub fn danger(&self) -> Style {
        Style::default().fg(self.red).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.cyan).add_modifier(Modifier::BOLD)
    }

    /// Days-left column: red when the file is about to go.
    #[must_use]
    pub fn days_left(&self, days: i64) -> Style {
        match days {
            ..=3 => Style::default().fg(self.red),
            4..=7 => Style::default().fg(self.orange),
            _ => Style::default().fg(self.green),
        }
    }

    #[must_use]
    pub fn notification(&self, level: NotificationLevel) -> Style {
        let color = match level {
            NotificationLevel::Info => self.cyan,
            NotificationLevel::Success => self.green,
            NotificationLevel::Warning => self.yellow,
            NotificationLevel::Error => self.red,
        };
        Style::default().fg(color)
    }
}
