//! src/view/components/details_overlay.rs
//! ============================================================================

use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    model::{
        file_record::FileRecord,
        library::Library,
        lifecycle::{self, LifecycleState},
        seed::DEVICE_STORAGE,
    },
    util::humanize,
    view::{icons, layout::centered_fixed, theme::Palette},
};

/// Property sheet for one file.
pub struct DetailsOverlay;

impl DetailsOverlay {
    pub fn render(
        frame: &mut Frame<'_>,
        record: &FileRecord,
        library: &Library,
        p: &Palette,
        now: DateTime<Utc>,
        area: Rect,
    ) {
        let overlay_area = centered_fixed(60, 14, area);
        frame.render_widget(Clear, overlay_area);

        let album = library
            .resolve_album(record)
            .map_or_else(|| "None".to_string(), |a| a.name.clone());

        let status = match lifecycle::classify(record, now) {
            LifecycleState::Active => "Active".to_string(),
            LifecycleState::Deleted { days_remaining } => {
                format!("In Recycle Bin ({})", humanize::days_left(days_remaining))
            }
            LifecycleState::Purged => "Pending purge".to_string(),
        };

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<12}"), p.muted()),
                Span::styled(value, Style::default().fg(p.foreground)),
            ])
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", icons::kind_icon(record.kind), record.name),
                p.title(),
            )),
            Line::from(""),
            row("Type", record.kind.label().to_string()),
            row("Size", humanize::file_size(record.size_bytes)),
            row("Modified", humanize::short_date(record.modified_at)),
            row("Location", DEVICE_STORAGE.to_string()),
            row("Album", album),
            row("Starred", yes_no(record.starred).to_string()),
            row("Pinned", yes_no(library.is_pinned(&record.id)).to_string()),
            row("Status", status),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" File Details ")
                .title_alignment(Alignment::Center)
                .title_style(p.title())
                .border_style(p.border())
                .style(Style::default().bg(p.background)),
        );
        frame.render_widget(paragraph, overlay_area);
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
