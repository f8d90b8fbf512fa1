//! src/view/components/recycle_bin.rs
//! ============================================================================
//! # Recycle bin table
//!
//! Deleted files with their selection mark and the days left before purge.
//! Days are computed against the frame's `now`, never cached.

use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
};

use crate::{
    controller::view_controller::ViewController,
    model::lifecycle::{self, RETENTION_DAYS},
    util::humanize,
    view::{icons, theme::Palette},
};

pub struct RecycleBinTable;

impl RecycleBinTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        ctl: &ViewController,
        p: &Palette,
        now: DateTime<Utc>,
        area: Rect,
    ) {
        let deleted = ctl.deleted_files();

        let [notice_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        let notice = Paragraph::new(format!(
            " Items are permanently deleted after {RETENTION_DAYS} days.  Selected: {}/{}",
            ctl.bin_selection_len(),
            deleted.len()
        ))
        .style(Style::default().fg(p.orange).bg(p.background));
        frame.render_widget(notice, notice_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Recycle Bin ", icons::TRASH_ICON))
            .title_style(p.title())
            .border_style(Style::default().fg(p.red))
            .style(Style::default().bg(p.background));

        if deleted.is_empty() {
            let empty = Paragraph::new("Recycle Bin is empty")
                .style(p.muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, table_area);
            return;
        }

        let header = Row::new(vec!["", "Name", "Size", "Deleted", "Time left"])
            .style(p.header())
            .bottom_margin(1);

        let rows: Vec<Row> = deleted
            .iter()
            .map(|record| {
                let mark = if ctl.is_bin_selected(&record.id) {
                    icons::CHECKED
                } else {
                    icons::UNCHECKED
                };
                let days = lifecycle::days_remaining(record.deleted_at, now);

                Row::new(vec![
                    Cell::from(mark).style(Style::default().fg(p.cyan)),
                    Cell::from(format!("{} {}", icons::kind_icon(record.kind), record.name)),
                    Cell::from(humanize::file_size(record.size_bytes)),
                    Cell::from(humanize::short_date(record.deleted_at)).style(p.muted()),
                    Cell::from(humanize::days_left(days)).style(p.days_left(days)),
                ])
                .style(Style::default().fg(p.foreground))
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(14),
        ];

        let mut table_state = TableState::default().with_selected(Some(ctl.ui().selected));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(p.highlight())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, table_area, &mut table_state);
    }
}

impl Default for RecycleBinTable {
    fn default() -> Self {
        Self::new()
    }
}
