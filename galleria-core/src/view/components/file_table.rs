//! src/view/components/file_table.rs
//! ============================================================================

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
};

use crate::{
    controller::view_controller::ViewController,
    util::humanize,
    view::{icons, theme::Palette},
};

/// Gallery listing: active files narrowed by album filter and search.
pub struct FileTable;

impl FileTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ctl: &ViewController, p: &Palette, area: Rect) {
        let library = ctl.library();
        let files = ctl.visible_files();

        let mut title = match ctl.selected_album_entry() {
            Some(album) => format!(" Gallery › {} ", album.name),
            None => " Gallery ".to_string(),
        };
        if !ctl.search_query().is_empty() {
            title.push_str(&format!("/ \"{}\" ", ctl.search_query()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(p.title())
            .border_style(Style::default().fg(p.comment))
            .style(Style::default().bg(p.background));

        if files.is_empty() {
            let hint = if ctl.search_query().is_empty() {
                "No files here yet."
            } else {
                "No files match your search."
            };
            let empty = Paragraph::new(hint)
                .style(p.muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(vec!["", "Name", "Type", "Size", "Modified", "Album"])
            .style(p.header())
            .bottom_margin(1);

        let rows: Vec<Row> = files
            .iter()
            .map(|record| {
                let marks = format!(
                    "{}{}",
                    if record.starred { icons::STAR_ICON } else { " " },
                    if library.is_pinned(&record.id) {
                        icons::PIN_ICON
                    } else {
                        " "
                    },
                );
                let album = library
                    .resolve_album(record)
                    .map(|a| a.name.clone())
                    .unwrap_or_default();

                Row::new(vec![
                    Cell::from(marks).style(Style::default().fg(p.yellow)),
                    Cell::from(format!("{} {}", icons::kind_icon(record.kind), record.name)),
                    Cell::from(record.kind.label()).style(p.muted()),
                    Cell::from(humanize::file_size(record.size_bytes)),
                    Cell::from(humanize::short_date(record.modified_at)),
                    Cell::from(album).style(Style::default().fg(p.cyan)),
                ])
                .style(Style::default().fg(p.foreground))
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(13),
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

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

impl Default for FileTable {
    fn default() -> Self {
        Self::new()
    }
}
