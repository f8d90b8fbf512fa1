//! src/view/components/folder_list.rs
//! ============================================================================

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
};

use crate::{
    controller::view_controller::ViewController,
    view::{icons, theme::Palette},
};

/// File manager view: breadcrumb, device folders and a per-kind summary.
pub struct FolderList;

impl FolderList {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ctl: &ViewController, p: &Palette, area: Rect) {
        let library = ctl.library();

        let [crumb_area, folders_area, summary_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let crumb = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icons::STORAGE_ICON), Style::default().fg(p.cyan)),
            Span::styled(ctl.current_path(), Style::default().fg(p.foreground).bold()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" File Manager ")
                .title_style(p.title())
                .border_style(Style::default().fg(p.comment))
                .style(Style::default().bg(p.background)),
        );
        frame.render_widget(crumb, crumb_area);

        let items: Vec<ListItem> = library
            .folders()
            .iter()
            .map(|folder| {
                ListItem::new(format!("{} {}", icons::FOLDER_ICON, folder.name))
                    .style(Style::default().fg(p.cyan))
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(ctl.ui().selected));
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Folders ")
                    .title_style(p.title())
                    .border_style(Style::default().fg(p.comment))
                    .style(Style::default().bg(p.background)),
            )
            .highlight_style(p.highlight())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);
        frame.render_stateful_widget(list, folders_area, &mut list_state);

        let summary: Vec<Span> = library
            .breakdown()
            .iter()
            .flat_map(|entry| {
                [
                    Span::styled(format!("{} ", entry.label()), p.muted()),
                    Span::styled(format!("{}  ", entry.count), Style::default().fg(p.green)),
                ]
            })
            .collect();
        let summary = Paragraph::new(Line::from(summary)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Files by type ")
                .title_style(p.title())
                .border_style(Style::default().fg(p.comment))
                .style(Style::default().bg(p.background)),
        );
        frame.render_widget(summary, summary_area);
    }
}

impl Default for FolderList {
    fn default() -> Self {
        Self::new()
    }
}
