//! src/view/components/sidebar.rs
//! ============================================================================
//! # Sidebar: views, albums, quick access and storage breakdown

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Padding},
};

use crate::{
    controller::view_controller::ViewController,
    model::view_mode::ViewMode,
    view::{icons, theme::Palette},
};

pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ctl: &ViewController, p: &Palette, area: Rect) {
        let library = ctl.library();
        let quick_access = library.quick_access_items();
        let breakdown = library.breakdown();

        let [views_area, albums_area, quick_area, storage_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(quick_access.len().clamp(1, 5) as u16 + 2),
            Constraint::Length(breakdown.len() as u16 + 2),
        ])
        .areas(area);

        // views ----------------------------------------------------------------
        let views = [
            (ViewMode::Gallery, icons::IMAGE_ICON, String::new()),
            (ViewMode::FileManager, icons::STORAGE_ICON, String::new()),
            (
                ViewMode::RecycleBin,
                icons::TRASH_ICON,
                format!(" ({})", library.deleted_count()),
            ),
        ]
        .into_iter()
        .map(|(view, icon, suffix)| {
            let style = if view == ctl.view() {
                p.highlight()
            } else {
                p.base()
            };
            ListItem::new(format!("{icon} {view}{suffix}")).style(style)
        });
        frame.render_widget(List::new(views).block(self.block(" Galleria ", p)), views_area);

        // albums ---------------------------------------------------------------
        let selected = ctl.selected_album();
        let all_style = if selected.is_none() && ctl.view() != ViewMode::RecycleBin {
            Style::default().fg(p.cyan).add_modifier(Modifier::BOLD)
        } else {
            p.base()
        };
        let mut albums = vec![
            ListItem::new(format!("  All Files ({})", library.list_active().len()))
                .style(all_style),
        ];
        albums.extend(library.album_summaries().into_iter().map(|album| {
            let style = if selected == Some(&album.id) {
                Style::default().fg(p.cyan).add_modifier(Modifier::BOLD)
            } else {
                p.base()
            };
            ListItem::new(format!(
                "{} {} ({})",
                icons::ALBUM_ICON,
                album.name,
                album.file_count
            ))
            .style(style)
        }));
        frame.render_widget(List::new(albums).block(self.block(" Albums ", p)), albums_area);

        // quick access ---------------------------------------------------------
        let pinned: Vec<ListItem> = if quick_access.is_empty() {
            vec![ListItem::new("  nothing pinned").style(p.muted())]
        } else {
            quick_access
                .iter()
                .map(|item| {
                    ListItem::new(format!("{} {}", icons::kind_icon(item.kind), item.name))
                        .style(p.base())
                })
                .collect()
        };
        frame.render_widget(
            List::new(pinned).block(self.block(" Quick Access ", p)),
            quick_area,
        );

        // storage --------------------------------------------------------------
        let storage = breakdown.iter().map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<14}", entry.label()), p.muted()),
                Span::styled(entry.count.to_string(), Style::default().fg(p.green)),
            ]))
        });
        frame.render_widget(
            List::new(storage).block(self.block(" Storage ", p)),
            storage_area,
        );
    }

    fn block<'a>(&self, title: &'a str, p: &Palette) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(p.title())
            .border_style(Style::default().fg(p.comment))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(p.background))
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}
