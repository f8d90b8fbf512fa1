//! src/view/components/picker_overlay.rs
//! ============================================================================

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState},
};

use crate::{
    model::{library::Library, ui_state::PickerKind},
    view::{icons, layout::centered_fixed, theme::Palette},
};

/// Small list dialog: album to assign a file to, or the quick access list.
pub struct PickerOverlay;

impl PickerOverlay {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(
        frame: &mut Frame<'_>,
        kind: &PickerKind,
        selected: usize,
        library: &Library,
        p: &Palette,
        area: Rect,
    ) {
        let (title, hint, items): (String, &str, Vec<ListItem>) = match kind {
            PickerKind::Album(file) => {
                let name = library.get(file).map_or("file", |r| r.name.as_str());
                let items = library
                    .album_summaries()
                    .into_iter()
                    .map(|album| {
                        ListItem::new(format!(
                            "{} {} ({})",
                            icons::ALBUM_ICON,
                            album.name,
                            album.file_count
                        ))
                    })
                    .collect();
                (
                    format!(" Add \"{name}\" to album "),
                    " Enter add • Esc cancel ",
                    items,
                )
            }
            PickerKind::QuickAccess => {
                let items: Vec<ListItem> = library
                    .quick_access_items()
                    .into_iter()
                    .map(|item| {
                        ListItem::new(format!("{} {}", icons::kind_icon(item.kind), item.name))
                    })
                    .collect();
                (
                    format!(" {} Quick Access ", icons::PIN_ICON),
                    " Enter open • p unpin • d delete • Esc close ",
                    items,
                )
            }
        };

        let items = if items.is_empty() {
            vec![ListItem::new("  (empty)").style(p.muted())]
        } else {
            items
        };

        let height = (items.len() as u16 + 2).clamp(4, 16);
        let overlay_area = centered_fixed(50, height, area);
        frame.render_widget(Clear, overlay_area);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .title_style(p.title())
                    .title_bottom(Line::from(Span::styled(hint, p.muted())).centered())
                    .border_style(p.border())
                    .style(Style::default().bg(p.background)),
            )
            .style(Style::default().fg(p.foreground))
            .highlight_style(p.highlight())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, overlay_area, &mut state);
    }
}
