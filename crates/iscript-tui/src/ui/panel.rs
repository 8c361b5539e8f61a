//! The two list panes: the directory explorer and the selection list.
//!
//! Both draw only the rows in [`visible_window`], so the row under a mouse
//! click can be recovered from the area and cursor alone.

use iscript_core::config::theme::Theme;
use iscript_core::fs::entry::EntryKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::{ExplorerRow, ListView};
use crate::layout::{inner_of, visible_window};

/// Renders the explorer pane. Directories are blue+bold, the parent link
/// cyan and an error marker red; the cursor row is reversed.
pub fn render_explorer(
    f: &mut Frame,
    area: Rect,
    view: &ListView<ExplorerRow>,
    title: &str,
    theme: &Theme,
    is_active: bool,
) {
    let items = view
        .rows()
        .iter()
        .map(|row| Line::from(Span::styled(row.label.clone(), kind_style(row.kind, theme))))
        .collect();
    render_list(f, area, items, view.cursor(), title, theme, is_active);
}

/// Renders the selection pane: one absolute path per row, oldest first.
pub fn render_selection(
    f: &mut Frame,
    area: Rect,
    view: &ListView<String>,
    theme: &Theme,
    is_active: bool,
) {
    let title = format!(" Selected ({}) ", view.len());
    let items = view
        .rows()
        .iter()
        .map(|path| Line::from(path.as_str()))
        .collect();
    render_list(f, area, items, view.cursor(), &title, theme, is_active);
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    lines: Vec<Line<'_>>,
    cursor: usize,
    title: &str,
    theme: &Theme,
    is_active: bool,
) {
    let selected_color = theme.panel.selected_fg;
    let border_color = if is_active {
        theme.panel.active_border_fg
    } else {
        theme.panel.inactive_border_fg
    };

    let total = lines.len();
    let max_visible = inner_of(area).height as usize;
    let (start, end) = visible_window(cursor, total, max_visible);

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(start)
        .take(end - start)
        .map(ListItem::new)
        .collect();

    let highlight = if is_active {
        Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(selected_color)
    } else {
        Style::default().fg(selected_color)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_owned())
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if total > 0 {
        state.select(Some(cursor - start));
    }

    f.render_stateful_widget(list, area, &mut state);
}

fn kind_style(kind: EntryKind, theme: &Theme) -> Style {
    match kind {
        EntryKind::Directory => Style::default()
            .fg(theme.panel.dir_fg)
            .add_modifier(Modifier::BOLD),
        EntryKind::ParentLink => Style::default().fg(theme.panel.parent_fg),
        EntryKind::ErrorMarker => Style::default()
            .fg(theme.panel.error_fg)
            .add_modifier(Modifier::ITALIC),
        EntryKind::File => Style::default().fg(Color::Reset),
    }
}
