//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Every rectangle is derived from the frame area alone, so a click can be
//! mapped back to the widget it landed on without remembering anything
//! from the last draw.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of a rendered button label such as `[ Change ]`.
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Regions of the two-pane file selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub explorer: Rect,
    pub selection: Rect,
    pub statusbar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[0]);

        Self {
            explorer: panes[0],
            selection: panes[1],
            statusbar: vertical[1],
        }
    }
}

/// Regions of the Path-Jump modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathJumpLayout {
    pub popup: Rect,
    pub prompt: Rect,
    pub input: Rect,
    pub change: Rect,
    pub cancel: Rect,
    pub hint: Rect,
}

impl PathJumpLayout {
    pub const CHANGE_LABEL: &'static str = "Change";
    pub const CANCEL_LABEL: &'static str = "Cancel";

    pub fn new(area: Rect) -> Self {
        let popup = centered_fixed(64, 8, area);
        let inner = inner_of(popup);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let change = button_at(rows[3], 1, Self::CHANGE_LABEL);
        let cancel_offset = change.right().saturating_sub(rows[3].x) + 2;
        let cancel = button_at(rows[3], cancel_offset, Self::CANCEL_LABEL);

        Self {
            popup,
            prompt: rows[0],
            input: rows[1],
            change,
            cancel,
            hint: rows[4],
        }
    }
}

/// Regions of the install-script form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub frame: Rect,
    pub name_field: Rect,
    pub command_field: Rect,
    pub generate: Rect,
    pub quit: Rect,
}

impl FormLayout {
    pub const NAME_LABEL: &'static str = "Script Name";
    pub const COMMAND_LABEL: &'static str = "Install Command";
    pub const GENERATE_LABEL: &'static str = "Generate";
    pub const QUIT_LABEL: &'static str = "Quit";

    /// Visible width of the name input.
    pub const NAME_WIDTH: u16 = 20;
    /// Visible width of the command input.
    pub const COMMAND_WIDTH: u16 = 40;

    pub fn new(area: Rect) -> Self {
        let inner = inner_of(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        // Inputs start after the widest label.
        let label_width = Self::label_width();
        let field = |row: Rect, width: u16| Rect {
            x: row.x + 1 + label_width,
            width: width.min(row.width.saturating_sub(1 + label_width)),
            ..row
        };

        let generate = button_at(rows[5], 1, Self::GENERATE_LABEL);
        let quit_offset = generate.right().saturating_sub(rows[5].x) + 2;
        let quit = button_at(rows[5], quit_offset, Self::QUIT_LABEL);

        Self {
            frame: area,
            name_field: field(rows[1], Self::NAME_WIDTH),
            command_field: field(rows[3], Self::COMMAND_WIDTH),
            generate,
            quit,
        }
    }

    /// Width reserved for the field labels.
    pub fn label_width() -> u16 {
        Self::COMMAND_LABEL.len() as u16 + 2
    }
}

/// Computes the visible window `(start, end)` for a list of `total` items
/// so that `selected` is always in view within `max_visible` lines.
pub fn visible_window(selected: usize, total: usize, max_visible: usize) -> (usize, usize) {
    if total <= max_visible {
        return (0, total);
    }
    let half = max_visible / 2;
    let start = if selected <= half {
        0
    } else if selected + half >= total {
        total.saturating_sub(max_visible)
    } else {
        selected - half
    };
    let end = (start + max_visible).min(total);
    (start, end)
}

/// Maps a click at `position` inside a bordered list at `area` to the index
/// of the row under it, given the list's cursor and length.
pub fn row_at(area: Rect, cursor: usize, total: usize, position: Position) -> Option<usize> {
    let inner = inner_of(area);
    if !inner.contains(position) {
        return None;
    }
    let (start, end) = visible_window(cursor, total, inner.height as usize);
    let index = start + (position.y - inner.y) as usize;
    (index < end).then_some(index)
}

/// Returns `area` shrunk by a one-cell border on every side.
pub fn inner_of(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Returns a `width`×`height` rectangle centred in `area`, clamped to it.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn button_at(row: Rect, offset: u16, label: &str) -> Rect {
    let x = row.x.saturating_add(offset);
    Rect {
        x,
        y: row.y,
        width: button_width(label).min(row.right().saturating_sub(x)),
        height: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn app_layout_splits_panes_evenly() {
        let layout = AppLayout::new(screen());
        assert_eq!(layout.explorer.width, 40);
        assert_eq!(layout.selection.x, 40);
        assert_eq!(layout.statusbar.y, 23);
        assert_eq!(layout.statusbar.height, 1);
    }

    #[test]
    fn visible_window_small_list() {
        assert_eq!(visible_window(2, 5, 10), (0, 5));
    }

    #[test]
    fn visible_window_scrolls_to_keep_cursor() {
        assert_eq!(visible_window(0, 100, 10), (0, 10));
        assert_eq!(visible_window(50, 100, 10), (45, 55));
        assert_eq!(visible_window(99, 100, 10), (90, 100));
    }

    #[test]
    fn row_at_maps_first_row() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(row_at(area, 0, 5, Position::new(3, 1)), Some(0));
        assert_eq!(row_at(area, 0, 5, Position::new(3, 3)), Some(2));
    }

    #[test]
    fn row_at_ignores_border_and_empty_rows() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(row_at(area, 0, 5, Position::new(3, 0)), None);
        assert_eq!(row_at(area, 0, 5, Position::new(0, 2)), None);
        assert_eq!(row_at(area, 0, 5, Position::new(3, 7)), None);
    }

    #[test]
    fn row_at_accounts_for_scroll() {
        let area = Rect::new(0, 0, 40, 12); // 10 visible rows
        assert_eq!(row_at(area, 50, 100, Position::new(3, 1)), Some(45));
    }

    #[test]
    fn path_jump_buttons_do_not_overlap() {
        let layout = PathJumpLayout::new(screen());
        assert!(layout.change.right() < layout.cancel.x);
        assert_eq!(layout.change.y, layout.cancel.y);
        assert!(layout.popup.contains(Position::new(layout.cancel.x, layout.cancel.y)));
    }

    #[test]
    fn form_layout_fields_below_each_other() {
        let layout = FormLayout::new(screen());
        assert!(layout.name_field.y < layout.command_field.y);
        assert!(layout.command_field.y < layout.generate.y);
        assert_eq!(layout.name_field.width, FormLayout::NAME_WIDTH);
        assert_eq!(layout.command_field.width, FormLayout::COMMAND_WIDTH);
    }

    #[test]
    fn centered_fixed_clamps_to_area() {
        let rect = centered_fixed(100, 50, Rect::new(0, 0, 40, 10));
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn centered_fixed_centres() {
        let rect = centered_fixed(20, 4, Rect::new(0, 0, 40, 10));
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
