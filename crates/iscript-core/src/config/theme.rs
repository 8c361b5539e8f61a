//! Built-in colour scheme.
//!
//! There is no configuration file; the defaults below are the whole theme.

use ratatui::style::Color;

/// Complete theme with per-component colour groups.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub panel: PanelTheme,
    pub statusbar: StatusBarTheme,
    pub popup: PopupTheme,
}

/// Explorer and selection list colours.
#[derive(Debug, Clone)]
pub struct PanelTheme {
    pub dir_fg: Color,
    pub parent_fg: Color,
    pub error_fg: Color,
    pub selected_fg: Color,
    pub active_border_fg: Color,
    pub inactive_border_fg: Color,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            dir_fg: Color::Blue,
            parent_fg: Color::Cyan,
            error_fg: Color::Red,
            selected_fg: Color::Yellow,
            active_border_fg: Color::Yellow,
            inactive_border_fg: Color::DarkGray,
        }
    }
}

/// Status bar colours.
#[derive(Debug, Clone)]
pub struct StatusBarTheme {
    pub bg: Color,
    pub hint_fg: Color,
    pub count_fg: Color,
    pub message_fg: Color,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: Color::White,
            hint_fg: Color::Black,
            count_fg: Color::Blue,
            message_fg: Color::Red,
        }
    }
}

/// Modal and form colours.
#[derive(Debug, Clone)]
pub struct PopupTheme {
    pub border_fg: Color,
    pub label_fg: Color,
    pub focused_fg: Color,
    pub button_fg: Color,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: Color::Yellow,
            label_fg: Color::White,
            focused_fg: Color::Yellow,
            button_fg: Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel_colours() {
        let theme = Theme::default();
        assert_eq!(theme.panel.dir_fg, Color::Blue);
        assert_eq!(theme.panel.error_fg, Color::Red);
        assert_eq!(theme.panel.inactive_border_fg, Color::DarkGray);
    }

    #[test]
    fn default_popup_border() {
        assert_eq!(Theme::default().popup.border_fg, Color::Yellow);
    }

    #[test]
    fn focused_border_differs_from_unfocused() {
        let panel = PanelTheme::default();
        assert_ne!(panel.active_border_fg, panel.inactive_border_fg);
    }
}
