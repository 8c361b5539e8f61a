//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the key hints for the current mode, how many files are selected,
//! and the last load error if there is one.

use iscript_core::config::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub selected_count: usize,
    pub status_message: Option<&'a str>,
    pub modal_open: bool,
}

const BROWSE_HINTS: &str = " ↑↓ move  Enter open  Tab switch  ^D go to  q quit";
const MODAL_HINTS: &str = " Tab next  Enter confirm  Esc cancel";

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = theme.statusbar.bg;
    let hint_fg = theme.statusbar.hint_fg;
    let count_fg = theme.statusbar.count_fg;
    let message_fg = theme.statusbar.message_fg;

    let hints = if props.modal_open {
        MODAL_HINTS
    } else {
        BROWSE_HINTS
    };

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(hint_fg).bg(bg)),
        Span::styled(
            format!("  {} selected", props.selected_count),
            Style::default()
                .fg(count_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(props: &StatusBarProps<'_>) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_statusbar(f, f.area(), props, &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_selected_count() {
        let text = render_to_string(&StatusBarProps {
            selected_count: 3,
            status_message: None,
            modal_open: false,
        });
        assert!(text.contains("3 selected"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn shows_status_message() {
        let text = render_to_string(&StatusBarProps {
            selected_count: 0,
            status_message: Some("not found"),
            modal_open: false,
        });
        assert!(text.contains("not found"));
    }

    #[test]
    fn modal_hints_replace_browse_hints() {
        let text = render_to_string(&StatusBarProps {
            selected_count: 0,
            status_message: None,
            modal_open: true,
        });
        assert!(text.contains("Esc cancel"));
        assert!(!text.contains("q quit"));
    }
}
