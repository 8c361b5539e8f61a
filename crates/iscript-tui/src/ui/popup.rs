use iscript_core::config::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::layout::centered_rect;

/// Renders a centered popup dialog with the given title and message lines,
/// followed by a single focused `OK` button. Returns the popup area.
pub fn render_popup(f: &mut Frame, title: &str, lines: &[String], theme: &Theme) -> Rect {
    let area = popup_area(f.area());
    let border_fg = theme.popup.border_fg;

    f.render_widget(Clear, area);

    let mut content: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    content.push(Line::from(""));
    content.push(Line::from(button_span("OK", true, theme)));

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
    area
}

/// Area used by [`render_popup`] inside a frame of size `area`.
pub fn popup_area(area: Rect) -> Rect {
    centered_rect(60, 50, area)
}

/// Renders a button label as `[ label ]`, reversed when focused.
pub fn button_span(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.popup.focused_fg)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(theme.popup.button_fg)
    };
    Span::styled(format!("[ {label} ]"), style)
}
