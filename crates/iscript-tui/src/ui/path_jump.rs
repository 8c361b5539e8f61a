//! Path-Jump modal.
//!
//! A transient dialog with one text input and two buttons. It holds only
//! the text being typed and which control has focus; the directory it
//! names is handed to the navigation model when the user picks Change.

use iscript_core::config::theme::Theme;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::layout::PathJumpLayout;
use crate::ui::popup::button_span;

/// Which control of the modal has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpControl {
    #[default]
    Input,
    Change,
    Cancel,
}

impl JumpControl {
    /// Advance to the next control (wrapping around).
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Change,
            Self::Change => Self::Cancel,
            Self::Cancel => Self::Input,
        }
    }

    /// Go to the previous control (wrapping around).
    pub fn prev(self) -> Self {
        match self {
            Self::Input => Self::Cancel,
            Self::Change => Self::Input,
            Self::Cancel => Self::Change,
        }
    }
}

/// What the modal asks its owner to do when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Load the typed directory.
    Change(String),
    /// Close without doing anything.
    Cancel,
}

/// State of an open Path-Jump modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathJumpState {
    pub input: String,
    pub focused: JumpControl,
}

impl PathJumpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `c` to the input. Ignored unless the input has focus.
    pub fn with_char(self, c: char) -> Self {
        if self.focused != JumpControl::Input {
            return self;
        }
        let mut input = self.input;
        input.push(c);
        Self { input, ..self }
    }

    /// Deletes the last character of the input.
    pub fn with_backspace(self) -> Self {
        if self.focused != JumpControl::Input {
            return self;
        }
        let mut input = self.input;
        input.pop();
        Self { input, ..self }
    }

    pub fn with_focus(self, focused: JumpControl) -> Self {
        Self { focused, ..self }
    }

    pub fn with_next_control(self) -> Self {
        let focused = self.focused.next();
        self.with_focus(focused)
    }

    pub fn with_prev_control(self) -> Self {
        let focused = self.focused.prev();
        self.with_focus(focused)
    }

    /// Resolves Enter on the focused control. Enter in the input means Change.
    pub fn submit(self) -> JumpOutcome {
        match self.focused {
            JumpControl::Input | JumpControl::Change => JumpOutcome::Change(self.input),
            JumpControl::Cancel => JumpOutcome::Cancel,
        }
    }
}

/// Renders the modal centred over the frame.
pub fn render_path_jump(f: &mut Frame, state: &PathJumpState, theme: &Theme) {
    let layout = PathJumpLayout::new(f.area());
    let border_fg = theme.popup.border_fg;
    let focused_fg = theme.popup.focused_fg;
    let label_fg = theme.popup.label_fg;

    f.render_widget(Clear, layout.popup);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Go to directory ")
            .border_style(Style::default().fg(border_fg)),
        layout.popup,
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        " Directory:",
        Style::default().fg(label_fg),
    )));
    f.render_widget(prompt, layout.prompt);

    let input_focused = state.focused == JumpControl::Input;
    let cursor = if input_focused { "_" } else { "" };
    let marker = if input_focused { "> " } else { "  " };
    let input_style = if input_focused {
        Style::default().fg(focused_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(label_fg)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{marker}{}{cursor}", state.input),
            input_style,
        ))),
        layout.input,
    );

    f.render_widget(
        Paragraph::new(Line::from(button_span(
            PathJumpLayout::CHANGE_LABEL,
            state.focused == JumpControl::Change,
            theme,
        ))),
        layout.change,
    );
    f.render_widget(
        Paragraph::new(Line::from(button_span(
            PathJumpLayout::CANCEL_LABEL,
            state.focused == JumpControl::Cancel,
            theme,
        ))),
        layout.cancel,
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Tab: next | Enter: confirm | Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        layout.hint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_control_next_cycles() {
        assert_eq!(JumpControl::Input.next(), JumpControl::Change);
        assert_eq!(JumpControl::Change.next(), JumpControl::Cancel);
        assert_eq!(JumpControl::Cancel.next(), JumpControl::Input);
    }

    #[test]
    fn jump_control_prev_cycles() {
        assert_eq!(JumpControl::Input.prev(), JumpControl::Cancel);
        assert_eq!(JumpControl::Change.prev(), JumpControl::Input);
        assert_eq!(JumpControl::Cancel.prev(), JumpControl::Change);
    }

    #[test]
    fn typing_edits_input() {
        let state = PathJumpState::new()
            .with_char('/')
            .with_char('t')
            .with_char('x')
            .with_backspace()
            .with_char('m');
        assert_eq!(state.input, "/tm");
    }

    #[test]
    fn typing_ignored_on_buttons() {
        let state = PathJumpState::new()
            .with_char('a')
            .with_next_control()
            .with_char('b')
            .with_backspace();
        assert_eq!(state.input, "a");
    }

    #[test]
    fn enter_in_input_changes() {
        let state = PathJumpState::new().with_char('~');
        assert_eq!(state.submit(), JumpOutcome::Change("~".to_string()));
    }

    #[test]
    fn enter_on_change_button_changes() {
        let state = PathJumpState::new()
            .with_char('x')
            .with_focus(JumpControl::Change);
        assert_eq!(state.submit(), JumpOutcome::Change("x".to_string()));
    }

    #[test]
    fn enter_on_cancel_button_cancels() {
        let state = PathJumpState::new()
            .with_char('x')
            .with_prev_control();
        assert_eq!(state.submit(), JumpOutcome::Cancel);
    }
}
