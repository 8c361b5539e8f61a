//! Install-script form.
//!
//! Two text inputs and two buttons inside a bordered frame. Generate
//! renders the script and shows it in a popup until the user presses OK.

use iscript_core::config::theme::Theme;
use iscript_core::script::render_script;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::layout::FormLayout;
use crate::ui::popup::{button_span, render_popup};

/// Which control in the form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormControl {
    #[default]
    Name,
    Command,
    Generate,
    Quit,
}

impl FormControl {
    /// Advance to the next control (wrapping around).
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Command,
            Self::Command => Self::Generate,
            Self::Generate => Self::Quit,
            Self::Quit => Self::Name,
        }
    }

    /// Go to the previous control (wrapping around).
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Quit,
            Self::Command => Self::Name,
            Self::Generate => Self::Command,
            Self::Quit => Self::Generate,
        }
    }

    pub fn is_input(self) -> bool {
        matches!(self, Self::Name | Self::Command)
    }
}

/// State of the install-script form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptFormState {
    pub name: String,
    pub command: String,
    pub focused: FormControl,
    /// Generated script while its popup is open.
    pub generated: Option<String>,
    pub should_quit: bool,
}

impl ScriptFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_showing(&self) -> bool {
        self.generated.is_some()
    }

    /// Appends `c` to the focused input. Ignored on buttons.
    pub fn with_char(self, c: char) -> Self {
        match self.focused {
            FormControl::Name => {
                let mut name = self.name;
                name.push(c);
                Self { name, ..self }
            }
            FormControl::Command => {
                let mut command = self.command;
                command.push(c);
                Self { command, ..self }
            }
            FormControl::Generate | FormControl::Quit => self,
        }
    }

    /// Deletes the last character of the focused input.
    pub fn with_backspace(self) -> Self {
        match self.focused {
            FormControl::Name => {
                let mut name = self.name;
                name.pop();
                Self { name, ..self }
            }
            FormControl::Command => {
                let mut command = self.command;
                command.pop();
                Self { command, ..self }
            }
            FormControl::Generate | FormControl::Quit => self,
        }
    }

    pub fn with_focus(self, focused: FormControl) -> Self {
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

    /// Enter on the focused control: inputs advance focus, buttons fire.
    pub fn submit(self) -> Self {
        match self.focused {
            FormControl::Name | FormControl::Command => self.with_next_control(),
            FormControl::Generate => self.with_generated(),
            FormControl::Quit => self.with_quit(),
        }
    }

    /// Focus `control` and fire it if it is a button.
    pub fn press(self, control: FormControl) -> Self {
        let state = self.with_focus(control);
        if control.is_input() {
            state
        } else {
            state.submit()
        }
    }

    /// Render the script from the current inputs and open its popup.
    pub fn with_generated(self) -> Self {
        let script = render_script(&self.name, &self.command);
        tracing::info!(name = %self.name, "script generated");
        Self {
            generated: Some(script),
            ..self
        }
    }

    /// Close the script popup. Inputs and focus are kept.
    pub fn with_dismissed(self) -> Self {
        Self {
            generated: None,
            ..self
        }
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }
}

const TITLE: &str = " Install Script Creator ";

/// Renders the form over the whole frame, plus the script popup if open.
/// Returns the popup area when the popup is shown.
pub fn render_script_form(f: &mut Frame, state: &ScriptFormState, theme: &Theme) -> Option<Rect> {
    let layout = FormLayout::new(f.area());
    let border_fg = theme.popup.border_fg;
    let label_fg = theme.popup.label_fg;
    let focused_fg = theme.popup.focused_fg;

    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(TITLE)
            .border_style(Style::default().fg(border_fg)),
        layout.frame,
    );

    let fields = [
        (FormControl::Name, FormLayout::NAME_LABEL, &state.name, layout.name_field),
        (
            FormControl::Command,
            FormLayout::COMMAND_LABEL,
            &state.command,
            layout.command_field,
        ),
    ];
    for (control, label, value, field) in fields {
        let is_focused = state.focused == control && !state.is_showing();
        let label_area = Rect {
            x: field.x.saturating_sub(FormLayout::label_width()),
            width: FormLayout::label_width(),
            ..field
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default().fg(label_fg),
            ))),
            label_area,
        );

        let style = if is_focused {
            Style::default()
                .fg(focused_fg)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        let cursor = if is_focused { "_" } else { "" };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                tail_to_width(&format!("{value}{cursor}"), field.width),
                style,
            ))),
            field,
        );
    }

    for (control, label, area) in [
        (FormControl::Generate, FormLayout::GENERATE_LABEL, layout.generate),
        (FormControl::Quit, FormLayout::QUIT_LABEL, layout.quit),
    ] {
        let is_focused = state.focused == control && !state.is_showing();
        f.render_widget(
            Paragraph::new(Line::from(button_span(label, is_focused, theme))),
            area,
        );
    }

    state.generated.as_ref().map(|script| {
        let lines: Vec<String> = script.lines().map(str::to_owned).collect();
        render_popup(f, " Generated Script ", &lines, theme)
    })
}

/// Keeps the last `width` characters so the cursor stays visible.
fn tail_to_width(text: &str, width: u16) -> String {
    let count = text.chars().count();
    let width = width as usize;
    if count <= width {
        return text.to_owned();
    }
    text.chars().skip(count - width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn type_text(state: ScriptFormState, text: &str) -> ScriptFormState {
        text.chars().fold(state, ScriptFormState::with_char)
    }

    fn buffer_text(state: &ScriptFormState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_script_form(f, state, &Theme::default());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn form_control_cycles_both_ways() {
        let mut control = FormControl::Name;
        for _ in 0..4 {
            control = control.next();
        }
        assert_eq!(control, FormControl::Name);
        assert_eq!(FormControl::Name.prev(), FormControl::Quit);
    }

    #[test]
    fn typing_goes_to_focused_input() {
        let state = type_text(ScriptFormState::new(), "nginx");
        let state = type_text(state.with_next_control(), "apt-get install -y nginx");
        assert_eq!(state.name, "nginx");
        assert_eq!(state.command, "apt-get install -y nginx");
    }

    #[test]
    fn typing_on_button_is_ignored() {
        let state = ScriptFormState::new()
            .with_focus(FormControl::Generate)
            .with_char('x')
            .with_backspace();
        assert!(state.name.is_empty());
        assert!(state.command.is_empty());
    }

    #[test]
    fn enter_on_input_advances() {
        let state = ScriptFormState::new().submit();
        assert_eq!(state.focused, FormControl::Command);
        assert!(!state.is_showing());
    }

    #[test]
    fn generate_renders_script() {
        let state = type_text(ScriptFormState::new(), "nginx");
        let state = type_text(state.with_next_control(), "apt-get install -y nginx");
        let state = state.press(FormControl::Generate);
        assert_eq!(
            state.generated.as_deref(),
            Some("#!/bin/bash\n\n# nginx\napt-get install -y nginx\n")
        );
    }

    #[test]
    fn generate_with_empty_inputs() {
        let state = ScriptFormState::new().press(FormControl::Generate);
        assert_eq!(state.generated.as_deref(), Some("#!/bin/bash\n\n# \n\n"));
    }

    #[test]
    fn dismiss_keeps_inputs() {
        let state = type_text(ScriptFormState::new(), "x")
            .press(FormControl::Generate)
            .with_dismissed();
        assert!(!state.is_showing());
        assert_eq!(state.name, "x");
        assert_eq!(state.focused, FormControl::Generate);
    }

    #[test]
    fn quit_button_sets_should_quit() {
        assert!(ScriptFormState::new().press(FormControl::Quit).should_quit);
    }

    #[test]
    fn press_input_only_focuses() {
        let state = ScriptFormState::new().press(FormControl::Command);
        assert_eq!(state.focused, FormControl::Command);
        assert!(!state.should_quit);
    }

    #[test]
    fn renders_title_labels_and_buttons() {
        let text = buffer_text(&ScriptFormState::new());
        assert!(text.contains("Install Script Creator"));
        assert!(text.contains("Script Name"));
        assert!(text.contains("Install Command"));
        assert!(text.contains("[ Generate ]"));
        assert!(text.contains("[ Quit ]"));
    }

    #[test]
    fn renders_generated_script_popup() {
        let state = type_text(ScriptFormState::new(), "nginx").press(FormControl::Generate);
        let text = buffer_text(&state);
        assert!(text.contains("#!/bin/bash"));
        assert!(text.contains("# nginx"));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn tail_to_width_keeps_end() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("ab", 3), "ab");
    }
}
