use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, AppMode, Focus};
use crate::layout::{row_at, AppLayout, FormLayout, PathJumpLayout};
use crate::ui::path_jump::JumpControl;
use crate::ui::popup::popup_area;
use crate::ui::script_form::{FormControl, ScriptFormState};

/// Actions the file selector can take in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Move the focused list's cursor up.
    CursorUp,
    /// Move the focused list's cursor down.
    CursorDown,
    /// Activate the explorer row under the cursor.
    Activate,
    /// Swap focus between the two panes.
    ToggleFocus,
    /// Open the Path-Jump modal.
    OpenPathJump,
    /// Quit the application.
    Quit,
    /// Left click on a list row.
    Click { pane: Focus, index: usize },
    /// Scroll wheel over a list.
    Scroll { pane: Focus, down: bool },
    /// Append a character to the Path-Jump input.
    PathJumpChar(char),
    /// Remove the last character from the Path-Jump input.
    PathJumpBackspace,
    /// Move to the next control in the modal.
    PathJumpNext,
    /// Move to the previous control in the modal.
    PathJumpPrev,
    /// Focus a control of the modal without firing it.
    PathJumpFocus(JumpControl),
    /// Enter on the focused control.
    PathJumpSubmit,
    /// Click on a control of the modal.
    PathJumpPress(JumpControl),
    /// Close the modal without loading anything.
    PathJumpCancel,
    /// No action for this input.
    None,
}

/// Maps a key press to an action for the current mode.
pub fn handle_key(key: KeyEvent, mode: &AppMode) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputAction::Quit;
    }
    match mode {
        AppMode::Browsing => handle_browsing_key(key),
        AppMode::PathJump(_) => handle_path_jump_key(key),
    }
}

fn handle_browsing_key(key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') => InputAction::OpenPathJump,
            _ => InputAction::None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => InputAction::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => InputAction::CursorDown,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Tab | KeyCode::BackTab => InputAction::ToggleFocus,
        KeyCode::Char('q') => InputAction::Quit,
        _ => InputAction::None,
    }
}

fn handle_path_jump_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::PathJumpCancel,
        KeyCode::Enter => InputAction::PathJumpSubmit,
        KeyCode::Tab | KeyCode::Right => InputAction::PathJumpNext,
        KeyCode::BackTab | KeyCode::Left => InputAction::PathJumpPrev,
        KeyCode::Backspace => InputAction::PathJumpBackspace,
        KeyCode::Char(c) if is_text(key) => InputAction::PathJumpChar(c),
        _ => InputAction::None,
    }
}

/// True when the key would type its character: Shift is fine, Ctrl and
/// Alt chords are not text.
fn is_text(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Maps a mouse event to an action, hit-testing against the layout of a
/// frame of size `area`.
pub fn handle_mouse(mouse: MouseEvent, app: &App, area: Rect) -> InputAction {
    let position = Position::new(mouse.column, mouse.row);
    match app.mode() {
        AppMode::Browsing => handle_browsing_mouse(mouse.kind, position, app, area),
        AppMode::PathJump(_) => handle_path_jump_mouse(mouse.kind, position, area),
    }
}

fn handle_browsing_mouse(
    kind: MouseEventKind,
    position: Position,
    app: &App,
    area: Rect,
) -> InputAction {
    let layout = AppLayout::new(area);
    let pane = if layout.explorer.contains(position) {
        Focus::Explorer
    } else if layout.selection.contains(position) {
        Focus::Selection
    } else {
        return InputAction::None;
    };

    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (pane_area, cursor, total) = match pane {
                Focus::Explorer => (layout.explorer, app.explorer().cursor(), app.explorer().len()),
                Focus::Selection => (
                    layout.selection,
                    app.selection().cursor(),
                    app.selection().len(),
                ),
            };
            match row_at(pane_area, cursor, total, position) {
                Some(index) => InputAction::Click { pane, index },
                None => InputAction::None,
            }
        }
        MouseEventKind::ScrollDown => InputAction::Scroll { pane, down: true },
        MouseEventKind::ScrollUp => InputAction::Scroll { pane, down: false },
        _ => InputAction::None,
    }
}

fn handle_path_jump_mouse(kind: MouseEventKind, position: Position, area: Rect) -> InputAction {
    if kind != MouseEventKind::Down(MouseButton::Left) {
        return InputAction::None;
    }
    let layout = PathJumpLayout::new(area);
    if layout.change.contains(position) {
        InputAction::PathJumpPress(JumpControl::Change)
    } else if layout.cancel.contains(position) {
        InputAction::PathJumpPress(JumpControl::Cancel)
    } else if layout.input.contains(position) {
        InputAction::PathJumpFocus(JumpControl::Input)
    } else {
        InputAction::None
    }
}

/// Applies a key press to the script form.
pub fn handle_form_key(key: KeyEvent, state: ScriptFormState) -> ScriptFormState {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return state.with_quit();
    }
    if state.is_showing() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => state.with_dismissed(),
            _ => state,
        };
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => state.with_next_control(),
        KeyCode::BackTab | KeyCode::Up => state.with_prev_control(),
        KeyCode::Enter => state.submit(),
        KeyCode::Backspace => state.with_backspace(),
        KeyCode::Char(c) if is_text(key) => state.with_char(c),
        _ => state,
    }
}

/// Applies a mouse event to the script form laid out in `area`.
pub fn handle_form_mouse(mouse: MouseEvent, state: ScriptFormState, area: Rect) -> ScriptFormState {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return state;
    }
    let position = Position::new(mouse.column, mouse.row);
    if state.is_showing() {
        return if popup_area(area).contains(position) {
            state.with_dismissed()
        } else {
            state
        };
    }

    let layout = FormLayout::new(area);
    let hit = [
        (FormControl::Name, layout.name_field),
        (FormControl::Command, layout.command_field),
        (FormControl::Generate, layout.generate),
        (FormControl::Quit, layout.quit),
    ]
    .into_iter()
    .find(|(_, rect)| rect.contains(position));

    match hit {
        Some((control, _)) => state.press(control),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::path_jump::PathJumpState;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use std::fs;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn browsing() -> AppMode {
        AppMode::Browsing
    }

    fn jumping() -> AppMode {
        AppMode::PathJump(PathJumpState::new())
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn setup_app() -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let app = App::new(tmp.path());
        (tmp, app)
    }

    // --- Browsing keys ---

    #[test]
    fn arrows_move_cursor() {
        assert_eq!(handle_key(key(KeyCode::Up), &browsing()), InputAction::CursorUp);
        assert_eq!(
            handle_key(key(KeyCode::Down), &browsing()),
            InputAction::CursorDown
        );
    }

    #[test]
    fn vim_keys_move_cursor() {
        assert_eq!(
            handle_key(key(KeyCode::Char('k')), &browsing()),
            InputAction::CursorUp
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('j')), &browsing()),
            InputAction::CursorDown
        );
    }

    #[test]
    fn enter_activates() {
        assert_eq!(
            handle_key(key(KeyCode::Enter), &browsing()),
            InputAction::Activate
        );
    }

    #[test]
    fn tab_toggles_focus() {
        assert_eq!(
            handle_key(key(KeyCode::Tab), &browsing()),
            InputAction::ToggleFocus
        );
    }

    #[test]
    fn ctrl_d_opens_path_jump() {
        assert_eq!(
            handle_key(
                key_with_mod(KeyCode::Char('d'), KeyModifiers::CONTROL),
                &browsing()
            ),
            InputAction::OpenPathJump
        );
    }

    #[test]
    fn plain_d_does_nothing() {
        assert_eq!(
            handle_key(key(KeyCode::Char('d')), &browsing()),
            InputAction::None
        );
    }

    #[test]
    fn q_quits_while_browsing() {
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), &browsing()),
            InputAction::Quit
        );
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let ctrl_c = key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &browsing()), InputAction::Quit);
        assert_eq!(handle_key(ctrl_c, &jumping()), InputAction::Quit);
    }

    // --- Path-Jump keys ---

    #[test]
    fn path_jump_chars_go_to_input() {
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), &jumping()),
            InputAction::PathJumpChar('q')
        );
        assert_eq!(
            handle_key(key(KeyCode::Backspace), &jumping()),
            InputAction::PathJumpBackspace
        );
    }

    #[test]
    fn path_jump_navigation_keys() {
        assert_eq!(
            handle_key(key(KeyCode::Tab), &jumping()),
            InputAction::PathJumpNext
        );
        assert_eq!(
            handle_key(key(KeyCode::BackTab), &jumping()),
            InputAction::PathJumpPrev
        );
        assert_eq!(
            handle_key(key(KeyCode::Enter), &jumping()),
            InputAction::PathJumpSubmit
        );
        assert_eq!(
            handle_key(key(KeyCode::Esc), &jumping()),
            InputAction::PathJumpCancel
        );
    }

    #[test]
    fn path_jump_ignores_control_chords() {
        for c in ['d', 'w', 'u'] {
            assert_eq!(
                handle_key(key_with_mod(KeyCode::Char(c), KeyModifiers::CONTROL), &jumping()),
                InputAction::None
            );
        }
        assert_eq!(
            handle_key(key_with_mod(KeyCode::Char('x'), KeyModifiers::ALT), &jumping()),
            InputAction::None
        );
    }

    #[test]
    fn path_jump_accepts_shifted_chars() {
        assert_eq!(
            handle_key(key_with_mod(KeyCode::Char('A'), KeyModifiers::SHIFT), &jumping()),
            InputAction::PathJumpChar('A')
        );
    }

    // --- Mouse ---

    #[test]
    fn click_on_explorer_row() {
        let (_tmp, app) = setup_app();
        // Row 0 is the border, row 1 is "..", row 2 is "a.txt".
        let action = handle_mouse(click(5, 2), &app, screen());
        assert_eq!(
            action,
            InputAction::Click {
                pane: Focus::Explorer,
                index: 1
            }
        );
    }

    #[test]
    fn click_below_last_row_is_ignored() {
        let (_tmp, app) = setup_app();
        assert_eq!(handle_mouse(click(5, 10), &app, screen()), InputAction::None);
    }

    #[test]
    fn click_on_statusbar_is_ignored() {
        let (_tmp, app) = setup_app();
        assert_eq!(handle_mouse(click(5, 23), &app, screen()), InputAction::None);
    }

    #[test]
    fn scroll_over_selection_pane() {
        let (_tmp, app) = setup_app();
        let mouse = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 60,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            handle_mouse(mouse, &app, screen()),
            InputAction::Scroll {
                pane: Focus::Selection,
                down: true
            }
        );
    }

    #[test]
    fn click_on_modal_buttons() {
        let (_tmp, app) = setup_app();
        let app = app.open_path_jump();
        let layout = PathJumpLayout::new(screen());

        let action = handle_mouse(click(layout.change.x, layout.change.y), &app, screen());
        assert_eq!(action, InputAction::PathJumpPress(JumpControl::Change));

        let action = handle_mouse(click(layout.cancel.x, layout.cancel.y), &app, screen());
        assert_eq!(action, InputAction::PathJumpPress(JumpControl::Cancel));
    }

    #[test]
    fn click_outside_modal_does_not_reach_lists() {
        let (_tmp, app) = setup_app();
        let app = app.open_path_jump();
        assert_eq!(handle_mouse(click(1, 2), &app, screen()), InputAction::None);
    }

    // --- Form ---

    #[test]
    fn form_typing_and_tab() {
        let state = ScriptFormState::new();
        let state = handle_form_key(key(KeyCode::Char('a')), state);
        let state = handle_form_key(key(KeyCode::Tab), state);
        let state = handle_form_key(key(KeyCode::Char('b')), state);
        assert_eq!(state.name, "a");
        assert_eq!(state.command, "b");
    }

    #[test]
    fn form_generate_then_ok() {
        let state = ScriptFormState::new().with_focus(FormControl::Generate);
        let state = handle_form_key(key(KeyCode::Enter), state);
        assert!(state.is_showing());

        // Typing is swallowed while the popup is open.
        let state = handle_form_key(key(KeyCode::Char('x')), state);
        assert!(state.name.is_empty());

        let state = handle_form_key(key(KeyCode::Enter), state);
        assert!(!state.is_showing());
    }

    #[test]
    fn form_ignores_control_chords() {
        let state = handle_form_key(
            key_with_mod(KeyCode::Char('w'), KeyModifiers::CONTROL),
            ScriptFormState::new(),
        );
        let state = handle_form_key(key_with_mod(KeyCode::Char('u'), KeyModifiers::ALT), state);
        assert!(state.name.is_empty());
        assert!(!state.should_quit);
    }

    #[test]
    fn form_ctrl_c_quits() {
        let state = handle_form_key(
            key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ScriptFormState::new(),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn form_click_on_quit_button() {
        let layout = FormLayout::new(screen());
        let state = handle_form_mouse(
            click(layout.quit.x, layout.quit.y),
            ScriptFormState::new(),
            screen(),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn form_click_on_command_field_focuses() {
        let layout = FormLayout::new(screen());
        let state = handle_form_mouse(
            click(layout.command_field.x, layout.command_field.y),
            ScriptFormState::new(),
            screen(),
        );
        assert_eq!(state.focused, FormControl::Command);
    }
}
