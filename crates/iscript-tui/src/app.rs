use std::path::Path;

use iscript_core::config::theme::Theme;
use iscript_core::event::{Command, Event};
use iscript_core::fs::entry::EntryKind;
use iscript_core::nav::state::NavigationState;

use crate::input::InputAction;
use crate::ui::path_jump::{JumpControl, JumpOutcome, PathJumpState};

/// Application mode: determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Keys and clicks go to the two lists.
    Browsing,
    /// The Path-Jump modal is open; list input is suspended.
    PathJump(PathJumpState),
}

/// Which list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Explorer,
    Selection,
}

impl Focus {
    /// Returns the other pane. Applying it twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::Explorer => Self::Selection,
            Self::Selection => Self::Explorer,
        }
    }
}

/// One explorer row as the widget draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerRow {
    pub label: String,
    pub kind: EntryKind,
}

/// View-level state of a list widget: its rows and cursor.
///
/// Rows are rebuilt from the model only when the model says they changed;
/// drawing never touches the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<T> {
    rows: Vec<T>,
    cursor: usize,
}

impl<T> ListView<T> {
    fn new(rows: Vec<T>) -> Self {
        Self { rows, cursor: 0 }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Move cursor to `index`, clamped to bounds.
    fn with_cursor(self, index: usize) -> Self {
        let cursor = if self.rows.is_empty() {
            0
        } else {
            index.min(self.rows.len() - 1)
        };
        Self { cursor, ..self }
    }

    fn with_cursor_up(self) -> Self {
        let index = self.cursor.saturating_sub(1);
        self.with_cursor(index)
    }

    fn with_cursor_down(self) -> Self {
        let index = self.cursor + 1;
        self.with_cursor(index)
    }

    /// Replace the rows, keeping the cursor in bounds.
    fn with_rows(self, rows: Vec<T>) -> Self {
        let cursor = self.cursor;
        Self { rows, cursor: 0 }.with_cursor(cursor)
    }
}

/// The View Binder: owns the navigation model and the two list views and
/// routes input between them.
///
/// Immutable like the model: every transition consumes `self` and returns
/// the next state.
#[derive(Debug, Clone)]
pub struct App {
    nav: NavigationState,
    mode: AppMode,
    focus: Focus,
    explorer_title: String,
    explorer: ListView<ExplorerRow>,
    selection: ListView<String>,
    status_message: Option<String>,
    should_quit: bool,
    theme: Theme,
}

impl App {
    /// Creates a new App browsing `start_dir`.
    pub fn new(start_dir: &Path) -> Self {
        let (nav, event) = NavigationState::open(start_dir);
        let app = Self {
            explorer_title: explorer_title(&nav),
            explorer: ListView::new(explorer_rows(&nav)),
            selection: ListView::new(Vec::new()),
            nav,
            mode: AppMode::Browsing,
            focus: Focus::Explorer,
            status_message: None,
            should_quit: false,
            theme: Theme::default(),
        };
        app.with_event_status(&event)
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn explorer_title(&self) -> &str {
        &self.explorer_title
    }

    pub fn explorer(&self) -> &ListView<ExplorerRow> {
        &self.explorer
    }

    pub fn selection(&self) -> &ListView<String> {
        &self.selection
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Transition to a new mode.
    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_focus(self, focus: Focus) -> Self {
        Self { focus, ..self }
    }

    /// Swap focus between the explorer and the selection list.
    pub fn with_focus_toggled(self) -> Self {
        let focus = self.focus.toggled();
        self.with_focus(focus)
    }

    /// Mark the app for quitting.
    pub fn with_quit(self) -> Self {
        tracing::info!(selected = self.nav.selections().len(), "quit requested");
        Self {
            should_quit: true,
            ..self
        }
    }

    /// Set a status message.
    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }

    /// Clear the status message.
    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    /// Move the cursor of the focused list up by one.
    pub fn with_cursor_up(self) -> Self {
        match self.focus {
            Focus::Explorer => Self {
                explorer: self.explorer.with_cursor_up(),
                ..self
            },
            Focus::Selection => Self {
                selection: self.selection.with_cursor_up(),
                ..self
            },
        }
    }

    /// Move the cursor of the focused list down by one.
    pub fn with_cursor_down(self) -> Self {
        match self.focus {
            Focus::Explorer => Self {
                explorer: self.explorer.with_cursor_down(),
                ..self
            },
            Focus::Selection => Self {
                selection: self.selection.with_cursor_down(),
                ..self
            },
        }
    }

    /// Jump the cursor of `pane` to `index` (clamped to bounds).
    pub fn with_cursor_to(self, pane: Focus, index: usize) -> Self {
        match pane {
            Focus::Explorer => Self {
                explorer: self.explorer.with_cursor(index),
                ..self
            },
            Focus::Selection => Self {
                selection: self.selection.with_cursor(index),
                ..self
            },
        }
    }

    /// Activate the explorer row under the cursor. No-op in the selection pane.
    pub fn activate_selected(self) -> Self {
        if self.focus != Focus::Explorer {
            return self;
        }
        let index = self.explorer.cursor();
        self.handle_command(Command::Activate(index))
    }

    /// A left click on `index` of `pane`: focus and select the row, or
    /// activate it if it was already the focused, selected row.
    pub fn click(self, pane: Focus, index: usize) -> Self {
        let already_selected = self.focus == pane
            && match pane {
                Focus::Explorer => self.explorer.cursor() == index,
                Focus::Selection => self.selection.cursor() == index,
            };
        if already_selected {
            return self.activate_selected();
        }
        self.with_focus(pane).with_cursor_to(pane, index)
    }

    /// Scroll-wheel on `pane`: move its cursor without changing focus.
    pub fn scroll(self, pane: Focus, down: bool) -> Self {
        let current = match pane {
            Focus::Explorer => self.explorer.cursor(),
            Focus::Selection => self.selection.cursor(),
        };
        let index = if down {
            current + 1
        } else {
            current.saturating_sub(1)
        };
        self.with_cursor_to(pane, index)
    }

    /// Open the Path-Jump modal.
    pub fn open_path_jump(self) -> Self {
        self.with_mode(AppMode::PathJump(PathJumpState::new()))
    }

    /// Apply `f` to the open modal's state. No-op when no modal is open.
    fn map_path_jump(self, f: impl FnOnce(PathJumpState) -> PathJumpState) -> Self {
        match self.mode {
            AppMode::PathJump(state) => Self {
                mode: AppMode::PathJump(f(state)),
                ..self
            },
            AppMode::Browsing => self,
        }
    }

    /// Close the modal with `outcome`. Focus returns to the explorer either way.
    pub fn close_path_jump(self, outcome: JumpOutcome) -> Self {
        let app = self
            .with_mode(AppMode::Browsing)
            .with_focus(Focus::Explorer);
        match outcome {
            JumpOutcome::Change(text) => app.handle_command(Command::Jump(text)),
            JumpOutcome::Cancel => app,
        }
    }

    /// Enter on the modal's focused control.
    pub fn submit_path_jump(self) -> Self {
        let outcome = match &self.mode {
            AppMode::PathJump(state) => state.clone().submit(),
            AppMode::Browsing => return self,
        };
        self.close_path_jump(outcome)
    }

    /// Forward a command to the navigation model and rebuild whatever it
    /// reports as changed.
    pub fn handle_command(self, cmd: Command) -> Self {
        let selected_before = self.nav.selections().len();
        let (nav, event) = self.nav.handle(cmd);
        let app = Self { nav, ..self };

        let app = if event.reloaded() {
            app.with_explorer_rebuilt()
        } else {
            app
        };
        let app = if app.nav.selections().len() != selected_before {
            app.with_selection_rebuilt()
        } else {
            app
        };
        app.with_event_status(&event)
    }

    /// Dispatch one decoded input action.
    pub fn handle_input(self, action: InputAction) -> Self {
        match action {
            InputAction::CursorUp => self.with_cursor_up(),
            InputAction::CursorDown => self.with_cursor_down(),
            InputAction::Activate => self.activate_selected(),
            InputAction::ToggleFocus => self.with_focus_toggled(),
            InputAction::OpenPathJump => self.open_path_jump(),
            InputAction::Quit => self.with_quit(),
            InputAction::Click { pane, index } => self.click(pane, index),
            InputAction::Scroll { pane, down } => self.scroll(pane, down),
            InputAction::PathJumpChar(c) => self.map_path_jump(|s| s.with_char(c)),
            InputAction::PathJumpBackspace => self.map_path_jump(PathJumpState::with_backspace),
            InputAction::PathJumpNext => self.map_path_jump(PathJumpState::with_next_control),
            InputAction::PathJumpPrev => self.map_path_jump(PathJumpState::with_prev_control),
            InputAction::PathJumpFocus(control) => self.map_path_jump(|s| s.with_focus(control)),
            InputAction::PathJumpSubmit => self.submit_path_jump(),
            InputAction::PathJumpPress(control) => match control {
                JumpControl::Cancel => self.close_path_jump(JumpOutcome::Cancel),
                JumpControl::Change => self
                    .map_path_jump(|s| s.with_focus(JumpControl::Change))
                    .submit_path_jump(),
                JumpControl::Input => self.map_path_jump(|s| s.with_focus(JumpControl::Input)),
            },
            InputAction::PathJumpCancel => self.close_path_jump(JumpOutcome::Cancel),
            InputAction::None => self,
        }
    }

    fn with_explorer_rebuilt(self) -> Self {
        Self {
            explorer_title: explorer_title(&self.nav),
            explorer: ListView::new(explorer_rows(&self.nav)),
            ..self
        }
    }

    fn with_selection_rebuilt(self) -> Self {
        let rows = self
            .nav
            .selections()
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        Self {
            selection: self.selection.with_rows(rows),
            ..self
        }
    }

    fn with_event_status(self, event: &Event) -> Self {
        match event {
            Event::LoadFailed { error, .. } => self.with_status(error.clone()),
            Event::DirectoryLoaded { .. } => self.with_clear_status(),
            Event::FileSelected(_) | Event::Ignored => self,
        }
    }
}

/// Title of the explorer pane. It names the current directory, which
/// stays the last successfully loaded one while an error is shown.
fn explorer_title(nav: &NavigationState) -> String {
    format!(" {} ", nav.current_dir().display())
}

fn explorer_rows(nav: &NavigationState) -> Vec<ExplorerRow> {
    nav.displayed()
        .iter()
        .map(|entry| ExplorerRow {
            label: entry.display_name(),
            kind: entry.kind(),
        })
        .collect()
}
