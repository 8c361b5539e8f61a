use ratatui::Frame;

use crate::app::{App, AppMode, Focus};
use crate::layout::AppLayout;
use crate::ui::panel::{render_explorer, render_selection};
use crate::ui::path_jump::render_path_jump;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function: composes the full file selector each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let layout = AppLayout::new(f.area());
    let browsing = matches!(app.mode(), AppMode::Browsing);

    render_explorer(
        f,
        layout.explorer,
        app.explorer(),
        app.explorer_title(),
        theme,
        browsing && app.focus() == Focus::Explorer,
    );
    render_selection(
        f,
        layout.selection,
        app.selection(),
        theme,
        browsing && app.focus() == Focus::Selection,
    );

    let props = StatusBarProps {
        selected_count: app.nav().selections().len(),
        status_message: app.status_message(),
        modal_open: !browsing,
    };
    render_statusbar(f, layout.statusbar, &props, theme);

    // Modal overlay
    if let AppMode::PathJump(state) = app.mode() {
        render_path_jump(f, state, theme);
    }
}
