//! Terminal lifecycle and logging setup shared by both binaries.

use std::io;
use std::panic;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Enters raw mode and the alternate screen with mouse capture on.
///
/// If anything after raw mode fails, the terminal is put back before the
/// error is returned.
pub fn setup_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    undo_on_error(enter_screen(), || {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Runs `undo` when `result` is an error, then passes `result` through.
fn undo_on_error<T>(result: anyhow::Result<T>, undo: impl FnOnce()) -> anyhow::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn enter_screen() -> anyhow::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Full-screen area of `terminal`, as layouts and mouse hit-testing see it.
pub fn frame_area<B: Backend>(terminal: &Terminal<B>) -> io::Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Path of the log file for binary `name`.
pub fn log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{name}.log"))
}

/// Initializes tracing. Logs go to a file so they never touch the screen;
/// if the file cannot be opened logging is silently disabled.
pub fn init_tracing(name: &str) {
    let path = log_path(name);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path);

    let Ok(file) = file else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
    tracing::info!(log = %path.display(), "{name} starting");
}
