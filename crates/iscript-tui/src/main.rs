//! iscript: two-pane file selector.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use iscript_core::cwd;
use iscript_tui::app::App;
use iscript_tui::input::{handle_key, handle_mouse};
use iscript_tui::render::render;
use iscript_tui::terminal::{
    frame_area, init_tracing, install_panic_hook, restore_terminal, setup_terminal, Tui,
};

fn main() -> anyhow::Result<()> {
    init_tracing("iscript");

    let start_dir = match cwd() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &start_dir);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Tui, start_dir: &Path) -> anyhow::Result<()> {
    let mut app = App::new(start_dir);

    loop {
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        // Blocks until the next terminal event.
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app.mode()),
            Event::Mouse(mouse) => {
                let area = frame_area(terminal)?;
                handle_mouse(mouse, &app, area)
            }
            _ => continue,
        };
        app = app.handle_input(action);
    }

    Ok(())
}
