//! iscript-form: build an install script from a name and a command.
//!
//! Shows a two-field form; Generate displays the rendered script until OK
//! is pressed. Nothing is written to disk.

use crossterm::event::{self, Event, KeyEventKind};
use iscript_core::config::theme::Theme;
use iscript_tui::input::{handle_form_key, handle_form_mouse};
use iscript_tui::terminal::{
    frame_area, init_tracing, install_panic_hook, restore_terminal, setup_terminal, Tui,
};
use iscript_tui::ui::script_form::{render_script_form, ScriptFormState};

fn main() -> anyhow::Result<()> {
    init_tracing("iscript-form");
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_form(&mut terminal);
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_form(terminal: &mut Tui) -> anyhow::Result<()> {
    let theme = Theme::default();
    let mut state = ScriptFormState::new();

    while !state.should_quit {
        terminal.draw(|f| {
            render_script_form(f, &state, &theme);
        })?;

        state = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_form_key(key, state),
            Event::Mouse(mouse) => {
                let area = frame_area(terminal)?;
                handle_form_mouse(mouse, state, area)
            }
            _ => state,
        };
    }

    tracing::info!("form closed");
    Ok(())
}
