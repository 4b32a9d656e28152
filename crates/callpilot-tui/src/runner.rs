//! Main TUI runner - terminal lifecycle and event loop

use callpilot_app::Engine;
use callpilot_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Takes ownership of the engine; its background tasks are stopped before
/// the terminal is restored.
pub async fn run(mut engine: Engine) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    info!(
        "TUI started (dark_mode={}, skip_login={})",
        engine.state.settings.ui.dark_mode, engine.state.settings.behavior.skip_login
    );

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Login completion, playback ticks, signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
