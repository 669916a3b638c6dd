//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use archview_app::config::Settings;
use archview_app::{handler, signals, AppState, Message};
use archview_core::prelude::*;

use crate::hit_map::HitMap;
use crate::{event, render, terminal};

/// Run the diagram viewer until the user quits or a signal arrives.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mouse = settings.ui.mouse;
    let mut term = ratatui::init();
    if mouse {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{e}; continuing with keyboard only");
        }
    }

    let mut state = AppState::with_settings(settings);
    info!(
        regions = state.diagram.len(),
        clickable = state.diagram.clickable().len(),
        "Diagram ready"
    );

    // External messages (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    if mouse {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{e}");
        }
    }
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut hits = HitMap::new();

    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| hits = render::view(frame, state))?;

        if let Some(message) = event::poll(&hits)? {
            process_message(state, message);
        }
    }

    info!("Event loop finished");
    Ok(())
}

/// Run a message and every follow-up it produces through `update`.
fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}
