//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use archview_core::prelude::*;

/// Install a panic hook that releases the mouse and restores the terminal
/// before the default report is printed.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::TerminalInit(format!("Failed to enable mouse capture: {e}")))
}

pub fn disable_mouse_capture() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(format!("Failed to disable mouse capture: {e}")))
}
