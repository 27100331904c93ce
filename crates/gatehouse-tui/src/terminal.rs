//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::SetTitle;
use gatehouse_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start reporting clicks to the event loop
pub fn enable_mouse_capture() -> Result<()> {
    crossterm::execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() -> Result<()> {
    crossterm::execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to disable mouse capture: {}", e)))
}

/// Set the terminal window title
pub fn set_title(title: &str) -> Result<()> {
    crossterm::execute!(stdout(), SetTitle(title))
        .map_err(|e| Error::terminal(format!("Failed to set title: {}", e)))
}
