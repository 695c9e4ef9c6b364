//! Raw mode and alternate screen handling for the viewer

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use strata_core::{Result, StrataError};

/// Terminal the viewer draws to
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn terminal_error(action: &str) -> impl FnOnce(io::Error) -> StrataError + '_ {
    move |e| StrataError::Terminal(format!("Failed to {}: {}", action, e))
}

/// Switch to raw mode on the alternate screen and wrap stdout in a [`Tui`]
pub fn init() -> Result<Tui> {
    enable_raw_mode().map_err(terminal_error("enable raw mode"))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error("enter alternate screen"))?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error("create terminal"))
}

/// Leave the alternate screen and raw mode
pub fn restore() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen).map_err(terminal_error("leave alternate screen"))?;
    disable_raw_mode().map_err(terminal_error("disable raw mode"))
}

/// Calls [`restore`] when dropped, so a panic inside the draw loop does not
/// leave the shell in raw mode.
#[derive(Debug, Default)]
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}
