//! Terminal setup and restoration

use crate::error::{Result, UiError};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Terminal manager for setup and cleanup
pub struct TerminalManager {
    /// The ratatui terminal instance
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Whether cleanup already completed
    restored: bool,
}

impl TerminalManager {
    /// Initialize the terminal for TUI mode.
    ///
    /// If anything after enabling raw mode fails, the terminal is put back
    /// the way it was before the error is returned.
    pub fn new() -> Result<Self> {
        enable_raw_mode().map_err(|source| UiError::TerminalInit { source })?;

        let terminal = or_rollback(
            || {
                let mut stdout = stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                let mut stdout = stdout();
                let _ = execute!(stdout, LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )
        .map_err(|source| UiError::TerminalInit { source })?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Get a mutable reference to the terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    /// Leave raw mode and the alternate screen.
    ///
    /// Every step is attempted even if an earlier one fails. Only a fully
    /// successful restore is remembered, so `Drop` retries after an error.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }

        first_error([
            disable_raw_mode(),
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen),
            self.terminal.show_cursor(),
        ])
        .map_err(|source| UiError::TerminalRestore { source })?;

        self.restored = true;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        // Errors cannot be reported from Drop
        let _ = self.restore();
    }
}

/// Run `setup`, calling `rollback` if it fails
fn or_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    setup().map_err(|e| {
        rollback();
        e
    })
}

/// Collapse the outcome of several cleanup steps into the first error
fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().find_map(|r| r.err()).map_or(Ok(()), Err)
}

/// Check if the terminal supports colors
pub fn supports_color() -> bool {
    match std::env::var("TERM") {
        Ok(term) => !term.is_empty() && term != "dumb",
        Err(_) => false,
    }
}
