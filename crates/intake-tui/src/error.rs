//! Error handling for the intake TUI
//!
//! Library-level failures are collected here; the binary wraps them with
//! `anyhow` context.

use thiserror::Error;

/// Result type alias using the application's error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the intake TUI
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected configuration from the shared crate
    #[error("Intake error: {0}")]
    Intake(#[from] intake_common::IntakeError),

    /// UI and terminal errors
    #[error("UI error: {0}")]
    Ui(#[from] UiError),
}

/// UI and terminal-specific errors
#[derive(Error, Debug)]
pub enum UiError {
    /// Terminal setup error
    #[error("Failed to initialize terminal")]
    TerminalInit {
        #[source]
        source: std::io::Error,
    },

    /// Terminal teardown error
    #[error("Failed to restore terminal")]
    TerminalRestore {
        #[source]
        source: std::io::Error,
    },

    /// Drawing a frame failed
    #[error("Failed to render frame")]
    Render {
        #[source]
        source: std::io::Error,
    },

    /// Reading input events failed
    #[error("Failed to read terminal event")]
    Event {
        #[source]
        source: std::io::Error,
    },
}
