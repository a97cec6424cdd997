//! # Intake TUI Library
//!
//! A terminal front end for estimating how many patients an urgent care
//! clinic can still take before closing, broken down by triage level.
//!
//! ## Architecture
//!
//! The library follows the Model / Update / View split from Elm:
//!
//! - **Model**: [`AppModel`] holds the inputs, the override panel and the
//!   derived [`intake_common::CapacityReport`]
//! - **Update**: every state change is an [`message::AppMsg`] applied by
//!   [`application::update`]
//! - **View**: [`application::render_app`] draws the model with ratatui
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use intake_tui::{Application, Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut app = Application::new(&config)?;
//!     app.run()?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod application;
pub mod components;
pub mod config;
pub mod error;
pub mod message;
pub mod utils;

// Re-export main types for convenience
pub use application::{AppModel, Application};
pub use error::{Error, Result};
pub use intake_common::Config;
