//! Shared intake capacity logic
//!
//! Everything here is free of terminal concerns: the fixed triage table, the
//! capacity calculator that turns patient counts into accept/stop decisions,
//! the manual override panel with its session log, and the configuration
//! file format.

pub mod capacity;
pub mod config;
pub mod error;
pub mod governance;
pub mod types;

pub use capacity::*;
pub use config::*;
pub use error::{ConfigError, IntakeError, OverrideError, Result};
pub use governance::*;
pub use types::*;
