//! Utility functions and helpers
//!
//! This module contains common utility functions used throughout the application.

pub mod formatting;
pub mod logging;
pub mod terminal;
pub mod validation;

pub use formatting::*;
pub use logging::*;
pub use terminal::*;
pub use validation::*;
