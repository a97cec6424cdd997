//! UI components for the intake TUI
//!
//! Each component renders one region of the screen from the model. Components
//! that take keyboard input also expose an `on_key` that turns a key press
//! into an [`AppMsg`](crate::message::AppMsg) without touching the model.

pub mod banner;
pub mod capacity_inputs;
pub mod governance_panel;
pub mod help;
pub mod numeric_field;
pub mod prompt;
pub mod status_line;
pub mod triage_table;

use chrono::NaiveDateTime;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::message::StatusSeverity;

/// A status message to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// The severity level of this message
    pub severity: StatusSeverity,
    /// The message text to display
    pub message: String,
    /// When this message was created
    pub timestamp: NaiveDateTime,
}

/// Foreground style, dropped to the terminal default when colors are off
pub(crate) fn fg(color: Color, use_colors: bool) -> Style {
    if use_colors {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Border style for a field depending on focus
pub(crate) fn focus_style(focused: bool, use_colors: bool) -> Style {
    match (focused, use_colors) {
        (true, true) => Style::default().fg(Color::Yellow),
        (true, false) => Style::default().add_modifier(Modifier::REVERSED),
        (false, _) => Style::default(),
    }
}

/// Centered popup rectangle clamped to `area`
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = area.width.min(width);
    let popup_height = area.height.min(height);
    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}
