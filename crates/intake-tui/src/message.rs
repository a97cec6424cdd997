//! Application message types
//!
//! All state changes in the application happen through these messages.
//! Anything impure (reading the clock) is resolved before a message is built,
//! so `update` stays deterministic.

use chrono::{DateTime, Local, NaiveDateTime};
use intake_common::TRIAGE_LEVEL_COUNT;

/// Main application messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // ============== System Events ==============
    /// Application should quit
    Quit,
    /// Periodic clock refresh
    Tick(NaiveDateTime),
    /// Toggle help overlay
    HelpToggle,

    // ============== Navigation Events ==============
    /// Move focus to next field
    FocusNext,
    /// Move focus to previous field
    FocusPrevious,
    /// Focus a specific field
    FocusField(FocusTarget),

    // ============== Capacity Inputs ==============
    /// Clinician count edited
    CliniciansChanged(u32),
    /// Closing hour edited
    ClosingHourChanged(u32),
    /// Waiting patients at a triage level edited (index, count)
    PatientCountChanged(usize, u32),

    // ============== Governance Events ==============
    /// Manual Override button pressed
    OverrideToggled,
    /// Character typed into the reason field
    ReasonInput(char),
    /// Backspace in the reason field
    ReasonBackspace,
    /// Confirm Override pressed at the given time
    OverrideConfirmed(DateTime<Local>),
    /// Blocking validation prompt acknowledged
    PromptDismissed,

    // ============== Status Events ==============
    /// Display status message
    StatusMessage(StatusSeverity, String),
}

/// Focusable fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Clinicians,
    ClosingHour,
    /// Patient count for the triage level at this index
    Patients(usize),
    OverrideToggle,
    OverrideReason,
    OverrideConfirm,
}

impl AppMsg {
    /// Whether this message comes from the user editing or navigating.
    /// Such input replaces whatever the status line was showing.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            AppMsg::Quit | AppMsg::Tick(_) | AppMsg::PromptDismissed | AppMsg::StatusMessage(..)
        )
    }
}

impl FocusTarget {
    /// Next field in tab order. The reason field and confirm button are
    /// skipped while the override panel is closed.
    pub fn next(self, panel_open: bool) -> Self {
        match self {
            FocusTarget::Clinicians => FocusTarget::ClosingHour,
            FocusTarget::ClosingHour => FocusTarget::Patients(0),
            FocusTarget::Patients(i) if i + 1 < TRIAGE_LEVEL_COUNT => FocusTarget::Patients(i + 1),
            FocusTarget::Patients(_) => FocusTarget::OverrideToggle,
            FocusTarget::OverrideToggle if panel_open => FocusTarget::OverrideReason,
            FocusTarget::OverrideToggle => FocusTarget::Clinicians,
            FocusTarget::OverrideReason => FocusTarget::OverrideConfirm,
            FocusTarget::OverrideConfirm => FocusTarget::Clinicians,
        }
    }

    /// Previous field in tab order
    pub fn previous(self, panel_open: bool) -> Self {
        match self {
            FocusTarget::Clinicians if panel_open => FocusTarget::OverrideConfirm,
            FocusTarget::Clinicians => FocusTarget::OverrideToggle,
            FocusTarget::ClosingHour => FocusTarget::Clinicians,
            FocusTarget::Patients(0) => FocusTarget::ClosingHour,
            FocusTarget::Patients(i) => FocusTarget::Patients(i - 1),
            FocusTarget::OverrideToggle => FocusTarget::Patients(TRIAGE_LEVEL_COUNT - 1),
            FocusTarget::OverrideReason => FocusTarget::OverrideToggle,
            FocusTarget::OverrideConfirm => FocusTarget::OverrideReason,
        }
    }

    /// Whether this field only exists while the override panel is open
    pub fn is_panel_field(self) -> bool {
        matches!(self, FocusTarget::OverrideReason | FocusTarget::OverrideConfirm)
    }

    /// Whether this field edits a number
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FocusTarget::Clinicians | FocusTarget::ClosingHour | FocusTarget::Patients(_)
        )
    }
}

/// Status message severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Info,
    Warning,
}

impl StatusSeverity {
    /// Get the color for this severity
    pub fn color(&self) -> ratatui::style::Color {
        match self {
            StatusSeverity::Info => ratatui::style::Color::Blue,
            StatusSeverity::Warning => ratatui::style::Color::Yellow,
        }
    }

    /// Get the symbol for this severity
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusSeverity::Info => "ℹ",
            StatusSeverity::Warning => "⚠",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_round_trip() {
        for open in [false, true] {
            let mut focus = FocusTarget::Clinicians;
            let mut seen = Vec::new();
            loop {
                seen.push(focus);
                let next = focus.next(open);
                assert_eq!(next.previous(open), focus);
                focus = next;
                if focus == FocusTarget::Clinicians {
                    break;
                }
            }
            let expected = if open { 10 } else { 8 };
            assert_eq!(seen.len(), expected);
            assert_eq!(seen.iter().any(|f| f.is_panel_field()), open);
        }
    }
}
