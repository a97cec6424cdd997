//! Application state (Model in Elm architecture)

use chrono::NaiveDateTime;
use intake_common::{CapacityConfig, CapacityReport, OverridePanel, PatientCounts};

use crate::{
    components::StatusMessage,
    message::{FocusTarget, StatusSeverity},
};

/// Core application state following Elm's Model pattern
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Waiting patients per triage level
    pub patients: PatientCounts,

    /// Clinicians on duty and closing hour
    pub capacity: CapacityConfig,

    /// Clock reading the report was computed against
    pub now: NaiveDateTime,

    /// Derived figures, recomputed after every input change
    pub report: CapacityReport,

    /// Governance panel and override log
    pub overrides: OverridePanel,

    /// Currently focused field
    pub focus: FocusTarget,

    /// Blocking validation prompt; swallows all input until dismissed
    pub prompt: Option<String>,

    /// Whether help overlay is visible
    pub show_help: bool,

    /// Current status message to display
    pub status_message: Option<StatusMessage>,

    /// Render with colors
    pub use_colors: bool,
}

impl AppModel {
    /// Create a new application model
    pub fn new(capacity: CapacityConfig, now: NaiveDateTime) -> Self {
        let patients = PatientCounts::default();
        let report = CapacityReport::evaluate(&patients, &capacity, &now);

        Self {
            patients,
            capacity,
            now,
            report,
            overrides: OverridePanel::new(),
            focus: FocusTarget::Clinicians,
            prompt: None,
            show_help: false,
            status_message: None,
            use_colors: true,
        }
    }

    /// Builder-style color toggle
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Recompute every derived value from the current inputs
    pub fn recompute(&mut self) {
        self.report = CapacityReport::evaluate(&self.patients, &self.capacity, &self.now);
    }

    /// Current value of a numeric field
    pub fn field_value(&self, target: FocusTarget) -> Option<u32> {
        match target {
            FocusTarget::Clinicians => Some(self.capacity.clinicians),
            FocusTarget::ClosingHour => Some(self.capacity.closing_hour),
            FocusTarget::Patients(i) => Some(self.patients.get(i)),
            _ => None,
        }
    }

    /// Set status message
    pub fn set_status_message(&mut self, severity: StatusSeverity, message: String) {
        self.status_message = Some(StatusMessage {
            severity,
            message,
            timestamp: self.now,
        });
    }

    /// Clear status message
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Focus next field in tab order
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.overrides.is_editing());
    }

    /// Focus previous field in tab order
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous(self.overrides.is_editing());
    }

    /// Keep focus on a visible field after the override panel opens or closes
    pub fn sync_focus_with_panel(&mut self) {
        if self.overrides.is_editing() {
            self.focus = FocusTarget::OverrideReason;
        } else if self.focus.is_panel_field() {
            self.focus = FocusTarget::OverrideToggle;
        }
    }

    /// Toggle help visibility
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Whether key presses are currently text for the reason field
    pub fn is_typing_reason(&self) -> bool {
        self.focus == FocusTarget::OverrideReason && self.overrides.is_editing()
    }
}
