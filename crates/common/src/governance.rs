//! Manual override panel and its session log

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

use crate::error::OverrideError;

/// One recorded manual override
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideEntry {
    pub timestamp: DateTime<Local>,
    /// Banner text in force when the override was confirmed
    pub decision: String,
    pub reason: String,
}

/// Append-only override history, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideLog {
    entries: VecDeque<OverrideEntry>,
}

impl OverrideLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, entry: OverrideEntry) -> &OverrideEntry {
        self.entries.push_front(entry);
        &self.entries[0]
    }

    pub fn entries(&self) -> impl Iterator<Item = &OverrideEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&OverrideEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelMode {
    #[default]
    Idle,
    Editing,
}

/// Override toggle, reason draft and log.
///
/// Closing the panel hides the reason field but keeps the draft, so reopening
/// it shows what was typed before.
#[derive(Debug, Clone, Default)]
pub struct OverridePanel {
    mode: PanelMode,
    reason: String,
    log: OverrideLog,
}

impl OverridePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == PanelMode::Editing
    }

    /// Open or close the reason field. Never logs anything.
    pub fn toggle(&mut self) -> PanelMode {
        self.mode = match self.mode {
            PanelMode::Idle => PanelMode::Editing,
            PanelMode::Editing => PanelMode::Idle,
        };
        debug!(mode = ?self.mode, "Override panel toggled");
        self.mode
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.reason.push(c);
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.reason.pop()
    }

    pub fn log(&self) -> &OverrideLog {
        &self.log
    }

    /// Record an override against the current `decision`.
    ///
    /// Rejected with [`OverrideError::EmptyReason`] when the draft is blank;
    /// the panel then stays open and the log is untouched. On success the
    /// draft is cleared and the panel closes.
    pub fn confirm(
        &mut self,
        decision: &str,
        at: DateTime<Local>,
    ) -> Result<&OverrideEntry, OverrideError> {
        if !self.is_editing() {
            return Err(OverrideError::NotEditing);
        }
        if self.reason.trim().is_empty() {
            warn!("Override confirmation rejected: empty reason");
            return Err(OverrideError::EmptyReason);
        }

        let reason = std::mem::take(&mut self.reason);
        self.mode = PanelMode::Idle;
        info!(decision = %decision, reason = %reason, "Manual override recorded");

        Ok(self.log.record(OverrideEntry {
            timestamp: at,
            decision: decision.to_string(),
            reason,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip_keeps_draft() {
        let mut panel = OverridePanel::new();
        assert_eq!(panel.toggle(), PanelMode::Editing);
        panel.set_reason("half typed");
        assert_eq!(panel.toggle(), PanelMode::Idle);
        assert!(panel.log().is_empty());
        panel.toggle();
        assert_eq!(panel.reason(), "half typed");
    }

    #[test]
    fn test_confirm_while_idle_is_rejected() {
        let mut panel = OverridePanel::new();
        panel.set_reason("no panel");
        assert_eq!(
            panel.confirm("Accepting all triage levels", Local::now()),
            Err(OverrideError::NotEditing)
        );
        assert!(panel.log().is_empty());
    }

    #[test]
    fn test_whitespace_reason_is_blank() {
        let mut panel = OverridePanel::new();
        panel.toggle();
        panel.set_reason(" \t\n ");
        assert_eq!(
            panel.confirm("Accepting all triage levels", Local::now()),
            Err(OverrideError::EmptyReason)
        );
        assert!(panel.is_editing());
        assert_eq!(panel.reason(), " \t\n ");
    }

    #[test]
    fn test_reason_stored_as_typed() {
        let mut panel = OverridePanel::new();
        panel.toggle();
        panel.set_reason("  surge team arrived ");
        let entry = panel.confirm("CRITICAL ONLY – Triage 1", Local::now()).unwrap();
        assert_eq!(entry.reason, "  surge team arrived ");
    }
}
