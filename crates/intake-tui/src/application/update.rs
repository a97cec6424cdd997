//! Application update logic (Update in Elm architecture)

use intake_common::OverrideError;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::AppModel,
    message::{AppMsg, StatusSeverity},
};

/// Update function - handles all application messages and updates the model.
///
/// Returns follow-up messages to be fed back through `update`.
#[instrument(level = "debug", skip(model), fields(
    msg_type = %format!("{:?}", msg).split('(').next().unwrap_or("Unknown"),
    focus = ?model.focus,
))]
pub fn update(model: &mut AppModel, msg: AppMsg) -> Vec<AppMsg> {
    let mut effects = Vec::new();

    if msg.is_user_input() && model.status_message.is_some() {
        debug!("Clearing status message on input");
        model.clear_status_message();
    }

    match msg {
        // ============== System Events ==============
        AppMsg::Quit => {
            info!("Application quit requested");
        }

        AppMsg::Tick(now) => {
            model.now = now;
            model.recompute();
        }

        AppMsg::HelpToggle => {
            debug!(show_help = !model.show_help, "Toggle help");
            model.toggle_help();
        }

        // ============== Navigation Events ==============
        AppMsg::FocusNext => {
            model.focus_next();
            debug!(to = ?model.focus, "Focused next field");
        }

        AppMsg::FocusPrevious => {
            model.focus_previous();
            debug!(to = ?model.focus, "Focused previous field");
        }

        AppMsg::FocusField(target) => {
            if target.is_panel_field() && !model.overrides.is_editing() {
                debug!(?target, "Ignoring focus on hidden override field");
            } else {
                model.focus = target;
            }
        }

        // ============== Capacity Inputs ==============
        AppMsg::CliniciansChanged(clinicians) => {
            debug!(clinicians, "Clinician count changed");
            model.capacity.clinicians = clinicians;
            model.recompute();
        }

        AppMsg::ClosingHourChanged(hour) => {
            debug!(hour, "Closing hour changed");
            model.capacity.closing_hour = hour;
            model.recompute();
        }

        AppMsg::PatientCountChanged(index, count) => {
            debug!(index, count, "Patient count changed");
            model.patients.set(index, count);
            model.recompute();
        }

        // ============== Governance Events ==============
        AppMsg::OverrideToggled => {
            let mode = model.overrides.toggle();
            model.sync_focus_with_panel();
            debug!(?mode, focus = ?model.focus, "Override panel toggled");
        }

        AppMsg::ReasonInput(c) => {
            model.overrides.push_char(c);
        }

        AppMsg::ReasonBackspace => {
            model.overrides.pop_char();
        }

        AppMsg::OverrideConfirmed(at) => {
            let decision = model.report.banner.text.clone();
            let outcome = model.overrides.confirm(&decision, at).map(|entry| entry.reason.len());
            match outcome {
                Ok(reason_len) => {
                    info!(decision = %decision, reason_len, "Override logged");
                    effects.push(AppMsg::StatusMessage(
                        StatusSeverity::Info,
                        format!("Override recorded against \"{}\"", decision),
                    ));
                    model.sync_focus_with_panel();
                }
                Err(OverrideError::EmptyReason) => {
                    warn!("Override confirmation without reason");
                    model.prompt = Some(OverrideError::EmptyReason.to_string());
                    effects.push(AppMsg::StatusMessage(
                        StatusSeverity::Warning,
                        "Override not recorded".to_string(),
                    ));
                }
                Err(e) => {
                    debug!(error = %e, "Override confirmation ignored");
                }
            }
        }

        AppMsg::PromptDismissed => {
            model.prompt = None;
        }

        // ============== Status Events ==============
        AppMsg::StatusMessage(severity, message) => {
            debug!(severity = ?severity, message = %message, "Status message");
            model.set_status_message(severity, message);
        }
    }

    debug!(effects_count = effects.len(), "Update complete, returning effects");
    effects
}
