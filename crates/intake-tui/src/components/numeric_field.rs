//! Key handling shared by every numeric field
//!
//! Only digits are accepted, so a field can never hold a negative or
//! non-numeric value. Deleting the last digit leaves zero. Values are not
//! clamped to any range.

use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    application::AppModel,
    message::{AppMsg, FocusTarget},
    utils::{pop_digit, push_digit, step_up},
};

/// Translate a key press on a focused numeric field into a change message
pub fn on_key(model: &AppModel, target: FocusTarget, key: KeyEvent) -> Option<AppMsg> {
    let current = model.field_value(target)?;

    let next = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => push_digit(current, c)?,
        KeyCode::Backspace | KeyCode::Delete => pop_digit(current),
        KeyCode::Up | KeyCode::Char('+') => step_up(current)?,
        KeyCode::Down | KeyCode::Char('-') => current.saturating_sub(1),
        _ => return None,
    };

    if next == current {
        return None;
    }
    change_msg(target, next)
}

/// Message that stores `value` into `target`, if `target` holds a number
pub fn change_msg(target: FocusTarget, value: u32) -> Option<AppMsg> {
    match target {
        FocusTarget::Clinicians => Some(AppMsg::CliniciansChanged(value)),
        FocusTarget::ClosingHour => Some(AppMsg::ClosingHourChanged(value)),
        FocusTarget::Patients(i) => Some(AppMsg::PatientCountChanged(i, value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use intake_common::CapacityConfig;

    fn model() -> AppModel {
        let now = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        AppModel::new(CapacityConfig::default(), now)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_append() {
        let model = model();
        assert_eq!(
            on_key(&model, FocusTarget::Clinicians, key(KeyCode::Char('5'))),
            Some(AppMsg::CliniciansChanged(25))
        );
        assert_eq!(
            on_key(&model, FocusTarget::Patients(3), key(KeyCode::Char('4'))),
            Some(AppMsg::PatientCountChanged(3, 4))
        );
    }

    #[test]
    fn test_backspace_and_arrows() {
        let model = model();
        assert_eq!(
            on_key(&model, FocusTarget::ClosingHour, key(KeyCode::Backspace)),
            Some(AppMsg::ClosingHourChanged(2))
        );
        assert_eq!(
            on_key(&model, FocusTarget::ClosingHour, key(KeyCode::Up)),
            Some(AppMsg::ClosingHourChanged(23))
        );
        assert_eq!(
            on_key(&model, FocusTarget::Clinicians, key(KeyCode::Char('-'))),
            Some(AppMsg::CliniciansChanged(1))
        );
    }

    #[test]
    fn test_non_digits_and_floor_ignored() {
        let model = model();
        assert_eq!(on_key(&model, FocusTarget::Clinicians, key(KeyCode::Char('x'))), None);
        assert_eq!(on_key(&model, FocusTarget::Patients(0), key(KeyCode::Down)), None);
        assert_eq!(on_key(&model, FocusTarget::OverrideToggle, key(KeyCode::Char('1'))), None);
    }

    #[test]
    fn test_up_stops_at_widest_value() {
        let mut model = model();
        model.patients.set(0, 99_999);
        assert_eq!(on_key(&model, FocusTarget::Patients(0), key(KeyCode::Up)), None);
        assert_eq!(on_key(&model, FocusTarget::Patients(0), key(KeyCode::Char('+'))), None);
        assert_eq!(
            on_key(&model, FocusTarget::Patients(0), key(KeyCode::Down)),
            Some(AppMsg::PatientCountChanged(0, 99_998))
        );
    }

    #[test]
    fn test_change_msg_ignores_non_numeric_fields() {
        assert_eq!(change_msg(FocusTarget::OverrideReason, 3), None);
        assert_eq!(change_msg(FocusTarget::ClosingHour, 3), Some(AppMsg::ClosingHourChanged(3)));
    }
}
