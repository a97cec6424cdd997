//! Keyboard routing
//!
//! Global bindings are checked first, then the key is offered to whichever
//! component owns the focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    application::AppModel,
    components::{governance_panel, numeric_field},
    message::AppMsg,
};

/// Translate a key press into a message, or `None` if it does nothing
pub fn map_key(model: &AppModel, key: KeyEvent) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppMsg::Quit);
    }

    // The validation prompt blocks everything until acknowledged
    if model.prompt.is_some() {
        return Some(AppMsg::PromptDismissed);
    }

    if model.show_help {
        return Some(AppMsg::HelpToggle);
    }

    match key.code {
        KeyCode::Tab => return Some(AppMsg::FocusNext),
        KeyCode::BackTab => return Some(AppMsg::FocusPrevious),
        // Esc backs out of an open override panel before it quits
        KeyCode::Esc if model.overrides.is_editing() => return Some(AppMsg::OverrideToggled),
        KeyCode::Esc => return Some(AppMsg::Quit),
        _ => {}
    }

    if !model.is_typing_reason() {
        match key.code {
            KeyCode::Char('q') => return Some(AppMsg::Quit),
            KeyCode::Char('?') => return Some(AppMsg::HelpToggle),
            KeyCode::Char('o') => return Some(AppMsg::OverrideToggled),
            _ => {}
        }
    }

    if model.focus.is_numeric() {
        numeric_field::on_key(model, model.focus, key)
    } else {
        governance_panel::on_key(model, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::FocusTarget;
    use chrono::NaiveDate;
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
    fn test_prompt_swallows_keys() {
        let mut model = model();
        model.prompt = Some("Override reason required".to_string());
        assert_eq!(map_key(&model, key(KeyCode::Char('q'))), Some(AppMsg::PromptDismissed));
        assert_eq!(map_key(&model, key(KeyCode::Tab)), Some(AppMsg::PromptDismissed));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut model = model();
        model.prompt = Some("blocked".to_string());
        assert_eq!(
            map_key(&model, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMsg::Quit)
        );
    }

    #[test]
    fn test_letters_are_text_in_reason_field() {
        let mut model = model();
        model.overrides.toggle();
        model.focus = FocusTarget::OverrideReason;
        assert_eq!(map_key(&model, key(KeyCode::Char('q'))), Some(AppMsg::ReasonInput('q')));
        assert_eq!(map_key(&model, key(KeyCode::Char('o'))), Some(AppMsg::ReasonInput('o')));
        assert_eq!(map_key(&model, key(KeyCode::Backspace)), Some(AppMsg::ReasonBackspace));
        assert!(matches!(
            map_key(&model, key(KeyCode::Enter)),
            Some(AppMsg::OverrideConfirmed(_))
        ));
    }

    #[test]
    fn test_global_shortcuts_outside_reason_field() {
        let model = model();
        assert_eq!(map_key(&model, key(KeyCode::Char('o'))), Some(AppMsg::OverrideToggled));
        assert_eq!(map_key(&model, key(KeyCode::Char('?'))), Some(AppMsg::HelpToggle));
        assert_eq!(map_key(&model, key(KeyCode::Char('q'))), Some(AppMsg::Quit));
        assert_eq!(map_key(&model, key(KeyCode::Char('3'))), Some(AppMsg::CliniciansChanged(23)));
    }

    #[test]
    fn test_esc_closes_panel_before_quitting() {
        let mut model = model();
        model.overrides.toggle();
        model.focus = FocusTarget::OverrideReason;
        assert_eq!(map_key(&model, key(KeyCode::Esc)), Some(AppMsg::OverrideToggled));

        model.overrides.toggle();
        model.focus = FocusTarget::OverrideToggle;
        assert_eq!(map_key(&model, key(KeyCode::Esc)), Some(AppMsg::Quit));
    }

    #[test]
    fn test_toggle_button_responds_to_enter() {
        let mut model = model();
        model.focus = FocusTarget::OverrideToggle;
        assert_eq!(map_key(&model, key(KeyCode::Enter)), Some(AppMsg::OverrideToggled));
    }
}
