//! Governance & Overrides panel
//!
//! Manual Override button, the reason field and Confirm button while the
//! panel is open, and the session's override log underneath.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use intake_common::OverridePanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    application::AppModel,
    message::{AppMsg, FocusTarget},
    utils::format_timestamp_detailed,
};

use super::{fg, focus_style};

const REASON_PLACEHOLDER: &str = "Enter clinical/operational justification";

/// Translate a key press on a focused panel field
pub fn on_key(model: &AppModel, key: KeyEvent) -> Option<AppMsg> {
    match (model.focus, key.code) {
        (FocusTarget::OverrideToggle, KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(AppMsg::OverrideToggled)
        }
        (FocusTarget::OverrideReason, KeyCode::Enter) => Some(AppMsg::OverrideConfirmed(Local::now())),
        (FocusTarget::OverrideReason, KeyCode::Backspace) => Some(AppMsg::ReasonBackspace),
        (FocusTarget::OverrideReason, KeyCode::Char(c))
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(AppMsg::ReasonInput(c))
        }
        (FocusTarget::OverrideConfirm, KeyCode::Enter | KeyCode::Char(' ')) => {
            Some(AppMsg::OverrideConfirmed(Local::now()))
        }
        _ => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, model: &AppModel) {
    let block = Block::default()
        .title(Span::styled(
            " Governance & Overrides ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let panel = &model.overrides;
    let mut constraints = vec![Constraint::Length(1)];
    if panel.is_editing() {
        constraints.push(Constraint::Length(4));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        button(" Manual Override ", model.focus == FocusTarget::OverrideToggle, Color::Red, model.use_colors),
        chunks[0],
    );

    let log_area = if panel.is_editing() {
        render_reason(frame, chunks[1], panel, model.focus == FocusTarget::OverrideReason, model.use_colors);
        frame.render_widget(
            button(
                " Confirm Override ",
                model.focus == FocusTarget::OverrideConfirm,
                Color::DarkGray,
                model.use_colors,
            ),
            chunks[2],
        );
        chunks[3]
    } else {
        chunks[1]
    };

    render_log(frame, log_area, panel, model.use_colors);
}

fn button(label: &str, focused: bool, color: Color, use_colors: bool) -> Paragraph<'_> {
    let mut style = if use_colors {
        Style::default().fg(Color::White).bg(color)
    } else {
        Style::default()
    };
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    Paragraph::new(Line::from(vec![
        Span::raw(if focused { "▶ " } else { "  " }),
        Span::styled(format!("[{}]", label), style),
    ]))
}

fn render_reason(frame: &mut Frame, area: Rect, panel: &OverridePanel, focused: bool, use_colors: bool) {
    let text = if panel.reason().is_empty() {
        Line::from(Span::styled(REASON_PLACEHOLDER, fg(Color::DarkGray, use_colors)))
    } else {
        Line::from(panel.reason().to_string())
    };
    let text = if focused {
        let mut line = text;
        line.spans.push(Span::styled("▏", fg(Color::Yellow, use_colors)));
        line
    } else {
        text
    };

    let field = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title("Reason")
            .borders(Borders::ALL)
            .border_style(focus_style(focused, use_colors)),
    );
    frame.render_widget(field, area);
}

fn render_log(frame: &mut Frame, area: Rect, panel: &OverridePanel, use_colors: bool) {
    let mut lines = vec![Line::from(Span::styled(
        "Override Log",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if panel.log().is_empty() {
        lines.push(Line::from(Span::styled(
            "No overrides recorded",
            fg(Color::Gray, use_colors),
        )));
    }

    for entry in panel.log().entries() {
        lines.push(Line::from(vec![
            Span::styled(
                format_timestamp_detailed(&entry.timestamp),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" — "),
            Span::raw(entry.decision.clone()),
        ]));
        lines.push(Line::from(format!("  Reason: {}", entry.reason)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
