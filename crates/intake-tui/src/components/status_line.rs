//! Status line
//!
//! Displays the latest status message, patient totals and the clock the
//! report was computed against.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::{
    application::AppModel,
    utils::{format_clock, truncate_text},
};

/// Format the status line text
pub fn format_status_text(model: &AppModel) -> String {
    let status_text = match &model.status_message {
        Some(msg) => format!("{} {}", msg.severity.symbol(), msg.message),
        None => "Ready".to_string(),
    };

    format!(
        " {} | Waiting: {} | Workload: {} min | Clock: {} | Help: ?",
        status_text,
        model.patients.total(),
        model.report.total_workload(),
        format_clock(&model.now),
    )
}

pub fn render(frame: &mut Frame, area: Rect, model: &AppModel) {
    let color = model
        .status_message
        .as_ref()
        .map(|msg| msg.severity.color())
        .unwrap_or(Color::Gray);

    let mut style = Style::default();
    if model.use_colors {
        style = style.fg(color);
    }
    if model.status_message.is_some() {
        style = style.add_modifier(Modifier::BOLD);
    }

    let text = truncate_text(&format_status_text(model), usize::from(area.width));
    frame.render_widget(Paragraph::new(text).style(style), area);
}
