//! Application view logic (View in Elm architecture)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::{
    application::AppModel,
    components::{banner, capacity_inputs, fg, governance_panel, help, prompt, status_line, triage_table},
};

const ADVISORY: &str = "Priority-based queueing in effect. Lower triage may be paused \
indefinitely when higher acuity is present. Wait times are estimates only.";

/// Render the complete application UI
pub fn render_app(model: &AppModel, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Staffing inputs
            Constraint::Length(8), // Triage table
            Constraint::Length(2), // Advisory
            Constraint::Min(6),    // Governance panel
            Constraint::Length(1), // Status line
        ])
        .split(area);

    render_title(frame, chunks[0]);
    banner::render(frame, chunks[1], &model.report.banner, model.use_colors);
    capacity_inputs::render(frame, chunks[2], model);
    triage_table::render(frame, chunks[3], &model.report, model.focus, model.use_colors);
    render_advisory(frame, chunks[4], model.use_colors);
    governance_panel::render(frame, chunks[5], model);
    status_line::render(frame, chunks[6], model);

    // Overlays
    if model.show_help {
        help::render(frame, area, model.use_colors);
    }

    if let Some(message) = &model.prompt {
        prompt::render(frame, area, message, model.use_colors);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        " Urgent Care Capacity Tool",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn render_advisory(frame: &mut Frame, area: Rect, use_colors: bool) {
    let advisory = Paragraph::new(ADVISORY)
        .style(fg(Color::Gray, use_colors))
        .wrap(Wrap { trim: true });
    frame.render_widget(advisory, area);
}
