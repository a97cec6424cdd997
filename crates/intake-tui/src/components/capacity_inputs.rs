//! Clinician count, closing hour and remaining capacity readout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{application::AppModel, message::FocusTarget, utils::format_minutes};

use super::focus_style;

pub fn render(frame: &mut Frame, area: Rect, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_field(
        frame,
        chunks[0],
        "Clinicians on duty",
        model.capacity.clinicians,
        model.focus == FocusTarget::Clinicians,
        model.use_colors,
    );
    render_field(
        frame,
        chunks[1],
        "Closing hour (24h)",
        model.capacity.closing_hour,
        model.focus == FocusTarget::ClosingHour,
        model.use_colors,
    );

    let remaining = Paragraph::new(Line::from(vec![
        Span::raw("Remaining capacity: "),
        Span::styled(
            format!("{} min", model.report.remaining_minutes),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({})", format_minutes(model.report.remaining_minutes))),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(remaining, chunks[2]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: u32,
    focused: bool,
    use_colors: bool,
) {
    let field = Paragraph::new(value.to_string()).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_style(focused, use_colors)),
    );
    frame.render_widget(field, area);
}
