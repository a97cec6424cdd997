//! Per-level workload table
//!
//! One row per triage level: editable patient count, estimated wait and
//! accept/stop status.

use intake_common::{AcceptStatus, CapacityReport};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::message::FocusTarget;

use super::{fg, focus_style};

pub fn status_color(status: AcceptStatus) -> Color {
    match status {
        AcceptStatus::Accept => Color::Green,
        AcceptStatus::Stop => Color::Red,
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    report: &CapacityReport,
    focus: FocusTarget,
    use_colors: bool,
) {
    let header = Row::new(vec!["Triage", "Patients waiting", "Est. wait (min)", "Accepting"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = report.levels.iter().enumerate().map(|(i, level)| {
        let focused = focus == FocusTarget::Patients(i);
        let count = if focused {
            format!("[{}]", level.waiting)
        } else {
            format!(" {} ", level.waiting)
        };

        Row::new(vec![
            Cell::from(level.triage.label).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(count).style(focus_style(focused, use_colors)),
            Cell::from(level.estimated_wait.to_string()),
            Cell::from(level.status.to_string()).style(
                fg(status_color(level.status), use_colors).add_modifier(Modifier::BOLD),
            ),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(17),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(table, area);
}
