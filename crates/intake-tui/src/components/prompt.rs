//! Blocking validation prompt
//!
//! Shown over everything else; the next key press only dismisses it.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{fg, popup_area};

pub fn render(frame: &mut Frame, area: Rect, message: &str, use_colors: bool) {
    let popup = popup_area(area, 44, 7);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(message.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Press any key to continue"),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_style(fg(Color::Red, use_colors)),
        );

    frame.render_widget(widget, popup);
}
