//! Help overlay

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{fg, popup_area};

pub fn render(frame: &mut Frame, area: Rect, use_colors: bool) {
    let popup = popup_area(area, 60, 20);
    frame.render_widget(Clear, popup);

    let help_text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            " Urgent Care Capacity Tool ",
            fg(Color::Green, use_colors),
        )]),
        Line::from(""),
        Line::from(" Tab / Shift+Tab   Move between fields"),
        Line::from(" 0-9 / Backspace   Edit the focused number"),
        Line::from(" ↑/↓ or +/-        Step the focused number"),
        Line::from(" o                 Manual override on/off"),
        Line::from(" Enter             Press button / confirm reason"),
        Line::from(" ?                 Toggle help"),
        Line::from(" Esc               Close override panel, else quit"),
        Line::from(" q                 Quit"),
        Line::from(" Ctrl+C            Force quit"),
        Line::from(""),
        Line::from(" Press any key to close"),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(if use_colors {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                }),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help_widget, popup);
}
