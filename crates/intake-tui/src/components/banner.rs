//! Intake decision banner

use intake_common::{Banner, BannerSeverity};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Background color for a banner severity
pub fn severity_color(severity: BannerSeverity) -> Color {
    match severity {
        BannerSeverity::Normal => Color::Green,
        BannerSeverity::Restricted => Color::Indexed(208),
        BannerSeverity::Critical => Color::Red,
    }
}

pub fn render(frame: &mut Frame, area: Rect, banner: &Banner, use_colors: bool) {
    let style = if use_colors {
        Style::default()
            .fg(Color::White)
            .bg(severity_color(banner.severity))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(banner.text.as_str())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(paragraph, area);
}
