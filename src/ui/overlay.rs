// Overlay message system for displaying centered text on screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    /// Lines of text to display
    pub lines: Vec<String>,
}

impl OverlayMessage {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// Render the overlay as a centered, bordered box over whatever is already
/// drawn. `color` is the background fill (the original game's purple).
pub fn render_overlay(frame: &mut Frame, area: Rect, message: &OverlayMessage, color: [u8; 3]) {
    let width = message
        .lines
        .iter()
        .map(|line| line.len() as u16)
        .max()
        .unwrap_or(0)
        + 6;
    let height = message.lines.len() as u16 + 2;

    let width = width.min(area.width);
    let height = height.min(area.height);
    let overlay_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let bg = Color::Rgb(color[0], color[1], color[2]);
    let text: Vec<Line> = message
        .lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    frame.render_widget(Clear, overlay_area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(bg))
            .block(Block::default().borders(Borders::ALL)),
        overlay_area,
    );
}
