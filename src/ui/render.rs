use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::{Phase, Snapshot};

// Layout: two header rows for the scores and controls hint, then the
// bordered playing field filling the rest of the terminal.
const UI_HEADER_ROWS: u16 = 2;

pub fn render(frame: &mut Frame, snapshot: &Snapshot, display: &DisplayConfig) {
    let area = frame.area();

    // True black background, not the terminal default
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let [header, field] =
        Layout::vertical([Constraint::Length(UI_HEADER_ROWS), Constraint::Min(0)]).areas(area);

    draw_scores(frame, header, snapshot, display);
    draw_field(frame, field, snapshot, display);

    if let Some(message) = overlay_for_phase(&snapshot.phase) {
        render_overlay(frame, area, &message, display.overlay_color);
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, snapshot: &Snapshot, display: &DisplayConfig) {
    let [r, g, b] = display.score_color;
    let score_style = Style::default().fg(Color::Rgb(r, g, b));

    let lines = format!(
        "Player 1 Score: {}\nPlayer 2 Score: {}",
        snapshot.score1, snapshot.score2
    );
    frame.render_widget(Paragraph::new(lines).style(score_style), area);

    let hint = Paragraph::new("W/S: Player 1  Up/Down: Player 2  Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(
        hint,
        Rect {
            height: 1,
            ..area
        },
    );
}

/// Draw the field as a canvas in virtual coordinates, letting ratatui scale
/// to whatever terminal size is available. Game y grows downward, canvas y
/// grows upward, so shapes flip on the way in.
fn draw_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot, display: &DisplayConfig) {
    let field_height = snapshot.field_height;
    let paddle1 = snapshot.paddle1;
    let paddle2 = snapshot.paddle2;

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([0.0, snapshot.field_width as f64])
        .y_bounds([0.0, field_height as f64])
        .paint(move |ctx| {
            // Dotted center line
            for step in 0..20 {
                ctx.draw(&Rectangle {
                    x: (snapshot.field_width / 2.0) as f64,
                    y: (field_height / 20.0 * step as f32) as f64,
                    width: 0.0,
                    height: (field_height / 40.0) as f64,
                    color: Color::DarkGray,
                });
            }

            ctx.draw(&Rectangle {
                x: paddle1.x as f64,
                y: (field_height - paddle1.y - paddle1.height) as f64,
                width: paddle1.width as f64,
                height: paddle1.height as f64,
                color: rgb(display.paddle1_color),
            });
            ctx.draw(&Rectangle {
                x: paddle2.x as f64,
                y: (field_height - paddle2.y - paddle2.height) as f64,
                width: paddle2.width as f64,
                height: paddle2.height as f64,
                color: rgb(display.paddle2_color),
            });
            ctx.draw(&Circle {
                x: snapshot.ball_x as f64,
                y: (field_height - snapshot.ball_y) as f64,
                radius: snapshot.ball_radius as f64,
                color: rgb(display.ball_color),
            });
        });

    frame.render_widget(canvas, area);
}

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Overlay text for the pause phases; `Playing` and `Quit` draw nothing.
fn overlay_for_phase(phase: &Phase) -> Option<OverlayMessage> {
    match phase {
        Phase::StartScreen => Some(OverlayMessage::new(vec![
            "Welcome to Pong".to_string(),
            String::new(),
            "Press space to start".to_string(),
        ])),
        Phase::RoundEnd { scorer } => Some(OverlayMessage::new(vec![
            format!("Player {} won a point", scorer.number()),
            String::new(),
            "Press y to continue".to_string(),
        ])),
        Phase::MatchEnd {
            winner,
            final_score,
            ..
        } => Some(OverlayMessage::new(vec![
            format!("Player {} wins!", winner.number()),
            format!("Final score: {} - {}", final_score.0, final_score.1),
        ])),
        Phase::Playing | Phase::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn start_screen_shows_welcome_prompt() {
        let message = overlay_for_phase(&Phase::StartScreen).unwrap();
        assert_eq!(message.lines[0], "Welcome to Pong");
        assert_eq!(message.lines[2], "Press space to start");
    }

    #[test]
    fn round_end_names_the_scoring_player() {
        let message = overlay_for_phase(&Phase::RoundEnd {
            scorer: Player::Two,
        })
        .unwrap();
        assert_eq!(message.lines[0], "Player 2 won a point");
    }

    #[test]
    fn match_end_shows_winner_and_final_score() {
        let message = overlay_for_phase(&Phase::MatchEnd {
            winner: Player::One,
            final_score: (10, 4),
            ticks_left: 180,
        })
        .unwrap();
        assert_eq!(message.lines[0], "Player 1 wins!");
        assert_eq!(message.lines[1], "Final score: 10 - 4");
    }

    #[test]
    fn playing_phase_has_no_overlay() {
        assert!(overlay_for_phase(&Phase::Playing).is_none());
        assert!(overlay_for_phase(&Phase::Quit).is_none());
    }
}
