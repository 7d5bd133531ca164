// Configuration types for termpong.
// All settings carry defaults matching the classic field: 1200x800, 20x200
// paddles, radius-10 ball, first to 10 points.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub socket: SocketConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Field dimensions in virtual units
    pub field_width: f32,
    pub field_height: f32,

    // Paddle dimensions
    pub paddle_width: f32,
    pub paddle_height: f32,

    // Ball radius
    pub ball_radius: f32,

    // Score required to win a match
    pub winning_score: u8,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            field_width: 1200.0,
            field_height: 800.0,
            paddle_width: 20.0,
            paddle_height: 200.0,
            ball_radius: 10.0,
            winning_score: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle (player 1)
    pub paddle1_up: String,
    pub paddle1_down: String,

    // Right paddle (player 2)
    pub paddle2_up: String,
    pub paddle2_down: String,

    // Session controls
    pub start: String,
    pub acknowledge: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle1_up: "W".to_string(),
            paddle1_down: "S".to_string(),
            paddle2_up: "Up".to_string(),
            paddle2_down: "Down".to_string(),
            start: "Space".to_string(),
            acknowledge: "Y".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Colors as RGB values 0-255, matching the original palette:
    // blue left paddle, red right paddle, green ball, purple overlays.
    pub paddle1_color: [u8; 3],
    pub paddle2_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub score_color: [u8; 3],
    pub overlay_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            paddle1_color: [0, 0, 255],
            paddle2_color: [255, 0, 0],
            ball_color: [0, 255, 0],
            score_color: [255, 255, 255],
            overlay_color: [128, 0, 128],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SocketConfig {
    // Address the legacy token adapter connects to as a TCP client
    pub address: String,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            address: "localhost:8888".to_string(),
        }
    }
}
