use crate::config::PhysicsConfig;

/// Friction divisor applied to paddle velocity once per tick, after both
/// paddles have moved. Holding a key settles into a terminal velocity;
/// releasing it decays the paddle to a stop over a few ticks.
pub const PADDLE_FRICTION: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A vertically moving paddle pinned to one side of the field.
///
/// Input sets acceleration only; velocity integrates from it each tick, so a
/// held key ramps the paddle up to speed rather than teleporting it.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    pub acceleration: f32,
    field_height: f32,
}

impl Paddle {
    pub fn new(x: f32, physics: &PhysicsConfig) -> Self {
        Self {
            x,
            y: physics.field_height / 2.0 - physics.paddle_height / 2.0,
            width: physics.paddle_width,
            height: physics.paddle_height,
            velocity: 0.0,
            acceleration: 0.0,
            field_height: physics.field_height,
        }
    }

    /// The left-side paddle, flush against x = 0.
    pub fn left_side(physics: &PhysicsConfig) -> Self {
        Self::new(0.0, physics)
    }

    /// The right-side paddle, flush against the right field edge.
    pub fn right_side(physics: &PhysicsConfig) -> Self {
        Self::new(physics.field_width - physics.paddle_width, physics)
    }

    pub fn move_up(&mut self) {
        self.acceleration = -1.0;
    }

    pub fn move_down(&mut self) {
        self.acceleration = 1.0;
    }

    pub fn stop(&mut self) {
        self.acceleration = 0.0;
    }

    /// Integrate one tick of movement, then clamp to the field.
    ///
    /// Velocity is deliberately not zeroed when the paddle hits an edge; it
    /// keeps pushing against the wall and springs back into play as soon as
    /// the direction reverses.
    pub fn tick(&mut self) {
        self.velocity += self.acceleration;
        self.y += self.velocity;
        if self.y < 0.0 {
            self.y = 0.0;
        } else if self.y + self.height > self.field_height {
            self.y = self.field_height - self.height;
        }
    }

    /// Per-tick velocity damping, applied by the session after both paddles
    /// have ticked.
    pub fn apply_friction(&mut self) {
        self.velocity /= PADDLE_FRICTION;
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Back to mid-field, at rest.
    pub fn reset(&mut self) {
        self.y = self.field_height / 2.0 - self.height / 2.0;
        self.velocity = 0.0;
        self.acceleration = 0.0;
    }
}

/// Point totals for the current match.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    score1: u8,
    score2: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.score1 += 1,
            Player::Two => self.score2 += 1,
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.score1,
            Player::Two => self.score2,
        }
    }

    pub fn reset(&mut self) {
        self.score1 = 0;
        self.score2 = 0;
    }

    /// The player whose total has reached the threshold, if any. Player 1 is
    /// checked first, matching the order points are awarded in.
    pub fn winner(&self, threshold: u8) -> Option<Player> {
        if self.score1 >= threshold {
            Some(Player::One)
        } else if self.score2 >= threshold {
            Some(Player::Two)
        } else {
            None
        }
    }
}
