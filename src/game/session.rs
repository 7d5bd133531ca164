use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ball::Ball;
use super::input::Command;
use super::state::{Paddle, Player, Score};
use crate::config::PhysicsConfig;

/// How long the match-end banner stays up before the next match begins:
/// 3 seconds at the 60 Hz tick rate. No acknowledgement required.
pub const MATCH_END_PAUSE_TICKS: u32 = 3 * crate::TARGET_FPS as u32;

/// Where the session is in its lifecycle. Pause phases are ordinary states
/// the tick loop passes through every frame; nothing ever blocks waiting for
/// input.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting for a start command before the first serve.
    StartScreen,
    /// Simulation running.
    Playing,
    /// A point was just conceded; waiting for an acknowledgement.
    RoundEnd { scorer: Player },
    /// Match decided; banner countdown before scores reset.
    MatchEnd {
        winner: Player,
        final_score: (u8, u8),
        ticks_left: u32,
    },
    /// Terminal.
    Quit,
}

/// Everything one call to [`MatchSession::advance`] produced, for the
/// presentation layer to turn into sound and overlay cues.
#[derive(Debug, Default, Clone)]
pub struct MatchEvents {
    pub paddle_bounce: bool,
    pub wall_bounce: bool,
    pub point_lost: Option<Player>,
    pub match_won: Option<(Player, (u8, u8))>,
}

/// An immutable render-state snapshot taken after a tick. The presentation
/// layer draws from this and never touches the live simulation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle1: RectF,
    pub paddle2: RectF,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub score1: u8,
    pub score2: u8,
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    fn of(paddle: &Paddle) -> Self {
        Self {
            x: paddle.x,
            y: paddle.y,
            width: paddle.width,
            height: paddle.height,
        }
    }
}

/// Commands folded down to at most one effect per concern for a single tick.
/// Conflicting motion commands for the same paddle resolve last-write-wins.
#[derive(Debug, Default)]
struct CommandBatch {
    paddle1: Option<Motion>,
    paddle2: Option<Motion>,
    start: bool,
    acknowledge: bool,
    quit: bool,
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Up,
    Down,
    Stop,
}

impl CommandBatch {
    fn fold(commands: &[Command]) -> Self {
        let mut batch = Self::default();
        for command in commands {
            match command {
                Command::Paddle1Up => batch.paddle1 = Some(Motion::Up),
                Command::Paddle1Down => batch.paddle1 = Some(Motion::Down),
                Command::Paddle1Stop => batch.paddle1 = Some(Motion::Stop),
                Command::Paddle2Up => batch.paddle2 = Some(Motion::Up),
                Command::Paddle2Down => batch.paddle2 = Some(Motion::Down),
                Command::Paddle2Stop => batch.paddle2 = Some(Motion::Stop),
                Command::Start => batch.start = true,
                Command::Continue => batch.acknowledge = true,
                Command::Quit => batch.quit = true,
            }
        }
        batch
    }
}

fn apply_motion(paddle: &mut Paddle, motion: Option<Motion>) {
    match motion {
        Some(Motion::Up) => paddle.move_up(),
        Some(Motion::Down) => paddle.move_down(),
        Some(Motion::Stop) => paddle.stop(),
        None => {}
    }
}

/// One match of Pong: both paddles, the ball, the score, and the phase
/// machine that sequences rounds, pauses, and resets.
///
/// The session owns its RNG so ball serves are reproducible under a seed;
/// the binary constructs it from entropy, tests from a fixed seed.
pub struct MatchSession {
    pub paddle1: Paddle,
    pub paddle2: Paddle,
    pub ball: Ball,
    pub score: Score,
    phase: Phase,
    winning_score: u8,
    field_width: f32,
    field_height: f32,
    rng: StdRng,
}

impl MatchSession {
    pub fn new(physics: &PhysicsConfig) -> Self {
        Self::with_rng(physics, StdRng::from_entropy())
    }

    pub fn with_seed(physics: &PhysicsConfig, seed: u64) -> Self {
        Self::with_rng(physics, StdRng::seed_from_u64(seed))
    }

    fn with_rng(physics: &PhysicsConfig, mut rng: StdRng) -> Self {
        Self {
            paddle1: Paddle::left_side(physics),
            paddle2: Paddle::right_side(physics),
            ball: Ball::new(physics, &mut rng),
            score: Score::new(),
            phase: Phase::StartScreen,
            winning_score: physics.winning_score,
            field_width: physics.field_width,
            field_height: physics.field_height,
            rng,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_quit(&self) -> bool {
        self.phase == Phase::Quit
    }

    /// Drain one tick's worth of commands and advance the simulation by at
    /// most one tick. Quit wins over everything; pause phases consume only
    /// their gating command and let the rest of the batch fall away.
    pub fn advance(&mut self, commands: &[Command]) -> MatchEvents {
        let mut events = MatchEvents::default();
        let batch = CommandBatch::fold(commands);

        if batch.quit {
            self.phase = Phase::Quit;
            return events;
        }

        match self.phase.clone() {
            Phase::StartScreen => {
                if batch.start {
                    self.phase = Phase::Playing;
                }
            }
            Phase::RoundEnd { .. } => {
                if batch.acknowledge {
                    self.phase = Phase::Playing;
                }
            }
            Phase::MatchEnd {
                winner,
                final_score,
                ticks_left,
            } => {
                if ticks_left > 1 {
                    self.phase = Phase::MatchEnd {
                        winner,
                        final_score,
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.score.reset();
                    self.paddle1.reset();
                    self.paddle2.reset();
                    self.ball.reset(&mut self.rng);
                    self.phase = Phase::Playing;
                }
            }
            Phase::Playing => self.play_tick(&batch, &mut events),
            Phase::Quit => {}
        }

        events
    }

    fn play_tick(&mut self, batch: &CommandBatch, events: &mut MatchEvents) {
        apply_motion(&mut self.paddle1, batch.paddle1);
        apply_motion(&mut self.paddle2, batch.paddle2);

        self.paddle1.tick();
        self.paddle2.tick();
        self.paddle1.apply_friction();
        self.paddle2.apply_friction();

        let tick = self.ball.tick(
            &mut self.paddle1,
            &mut self.paddle2,
            &mut self.score,
            &mut self.rng,
            0.0,
        );

        events.paddle_bounce = tick.paddle_bounce;
        events.wall_bounce = tick.wall_bounce;
        events.point_lost = tick.point_lost;

        if let Some(loser) = tick.point_lost {
            if let Some(winner) = self.score.winner(self.winning_score) {
                let final_score = (self.score.get(Player::One), self.score.get(Player::Two));
                events.match_won = Some((winner, final_score));
                self.phase = Phase::MatchEnd {
                    winner,
                    final_score,
                    ticks_left: MATCH_END_PAUSE_TICKS,
                };
            } else {
                self.phase = Phase::RoundEnd {
                    scorer: loser.other(),
                };
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field_width: self.field_width,
            field_height: self.field_height,
            paddle1: RectF::of(&self.paddle1),
            paddle2: RectF::of(&self.paddle2),
            ball_x: self.ball.x,
            ball_y: self.ball.y,
            ball_radius: self.ball.radius,
            score1: self.score.get(Player::One),
            score2: self.score.get(Player::Two),
            phase: self.phase.clone(),
        }
    }
}
