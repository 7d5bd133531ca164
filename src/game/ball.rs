use rand::Rng;

use super::state::{Paddle, Player, Score};
use crate::config::PhysicsConfig;

// Bounce tuning, inherited from the original game balance: the left paddle
// returns the ball 10% faster, the right paddle 4% faster, and the right
// paddle imparts ten times the spin for the same paddle speed.
const LEFT_BOUNCE_FACTOR: f32 = -1.1;
const RIGHT_BOUNCE_FACTOR: f32 = -1.04;
const LEFT_SPIN_DIVISOR: f32 = 1000.0;
const RIGHT_SPIN_DIVISOR: f32 = 100.0;

/// What happened inside one ball tick. Drained by the session for state
/// transitions and surfaced to the presentation layer for sound cues.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickEvents {
    pub paddle_bounce: bool,
    pub wall_bounce: bool,
    /// The player who conceded the point this tick, if any.
    pub point_lost: Option<Player>,
}

impl TickEvents {
    pub fn any(&self) -> bool {
        self.paddle_bounce || self.wall_bounce || self.point_lost.is_some()
    }
}

/// The ball: position, velocity, and a spin scalar that biases vertical
/// velocity every tick.
///
/// Spin here is not rotational physics; it is a constant per-tick drift set
/// by the last paddle hit and flipped in sign on wall bounces. Intentional
/// simplification, kept from the original game.
#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub spin: f32,
    pub radius: f32,
    field_width: f32,
    field_height: f32,
}

impl Ball {
    pub fn new(physics: &PhysicsConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            spin: 0.0,
            radius: physics.ball_radius,
            field_width: physics.field_width,
            field_height: physics.field_height,
        };
        ball.reset(rng);
        ball
    }

    /// Advance the ball one tick: integrate, then resolve paddle and wall
    /// collisions. A conceded point resets the ball and both paddles before
    /// this returns, so the pause that follows is purely a notification gate.
    pub fn tick(
        &mut self,
        paddle1: &mut Paddle,
        paddle2: &mut Paddle,
        score: &mut Score,
        rng: &mut impl Rng,
        gravity: f32,
    ) -> TickEvents {
        let mut events = TickEvents::default();

        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity - self.spin;

        self.bounce_paddles(paddle1, paddle2, score, rng, &mut events);
        self.bounce_walls(&mut events);

        events
    }

    /// Test both paddle sides, left first. A hit reverses and amplifies vx,
    /// transfers half the paddle's velocity, and sets spin from the paddle's
    /// speed; a miss concedes the point.
    ///
    /// If the left check conceded (and reset everything), the right check is
    /// skipped for this tick so a single crossing can never score twice.
    fn bounce_paddles(
        &mut self,
        paddle1: &mut Paddle,
        paddle2: &mut Paddle,
        score: &mut Score,
        rng: &mut impl Rng,
        events: &mut TickEvents,
    ) {
        if self.x - self.radius < paddle1.right() {
            if paddle1.top() < self.y && self.y < paddle1.bottom() {
                self.vx *= LEFT_BOUNCE_FACTOR;
                self.vy += paddle1.velocity / 2.0;
                self.spin = paddle1.velocity / LEFT_SPIN_DIVISOR;
                events.paddle_bounce = true;
            } else {
                self.concede(Player::One, paddle1, paddle2, score, rng, events);
                return;
            }
        }

        if self.x + self.radius > paddle2.left() {
            if paddle2.top() < self.y && self.y < paddle2.bottom() {
                self.vx *= RIGHT_BOUNCE_FACTOR;
                self.vy += paddle2.velocity / 2.0;
                self.spin = paddle2.velocity / RIGHT_SPIN_DIVISOR;
                events.paddle_bounce = true;
            } else {
                self.concede(Player::Two, paddle1, paddle2, score, rng, events);
            }
        }
    }

    fn concede(
        &mut self,
        loser: Player,
        paddle1: &mut Paddle,
        paddle2: &mut Paddle,
        score: &mut Score,
        rng: &mut impl Rng,
        events: &mut TickEvents,
    ) {
        score.increment(loser.other());
        events.point_lost = Some(loser);
        self.reset(rng);
        paddle1.reset();
        paddle2.reset();
    }

    /// Bounce off the top and bottom field edges, flipping spin along with
    /// vertical velocity. Threshold test only; the reversed velocity carries
    /// any overshoot back into the field on the next tick.
    fn bounce_walls(&mut self, events: &mut TickEvents) {
        if self.y < self.radius {
            self.vy *= -1.0;
            self.spin *= -1.0;
            events.wall_bounce = true;
        }
        if self.y > self.field_height - self.radius {
            self.vy *= -1.0;
            self.spin *= -1.0;
            events.wall_bounce = true;
        }
    }

    /// Serve from the center with a fresh random velocity: |vx| in 6..=8,
    /// |vy| in 2..=3, each sign chosen independently.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.x = self.field_width / 2.0;
        self.y = self.field_height / 2.0;
        self.spin = 0.0;
        self.vx = rng.gen_range(6..=8) as f32 * random_sign(rng);
        self.vy = rng.gen_range(2..=3) as f32 * random_sign(rng);
    }
}

fn random_sign(rng: &mut impl Rng) -> f32 {
    (rng.gen_range(0..=1) * 2 - 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn setup() -> (Ball, Paddle, Paddle, Score, StdRng) {
        let p = physics();
        let mut rng = rng();
        let ball = Ball::new(&p, &mut rng);
        (
            ball,
            Paddle::left_side(&p),
            Paddle::right_side(&p),
            Score::new(),
            rng,
        )
    }

    #[test]
    fn serve_is_centered_with_bounded_speed() {
        let p = physics();
        let mut rng = rng();
        for _ in 0..50 {
            let ball = Ball::new(&p, &mut rng);
            assert_eq!(ball.x, p.field_width / 2.0);
            assert_eq!(ball.y, p.field_height / 2.0);
            assert_eq!(ball.spin, 0.0);
            assert!((6.0..=8.0).contains(&ball.vx.abs()));
            assert!((2.0..=3.0).contains(&ball.vy.abs()));
        }
    }

    #[test]
    fn left_paddle_hit_reverses_and_amplifies() {
        // Scenario: ball just inside the left paddle's reach, inside its
        // y-span, heading left at 7.
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        ball.x = p1.right() - 1.0;
        ball.y = p1.top() + 50.0;
        ball.vx = -7.0;
        ball.vy = 0.0;
        ball.spin = 0.0;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert!(events.paddle_bounce);
        assert!(events.point_lost.is_none());
        assert!((ball.vx - 7.7).abs() < 1e-4);
        assert_eq!(score.get(Player::Two), 0);
    }

    #[test]
    fn right_paddle_hit_uses_smaller_amplification() {
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        ball.x = p2.left() + 1.0 - 6.0;
        ball.y = p2.top() + 50.0;
        ball.vx = 6.0;
        ball.vy = 0.0;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert!(events.paddle_bounce);
        assert!((ball.vx + 6.24).abs() < 1e-4);
    }

    #[test]
    fn moving_paddle_transfers_velocity_and_spin() {
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        p1.velocity = 4.0;
        ball.x = p1.right() - 1.0;
        ball.y = p1.top() + 100.0;
        ball.vx = -7.0;
        ball.vy = 2.0;

        ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        // vy gains half the paddle velocity on the hit.
        assert!((ball.vy - 4.0).abs() < 1e-4);
        assert!((ball.spin - 4.0 / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn right_paddle_spin_divisor_is_coarser() {
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        p2.velocity = 4.0;
        ball.x = p2.left() + 1.0 - 6.0;
        ball.y = p2.top() + 100.0;
        ball.vx = 6.0;
        ball.vy = 0.0;

        ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert!((ball.spin - 4.0 / 100.0).abs() < 1e-6);
    }

    #[test]
    fn miss_above_left_paddle_scores_for_player_two() {
        // Scenario: same approach as a hit, but above the paddle's span.
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        p1.y = 400.0;
        ball.x = p1.right() - 1.0;
        ball.y = p1.top() - 50.0;
        ball.vx = -7.0;
        ball.vy = 0.0;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert_eq!(events.point_lost, Some(Player::One));
        assert_eq!(score.get(Player::Two), 1);
        assert_eq!(score.get(Player::One), 0);

        // Everything reset synchronously in the scoring tick.
        let p = physics();
        assert_eq!(ball.x, p.field_width / 2.0);
        assert_eq!(ball.y, p.field_height / 2.0);
        assert_eq!(ball.spin, 0.0);
        assert_eq!(p1.y, p.field_height / 2.0 - p1.height / 2.0);
        assert_eq!(p2.y, p.field_height / 2.0 - p2.height / 2.0);
    }

    #[test]
    fn miss_on_right_side_scores_for_player_one() {
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        p2.y = 0.0;
        ball.x = p2.left() + 1.0 - 6.0;
        ball.y = p2.bottom() + 50.0;
        ball.vx = 6.0;
        ball.vy = 0.0;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert_eq!(events.point_lost, Some(Player::Two));
        assert_eq!(score.get(Player::One), 1);
    }

    #[test]
    fn left_concession_disarms_right_check_in_same_tick() {
        // Shrink the field so both proximity bands hold at once; only one
        // point may be awarded.
        let p = PhysicsConfig {
            field_width: 50.0,
            ..PhysicsConfig::default()
        };
        let mut rng = rng();
        let mut ball = Ball::new(&p, &mut rng);
        let mut p1 = Paddle::left_side(&p);
        let mut p2 = Paddle::right_side(&p);
        let mut score = Score::new();

        p1.y = 500.0;
        p2.y = 500.0;
        ball.x = 25.0;
        ball.y = 100.0; // above both paddles
        ball.vx = -1.0;
        ball.vy = 0.0;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert_eq!(events.point_lost, Some(Player::One));
        assert_eq!(score.get(Player::Two), 1);
        assert_eq!(score.get(Player::One), 0);
    }

    #[test]
    fn top_wall_bounce_flips_velocity_and_spin() {
        // Scenario: ball crossing the top threshold with vy = -3.
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        ball.x = 600.0;
        ball.y = 8.0;
        ball.vx = 5.0;
        ball.vy = -3.0;
        ball.spin = 0.002;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert!(events.wall_bounce);
        // Integration pulls vy to -3.002 before the flip.
        assert!((ball.vy - 3.002).abs() < 1e-4);
        assert!((ball.spin + 0.002).abs() < 1e-6);
    }

    #[test]
    fn bottom_wall_bounce_flips_velocity() {
        let p = physics();
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        ball.x = 600.0;
        ball.y = p.field_height - 8.0;
        ball.vx = 5.0;
        ball.vy = 3.0;

        let events = ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);

        assert!(events.wall_bounce);
        assert!(ball.vy < 0.0);
    }

    #[test]
    fn spin_biases_vertical_velocity_each_tick() {
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        ball.x = 600.0;
        ball.y = 400.0;
        ball.vx = 6.0;
        ball.vy = 2.0;
        ball.spin = 0.5;

        ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);
        assert!((ball.vy - 1.5).abs() < 1e-4);
        ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.0);
        assert!((ball.vy - 1.0).abs() < 1e-4);
    }

    #[test]
    fn gravity_accelerates_the_ball_downward() {
        let (mut ball, mut p1, mut p2, mut score, mut rng) = setup();
        ball.x = 600.0;
        ball.y = 400.0;
        ball.vx = 6.0;
        ball.vy = 0.0;
        ball.spin = 0.0;

        ball.tick(&mut p1, &mut p2, &mut score, &mut rng, 0.3);
        assert!((ball.vy - 0.3).abs() < 1e-4);
    }
}
