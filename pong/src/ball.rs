use crate::canvas::{Canvas, Color, Draw};
use crate::geometry::{Rect, Vector2};
use crate::paddle::{Paddle, PlayerId};
use crate::{
    BALL_RADIUS, BALL_SPEED, BALL_VERTICAL_FACTOR, MAX_BALL_STEP, OUT_OF_BOUNDS_MARGIN,
    PADDLE_TOLERANCE, WALL_INSET,
};
use log::debug;
use rand::Rng;

/// What happened to the ball during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    InPlay,
    /// The ball left the field; the given player takes the point.
    Scored(PlayerId),
}

#[derive(Debug, Clone)]
pub struct Ball {
    /// Center of the ball.
    pub position: Vector2,
    /// Units per second.
    pub velocity: Vector2,
    pub radius: f32,
}

impl Ball {
    /// Serves from the center of the screen in a random diagonal direction.
    pub fn new<R: Rng + ?Sized>(screen: Vector2, rng: &mut R) -> Self {
        let velocity = Vector2::new(
            random_sign(rng) * BALL_SPEED,
            random_sign(rng) * BALL_SPEED * BALL_VERTICAL_FACTOR,
        );
        Self::with_velocity(screen_center(screen), velocity)
    }

    pub fn with_velocity(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            radius: BALL_RADIUS,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.position, self.radius * 2.0, self.radius * 2.0)
    }

    /// Resolves collisions, then integrates. Long frames are split into
    /// sub-steps of at most `MAX_BALL_STEP` travel so a paddle face is never
    /// skipped. A scoring step stops right after the out-of-bounds check so
    /// the caller can reset the serve.
    pub fn update(&mut self, dt: f32, screen: Vector2, paddles: &[Paddle]) -> BallOutcome {
        let steps = self.substeps(dt);
        let step_dt = dt / steps as f32;

        for _ in 0..steps {
            if let Some(scorer) = self.resolve_walls(screen) {
                return BallOutcome::Scored(scorer);
            }

            for paddle in paddles {
                self.bounce_off(&paddle.rect());
            }

            self.position = self.position.add(&self.velocity.scale(step_dt));
        }

        BallOutcome::InPlay
    }

    fn substeps(&self, dt: f32) -> u32 {
        let travel = self.velocity.x.abs().max(self.velocity.y.abs()) * dt;
        if travel > MAX_BALL_STEP {
            (travel / MAX_BALL_STEP).ceil() as u32
        } else {
            1
        }
    }

    fn resolve_walls(&mut self, screen: Vector2) -> Option<PlayerId> {
        let rect = self.rect();

        if rect.top() <= 0.0 {
            self.position.y = WALL_INSET + self.radius;
            if self.velocity.y < 0.0 {
                self.velocity.y = -self.velocity.y;
                debug!("Ball bounced off top wall");
            }
        } else if rect.bottom() >= screen.y {
            self.position.y = screen.y - WALL_INSET - self.radius;
            if self.velocity.y > 0.0 {
                self.velocity.y = -self.velocity.y;
                debug!("Ball bounced off bottom wall");
            }
        } else if rect.left() < -OUT_OF_BOUNDS_MARGIN {
            return Some(PlayerId::Two);
        } else if rect.right() > screen.x + OUT_OF_BOUNDS_MARGIN {
            return Some(PlayerId::One);
        }

        None
    }

    // Each axis is checked on its own; both may flip in the same frame.
    fn bounce_off(&mut self, paddle: &Rect) {
        let ball = self.rect();
        if !ball.overlaps(paddle) {
            return;
        }

        let hits_side = (self.velocity.x < 0.0
            && (ball.left() - paddle.right()).abs() < PADDLE_TOLERANCE)
            || (self.velocity.x > 0.0 && (ball.right() - paddle.left()).abs() < PADDLE_TOLERANCE);
        if hits_side {
            self.velocity.x = -self.velocity.x;
            debug!("Ball bounced off paddle side at {:?}", self.position);
        }

        let hits_cap = (self.velocity.y > 0.0
            && (ball.bottom() - paddle.top()).abs() < PADDLE_TOLERANCE)
            || (self.velocity.y < 0.0 && (ball.top() - paddle.bottom()).abs() < PADDLE_TOLERANCE);
        if hits_cap {
            self.velocity.y = -self.velocity.y;
            debug!("Ball bounced off paddle end at {:?}", self.position);
        }
    }

    /// Back to the exact center; each velocity sign is re-rolled, magnitudes kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, screen: Vector2, rng: &mut R) {
        self.position = screen_center(screen);
        self.velocity.x *= random_sign(rng);
        self.velocity.y *= random_sign(rng);
    }
}

impl Draw for Ball {
    fn draw<C: Canvas>(&self, canvas: &mut C) {
        canvas.fill_circle(self.position, self.radius, Color::BALL);
    }
}

fn screen_center(screen: Vector2) -> Vector2 {
    Vector2::new(screen.x / 2.0, screen.y / 2.0)
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn screen() -> Vector2 {
        Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn paddles() -> Vec<Paddle> {
        vec![
            Paddle::new(PlayerId::One, screen()),
            Paddle::new(PlayerId::Two, screen()),
        ]
    }

    #[test]
    fn test_new_ball_serves_from_center() {
        let mut rng = StdRng::seed_from_u64(7);
        let ball = Ball::new(screen(), &mut rng);

        assert_eq!(ball.position, Vector2::new(640.0, 320.0));
        assert_eq!(ball.velocity.x.abs(), 500.0);
        assert_approx_eq!(ball.velocity.y.abs(), 200.0, 1e-4);
        assert_eq!(ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_free_flight() {
        let mut ball = Ball::with_velocity(Vector2::new(640.0, 320.0), Vector2::new(500.0, 200.0));
        let outcome = ball.update(0.1, screen(), &paddles());

        assert_eq!(outcome, BallOutcome::InPlay);
        assert_approx_eq!(ball.position.x, 690.0, 1e-3);
        assert_approx_eq!(ball.position.y, 340.0, 1e-3);
        assert_eq!(ball.velocity, Vector2::new(500.0, 200.0));
    }

    #[test]
    fn test_zero_delta_does_not_move() {
        let mut ball = Ball::with_velocity(Vector2::new(640.0, 320.0), Vector2::new(500.0, 200.0));
        ball.update(0.0, screen(), &paddles());
        assert_eq!(ball.position, Vector2::new(640.0, 320.0));
        assert!(!ball.position.x.is_nan());
    }

    #[test]
    fn test_top_wall_clamps_and_inverts() {
        let mut ball = Ball::with_velocity(Vector2::new(640.0, 25.0), Vector2::new(500.0, -200.0));
        ball.update(0.0, screen(), &paddles());

        assert_eq!(ball.rect().top(), 1.0);
        assert_eq!(ball.velocity.y, 200.0);
    }

    #[test]
    fn test_consecutive_wall_contacts_do_not_double_invert() {
        let mut ball = Ball::with_velocity(Vector2::new(640.0, 20.0), Vector2::new(500.0, -200.0));
        ball.update(0.0, screen(), &paddles());
        // Still touching: push the ball back into the wall without changing velocity.
        ball.position.y = 10.0;
        ball.update(0.0, screen(), &paddles());

        assert_eq!(ball.velocity.y, 200.0);
    }

    #[test]
    fn test_bottom_wall_clamps_and_inverts() {
        let mut ball = Ball::with_velocity(Vector2::new(640.0, 615.0), Vector2::new(-500.0, 200.0));
        ball.update(0.0, screen(), &paddles());

        assert_eq!(ball.rect().bottom(), SCREEN_HEIGHT - 1.0);
        assert_eq!(ball.velocity.y, -200.0);
        assert_eq!(ball.velocity.x, -500.0);
    }

    #[test]
    fn test_exit_left_scores_for_player_two() {
        let mut ball = Ball::with_velocity(Vector2::new(-25.0, 320.0), Vector2::new(-500.0, 200.0));
        let outcome = ball.update(0.1, screen(), &paddles());

        assert_eq!(outcome, BallOutcome::Scored(PlayerId::Two));
        // No integration on a scoring frame.
        assert_eq!(ball.position, Vector2::new(-25.0, 320.0));
    }

    #[test]
    fn test_exit_right_scores_for_player_one() {
        let mut ball = Ball::with_velocity(Vector2::new(1305.0, 320.0), Vector2::new(500.0, 200.0));
        assert_eq!(ball.rect().right(), 1335.0);
        let outcome = ball.update(0.1, screen(), &paddles());
        assert_eq!(outcome, BallOutcome::Scored(PlayerId::One));
    }

    #[test]
    fn test_margin_edge_is_still_in_play() {
        let mut ball = Ball::with_velocity(Vector2::new(1300.0, 320.0), Vector2::new(500.0, 0.0));
        assert_eq!(ball.rect().right(), 1330.0);
        assert_eq!(ball.update(0.0, screen(), &paddles()), BallOutcome::InPlay);
    }

    #[test]
    fn test_paddle_side_bounce() {
        let mut ball = Ball::with_velocity(Vector2::new(85.0, 320.0), Vector2::new(-500.0, 200.0));
        ball.update(0.0, screen(), &paddles());

        assert_eq!(ball.velocity.x, 500.0);
        assert_eq!(ball.velocity.y, 200.0);
    }

    #[test]
    fn test_paddle_ignored_when_moving_away() {
        let mut ball = Ball::with_velocity(Vector2::new(85.0, 320.0), Vector2::new(500.0, 200.0));
        ball.update(0.0, screen(), &paddles());
        assert_eq!(ball.velocity.x, 500.0);
    }

    #[test]
    fn test_paddle_end_bounce() {
        let mut ball = Ball::with_velocity(Vector2::new(50.0, 245.0), Vector2::new(500.0, 200.0));
        ball.update(0.0, screen(), &paddles());

        assert_eq!(ball.velocity.y, -200.0);
        assert_eq!(ball.velocity.x, 500.0);
    }

    #[test]
    fn test_long_frame_is_split_into_substeps() {
        let ball = Ball::with_velocity(Vector2::new(640.0, 320.0), Vector2::new(500.0, 200.0));
        assert_eq!(ball.substeps(0.0), 1);
        assert_eq!(ball.substeps(1.0 / 60.0), 2);
        assert_eq!(ball.substeps(crate::MAX_FRAME_DELTA), 4);
    }

    /// Slow frames must still hit the paddle face from any approach offset.
    #[test]
    fn test_slow_frames_never_pass_through_paddle() {
        for dt in [1.0 / 60.0, 1.0 / 30.0, crate::MAX_FRAME_DELTA, 0.25] {
            for i in 0..100 {
                let start = Vector2::new(300.0 + i as f32 * 0.37, 320.0);
                let mut ball = Ball::with_velocity(start, Vector2::new(-500.0, 0.0));

                let mut frames = 0;
                while ball.velocity.x < 0.0 {
                    let outcome = ball.update(dt, screen(), &paddles());
                    assert_eq!(
                        outcome,
                        BallOutcome::InPlay,
                        "ball from x={} passed the paddle at dt={}",
                        start.x,
                        dt
                    );
                    frames += 1;
                    assert!(frames < 10_000);
                }
                assert!(ball.rect().left() > 40.0);
            }
        }
    }

    #[test]
    fn test_reset_keeps_magnitude() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ball = Ball::with_velocity(Vector2::new(-40.0, 100.0), Vector2::new(-500.0, 200.0));
        let before = ball.velocity.magnitude();

        for _ in 0..16 {
            ball.reset(screen(), &mut rng);
            assert_eq!(ball.position, Vector2::new(640.0, 320.0));
            assert_eq!(ball.velocity.x.abs(), 500.0);
            assert_eq!(ball.velocity.y.abs(), 200.0);
            assert_approx_eq!(ball.velocity.magnitude(), before, 1e-3);
        }
    }
}
