//! Collision detection and response
//!
//! Walls reflect only the vertical component. Paddles replace the velocity
//! entirely: the bounce angle is a linear function of where the ball meets
//! the paddle, from 0 at the centre to the max bounce angle at either end.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};

/// Strict bounding-box overlap between the ball and a paddle
pub fn ball_intersects_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let r = ball.r();
    let (left, right) = (paddle.x as f32, (paddle.x + paddle.width) as f32);
    let (top, bottom) = (paddle.y as f32, (paddle.y + paddle.height) as f32);

    ball.pos.x - r < right && ball.pos.x + r > left && ball.pos.y - r < bottom && ball.pos.y + r > top
}

/// Bounce angle (radians) for a contact at `ball_y` on `paddle`
///
/// Offset from centre is normalised by half the paddle height and clamped to
/// [-1, 1]; positive angles point down the screen.
pub fn bounce_angle(ball_y: f32, paddle: &Paddle, max_bounce_rad: f32) -> f32 {
    let half_height = paddle.height as f32 / 2.0;
    if half_height <= 0.0 {
        return 0.0;
    }
    let normalized = ((ball_y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    normalized * max_bounce_rad
}

/// Send the ball back from `side`'s paddle at `speed`, snapped to its face
pub fn deflect(ball: &mut Ball, paddle: &Paddle, side: Side, speed: f32, max_bounce_rad: f32) {
    let angle = bounce_angle(ball.pos.y, paddle, max_bounce_rad);
    // Away from the paddle: rightward off the left paddle, leftward off the right
    let away = -side.toward();
    ball.vel = Vec2::new(away * speed * angle.cos(), speed * angle.sin());
    ball.pos.x = paddle.front_x(side) + away * ball.r();
}

/// Bounce off the top and bottom of the window
pub fn resolve_wall_collision(ball: &mut Ball, window_height: i32) {
    let r = ball.r();
    let h = window_height as f32;
    if ball.pos.y - r <= 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
    } else if ball.pos.y + r >= h {
        ball.pos.y = h - r;
        ball.vel.y = -ball.vel.y.abs();
    }
}

/// Resolve wall then paddle collisions after the ball has moved.
///
/// Returns true when a paddle was hit. A paddle is only checked while the
/// ball travels toward it, and the left paddle is checked first.
pub fn resolve_collisions(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    current_speed: f32,
    window_height: i32,
    max_bounce_angle_deg: f32,
) -> bool {
    resolve_wall_collision(ball, window_height);

    let max_bounce_rad = max_bounce_angle_deg.to_radians();

    if ball.vel.x < 0.0 && ball_intersects_paddle(ball, left) {
        deflect(ball, left, Side::Left, current_speed, max_bounce_rad);
        return true;
    }

    if ball.vel.x > 0.0 && ball_intersects_paddle(ball, right) {
        deflect(ball, right, Side::Right, current_speed, max_bounce_rad);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const SPEED: f32 = 12.0;
    const MAX_DEG: f32 = 45.0;

    fn paddles() -> (Paddle, Paddle, Config) {
        let config = Config::default();
        (
            Paddle::for_side(Side::Left, &config),
            Paddle::for_side(Side::Right, &config),
            config,
        )
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), 10);
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_top_wall_reflects_vertical_only() {
        let (left, right, config) = paddles();
        let mut ball = ball_at(480.0, 5.0, 7.0, -4.0);
        let hit = resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG);
        assert!(!hit);
        assert_eq!(ball.vel, Vec2::new(7.0, 4.0));
        assert_eq!(ball.pos.y, 10.0);
    }

    #[test]
    fn test_bottom_wall_reflects_vertical_only() {
        let (left, right, config) = paddles();
        let mut ball = ball_at(480.0, 538.0, -7.0, 4.0);
        resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG);
        assert_eq!(ball.vel, Vec2::new(-7.0, -4.0));
        assert_eq!(ball.pos.y, 530.0);
    }

    #[test]
    fn test_wall_forces_sign_even_if_already_reflected() {
        let (left, right, config) = paddles();
        // Already heading down while overlapping the top: stays heading down
        let mut ball = ball_at(480.0, 3.0, 7.0, 4.0);
        resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG);
        assert_eq!(ball.vel.y, 4.0);
    }

    #[test]
    fn test_center_hit_is_horizontal() {
        let (left, right, config) = paddles();
        let mut ball = ball_at(65.0, left.center_y(), -12.0, 0.0);
        let hit = resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG);
        assert!(hit);
        assert!((ball.vel.x - SPEED).abs() < 1e-5);
        assert!(ball.vel.y.abs() < 1e-5);
        // Snapped to the paddle face
        assert_eq!(ball.pos.x, left.front_x(Side::Left) + 10.0);
    }

    #[test]
    fn test_edge_hit_is_max_angle() {
        let (left, right, config) = paddles();
        let half = right.height as f32 / 2.0;

        // Bottom edge of right paddle
        let mut ball = ball_at(895.0, right.center_y() + half, 12.0, 0.0);
        assert!(resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG));
        let angle = ball.vel.y.atan2(-ball.vel.x);
        assert!((angle - MAX_DEG.to_radians()).abs() < 1e-5);
        assert_eq!(ball.pos.x, right.x as f32 - 10.0);

        // Top edge, beyond the paddle end: clamped to -max
        let mut ball = ball_at(895.0, right.center_y() - half - 5.0, 12.0, 0.0);
        assert!(resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG));
        let angle = ball.vel.y.atan2(-ball.vel.x);
        assert!((angle + MAX_DEG.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_deflection_is_linear() {
        let (left, _, _) = paddles();
        let quarter = left.height as f32 / 4.0;
        let angle = bounce_angle(left.center_y() + quarter, &left, MAX_DEG.to_radians());
        assert!((angle - (MAX_DEG / 2.0).to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_same_vertical_sign_for_both_paddles() {
        let (left, right, config) = paddles();
        let mut a = ball_at(65.0, left.center_y() + 30.0, -12.0, 0.0);
        let mut b = ball_at(895.0, right.center_y() + 30.0, 12.0, 0.0);
        resolve_collisions(&mut a, &left, &right, SPEED, config.window_height, MAX_DEG);
        resolve_collisions(&mut b, &left, &right, SPEED, config.window_height, MAX_DEG);
        assert!(a.vel.y > 0.0 && b.vel.y > 0.0);
        assert!((a.vel.y - b.vel.y).abs() < 1e-5);
        assert!(a.vel.x > 0.0 && b.vel.x < 0.0);
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        let (left, right, config) = paddles();
        let mut ball = ball_at(65.0, left.center_y(), 12.0, 0.0);
        let hit = resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG);
        assert!(!hit);
        assert_eq!(ball.vel, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_no_bounce_when_missing_paddle() {
        let (left, right, config) = paddles();
        let mut ball = ball_at(65.0, 20.0, -12.0, 0.0);
        assert!(!resolve_collisions(&mut ball, &left, &right, SPEED, config.window_height, MAX_DEG));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let (left, _, _) = paddles();
        // Ball's left edge exactly on the paddle face
        let ball = ball_at(left.front_x(Side::Left) + 10.0, left.center_y(), -1.0, 0.0);
        assert!(!ball_intersects_paddle(&ball, &left));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::Config;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn paddle_hit_preserves_speed(
            offset in -80.0f32..80.0,
            speed in 1.0f32..40.0,
            incoming_vy in -20.0f32..20.0,
        ) {
            let config = Config::default();
            let left = Paddle::for_side(Side::Left, &config);
            let right = Paddle::for_side(Side::Right, &config);
            let mut ball = Ball::new(Vec2::new(65.0, left.center_y() + offset), 10);
            ball.vel = Vec2::new(-speed, incoming_vy);

            let hit = resolve_collisions(&mut ball, &left, &right, speed, config.window_height, 45.0);
            prop_assert!(hit);
            prop_assert!((ball.vel.length() - speed).abs() < 1e-3);
            prop_assert!(ball.vel.x > 0.0);
        }

        #[test]
        fn right_paddle_hit_preserves_speed(
            offset in -80.0f32..80.0,
            speed in 1.0f32..40.0,
            incoming_vy in -20.0f32..20.0,
        ) {
            let config = Config::default();
            let left = Paddle::for_side(Side::Left, &config);
            let right = Paddle::for_side(Side::Right, &config);
            let mut ball = Ball::new(Vec2::new(895.0, right.center_y() + offset), 10);
            ball.vel = Vec2::new(speed, incoming_vy);

            let hit = resolve_collisions(&mut ball, &left, &right, speed, config.window_height, 45.0);
            prop_assert!(hit);
            prop_assert!((ball.vel.length() - speed).abs() < 1e-3);
            prop_assert!(ball.vel.x < 0.0);
            prop_assert_eq!(ball.pos.x, right.front_x(Side::Right) - 10.0);
        }
    }
}
