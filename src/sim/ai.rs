//! Rule-based paddle AI
//!
//! Each tick the controller either waits out its reaction delay, drifts back
//! to the middle while the ball moves away, or steps toward a target height.
//! Difficulty picks how the target is computed (current ball height, short
//! linear lead, or full bounce-aware prediction), how much aim jitter gets
//! added, and how fast the paddle may move.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{Ball, Paddle, Side};
use crate::config::Config;

/// Paddle stays put while its centre is within this distance of the target
const TARGET_DEAD_ZONE: f32 = 6.0;
/// Same, for the return-to-centre drift
const CENTER_DEAD_ZONE: f32 = 8.0;
/// Medium difficulty looks at most this many ticks ahead
const MEDIUM_LOOKAHEAD: f32 = 0.6;

/// AI skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Multiplier on paddle speed for the AI's max step
    pub speed_factor: f32,
    /// Delay before reacting to a ball that turns toward the paddle
    pub reaction_ms: f32,
    /// Max random aim offset in pixels
    pub jitter: i32,
    /// Ignore the ball (and recentre) while it travels away
    pub track_only_when_approaching: bool,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                speed_factor: 0.40,
                reaction_ms: 100.0,
                jitter: 70,
                track_only_when_approaching: true,
            },
            Difficulty::Medium => DifficultyProfile {
                speed_factor: 0.65,
                reaction_ms: 50.0,
                jitter: 30,
                track_only_when_approaching: true,
            },
            Difficulty::Hard => DifficultyProfile {
                speed_factor: 1.15,
                reaction_ms: 12.5,
                jitter: 6,
                track_only_when_approaching: false,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "medium" | "med" | "2" => Some(Difficulty::Medium),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Next level, wrapping (difficulty selector right arrow)
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Previous level, wrapping (difficulty selector left arrow)
    pub fn prev(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

/// Per-paddle reaction state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AiState {
    /// Ticks left before the AI may move again
    pub cooldown: u32,
    /// Ball vel_x seen on the previous update
    pub last_seen_vel_x: f32,
}

/// Drives one paddle
#[derive(Debug, Clone, PartialEq)]
pub struct AiController {
    pub difficulty: Difficulty,
    pub state: AiState,
}

impl AiController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            state: AiState::default(),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.state.cooldown = 0;
        log::info!("AI difficulty set to {}", difficulty.as_str());
    }

    pub fn reset(&mut self) {
        self.state = AiState::default();
    }

    /// Largest move per tick: `max(1, round(paddle_speed * speed_factor))`
    pub fn max_step(&self, paddle_speed: i32) -> i32 {
        let step = (paddle_speed as f32 * self.difficulty.profile().speed_factor).round() as i32;
        step.max(1)
    }

    /// Run one tick of AI for the paddle on `side`
    pub fn update(
        &mut self,
        paddle: &mut Paddle,
        side: Side,
        ball: &Ball,
        config: &Config,
        rng: &mut dyn RandomSource,
    ) {
        let profile = self.difficulty.profile();
        let max_step = self.max_step(config.paddle_speed);
        let window_height = config.window_height;

        // Horizontal speed toward this paddle; positive means approaching
        let approach = ball.vel.x * side.toward();
        let approaching = approach > 0.0;

        // Edge-triggered: only the tick the ball turns toward us arms the delay
        let last_approach = self.state.last_seen_vel_x * side.toward();
        if approaching && last_approach <= 0.0 {
            self.state.cooldown = config.ms_to_ticks(profile.reaction_ms);
            log::debug!(
                "{} AI reacting in {} ticks",
                side.as_str(),
                self.state.cooldown
            );
        }
        self.state.last_seen_vel_x = ball.vel.x;

        if self.state.cooldown > 0 {
            self.state.cooldown -= 1;
            return;
        }

        if profile.track_only_when_approaching && !approaching {
            let center_target = window_height as f32 / 2.0;
            let drift = max_step / 2;
            if paddle.center_y() < center_target - CENTER_DEAD_ZONE {
                paddle.step_by(drift, window_height);
            } else if paddle.center_y() > center_target + CENTER_DEAD_ZONE {
                paddle.step_by(-drift, window_height);
            }
            return;
        }

        let front_x = paddle.front_x(side);
        let target_y = match self.difficulty {
            Difficulty::Hard => predict_ball_y_at_x(ball, front_x, window_height),
            Difficulty::Medium => {
                if approaching {
                    let distance = (front_x - ball.pos.x) * side.toward();
                    let t = distance / approach.max(1e-5);
                    ball.pos.y + ball.vel.y * t.min(MEDIUM_LOOKAHEAD)
                } else {
                    ball.pos.y
                }
            }
            Difficulty::Easy => ball.pos.y,
        };
        let target_y = target_y + rng.next_in_range(-profile.jitter, profile.jitter) as f32;

        if paddle.center_y() < target_y - TARGET_DEAD_ZONE {
            paddle.step_by(max_step, window_height);
        } else if paddle.center_y() > target_y + TARGET_DEAD_ZONE {
            paddle.step_by(-max_step, window_height);
        }
    }
}

/// Height at which the ball will cross `target_x`, unfolding wall bounces
///
/// Vertical motion is a triangle wave with period `2 * (window_height - r)`:
/// the straight-line projection is folded into one period and mirrored.
/// A ball that is not moving toward `target_x` keeps its current height.
pub fn predict_ball_y_at_x(ball: &Ball, target_x: f32, window_height: i32) -> f32 {
    if ball.vel.x == 0.0 {
        return ball.pos.y;
    }
    let time_to_reach = (target_x - ball.pos.x) / ball.vel.x;
    if time_to_reach <= 0.0 {
        return ball.pos.y;
    }

    let r = ball.r();
    let h = window_height as f32;
    let projected_y = ball.pos.y + ball.vel.y * time_to_reach;

    let span = h - r;
    let period = 2.0 * span;
    if period <= 0.0 {
        return projected_y.clamp(r.min(span), r.max(span));
    }

    let m = (projected_y - r).rem_euclid(period);
    let mirrored = if m > span { period - m } else { m };
    mirrored + r
}
