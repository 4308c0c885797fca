//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here. The state is
//! rebuilt from the config for every match; nothing is persisted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ai::{AiController, Difficulty};
use super::rally::Rally;
use super::rng::RandomSource;
use crate::config::Config;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing at this side's paddle (-1 left, +1 right)
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Who holds the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Possession {
    /// Ball pinned to this side's paddle with zero velocity, waiting for a launch
    Held(Side),
    /// Ball moving freely
    Live,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: u32,
}

impl Ball {
    /// Stationary ball at `pos`
    pub fn new(pos: Vec2, radius: u32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.radius as f32
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one tick along the current velocity
    pub fn move_step(&mut self) {
        self.pos += self.vel;
    }

    /// Recentre in the window, optionally flipping horizontal direction.
    ///
    /// Held balls have zero velocity, so callers must launch afterwards.
    pub fn reset_to_center(&mut self, width: i32, height: i32, reverse_horizontal: bool) {
        self.pos = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        if reverse_horizontal {
            self.vel.x = -self.vel.x;
        }
    }

    /// Rescale velocity to `speed`, keeping direction.
    /// A stationary ball gets `(speed, 0)`.
    pub fn normalize_to_speed(&mut self, speed: f32) {
        let mag = self.vel.length();
        if mag == 0.0 {
            self.vel = Vec2::new(speed, 0.0);
            return;
        }
        self.vel *= speed / mag;
    }

    /// Horizontal serve toward `target`
    pub fn launch_toward(&mut self, target: Side, speed: f32) {
        self.vel = Vec2::new(target.toward() * speed, 0.0);
    }

    /// Attach to the front face of `holder`'s paddle
    pub fn pin_to(&mut self, paddle: &Paddle, holder: Side) {
        let x = match holder {
            Side::Left => (paddle.x + paddle.width) as f32 + self.r(),
            Side::Right => paddle.x as f32 - self.r(),
        };
        self.pos = Vec2::new(x, paddle.center_y());
        self.vel = Vec2::ZERO;
    }
}

/// A paddle (axis-aligned rectangle, top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Max travel per tick
    pub speed: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    /// Paddle for `side`, vertically centred
    pub fn for_side(side: Side, config: &Config) -> Self {
        let x = match side {
            Side::Left => config.paddle_margin,
            Side::Right => config.window_width - config.paddle_margin - config.paddle_width,
        };
        let mut paddle = Self::new(
            x,
            0,
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        );
        paddle.reset_to_center(config.window_height);
        paddle
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y as f32 + self.height as f32 / 2.0
    }

    /// Lowest valid `y` (0 if the paddle is taller than the window)
    #[inline]
    pub fn max_y(&self, window_height: i32) -> i32 {
        (window_height - self.height).max(0)
    }

    /// Face the ball bounces off
    pub fn front_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => (self.x + self.width) as f32,
            Side::Right => self.x as f32,
        }
    }

    pub fn clamp_to(&mut self, window_height: i32) {
        self.y = self.y.clamp(0, self.max_y(window_height));
    }

    /// Move by `delta` pixels (negative is up), then clamp
    pub fn step_by(&mut self, delta: i32, window_height: i32) {
        self.y = self.y.saturating_add(delta);
        self.clamp_to(window_height);
    }

    pub fn move_up(&mut self, window_height: i32) {
        self.step_by(self.speed.saturating_neg(), window_height);
    }

    pub fn move_down(&mut self, window_height: i32) {
        self.step_by(self.speed, window_height);
    }

    pub fn reset_to_center(&mut self, window_height: i32) {
        self.y = window_height / 2 - self.height / 2;
        self.clamp_to(window_height);
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side holding the higher score once either reaches `winning_score`
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.left < winning_score && self.right < winning_score {
            return None;
        }
        if self.left > self.right {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }
}

/// How a paddle is driven
#[derive(Debug, Clone)]
pub enum Controller {
    /// Moved by [`super::TickInput`] intents
    Human,
    /// Moved by the AI each tick
    Ai(AiController),
}

impl Controller {
    pub fn ai(difficulty: Difficulty) -> Self {
        Controller::Ai(AiController::new(difficulty))
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Controller::Ai(_))
    }
}

/// A paddle plus whoever drives it
#[derive(Debug, Clone)]
pub struct Player {
    pub paddle: Paddle,
    pub controller: Controller,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    pub ball: Ball,
    pub left: Player,
    pub right: Player,
    pub score: Score,
    pub possession: Possession,
    pub rally: Rally,
    /// Remaining delay before an AI holder serves
    pub serve_countdown_ms: f32,
    /// Set once a side reaches the winning score; freezes the simulation
    pub winner: Option<Side>,
    pub paused: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// New match; a random side starts with the ball
    pub fn new(
        config: Config,
        left: Controller,
        right: Controller,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let holder = random_side(rng);
        Self::with_holder(config, left, right, holder)
    }

    /// New match with `holder` serving first
    pub fn with_holder(config: Config, left: Controller, right: Controller, holder: Side) -> Self {
        let ball = Ball::new(
            Vec2::new(
                config.window_width as f32 / 2.0,
                config.window_height as f32 / 2.0,
            ),
            config.ball_radius,
        );
        let mut state = Self {
            left: Player {
                paddle: Paddle::for_side(Side::Left, &config),
                controller: left,
            },
            right: Player {
                paddle: Paddle::for_side(Side::Right, &config),
                controller: right,
            },
            ball,
            score: Score::default(),
            possession: Possession::Live,
            rally: Rally::new(&config),
            serve_countdown_ms: 0.0,
            winner: None,
            paused: false,
            time_ticks: 0,
            config,
        };
        state.give_possession(holder);
        log::info!("New match: {} serves first", holder.as_str());
        state
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.player(side).paddle
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn possession(&self) -> Possession {
        self.possession
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Current rally speed
    pub fn speed(&self) -> f32 {
        self.rally.speed
    }

    pub fn holder(&self) -> Option<Side> {
        match self.possession {
            Possession::Held(side) => Some(side),
            Possession::Live => None,
        }
    }

    /// Hand the ball to `side`: zero velocity, pinned to its paddle, AI serve armed
    pub fn give_possession(&mut self, side: Side) {
        self.possession = Possession::Held(side);
        let paddle = self.player(side).paddle;
        self.ball.pin_to(&paddle, side);
        self.serve_countdown_ms = if self.player(side).controller.is_ai() {
            self.config.ai_serve_delay_ms
        } else {
            0.0
        };
    }

    /// Serve from the current holder toward the opponent at the rally speed
    pub fn launch(&mut self) -> Option<Side> {
        let holder = self.holder()?;
        self.ball.launch_toward(holder.opponent(), self.rally.speed);
        self.possession = Possession::Live;
        self.serve_countdown_ms = 0.0;
        log::debug!("{} serves", holder.as_str());
        Some(holder)
    }

    /// Change an AI side's difficulty; resets its reaction cooldown
    pub fn set_difficulty(&mut self, side: Side, difficulty: Difficulty) {
        match &mut self.player_mut(side).controller {
            Controller::Ai(ai) => ai.set_difficulty(difficulty),
            Controller::Human => {
                log::warn!("Ignoring difficulty change for human {} paddle", side.as_str());
            }
        }
    }

    pub fn set_controller(&mut self, side: Side, controller: Controller) {
        self.player_mut(side).controller = controller;
        // Re-arm (or cancel) the AI serve delay for a held ball
        if self.holder() == Some(side) {
            self.give_possession(side);
        }
    }

    /// Rematch with the same controllers: scores zeroed, random holder
    pub fn restart(&mut self, rng: &mut dyn RandomSource) {
        let window_height = self.config.window_height;

        self.score = Score::default();
        self.winner = None;
        self.paused = false;
        self.rally.reset(&self.config);
        for side in Side::BOTH {
            let player = self.player_mut(side);
            player.paddle.reset_to_center(window_height);
            if let Controller::Ai(ai) = &mut player.controller {
                ai.reset();
            }
        }
        // Pinning to the new holder replaces any recentring of the ball
        let holder = random_side(rng);
        self.give_possession(holder);
        log::info!("Rematch: {} serves first", holder.as_str());
    }
}

fn random_side(rng: &mut dyn RandomSource) -> Side {
    if rng.next_in_range(0, 1) == 0 {
        Side::Left
    } else {
        Side::Right
    }
}
