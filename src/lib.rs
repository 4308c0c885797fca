//! Retro Pong - classic two-paddle arcade game core
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (entities, physics, AI, rally, round state)
//! - `config`: Immutable game configuration with JSON overrides
//! - `audio`: Sound cues derived from simulation events
//!
//! Rendering, menus and sound playback live outside this crate. They call
//! [`sim::tick`] once per frame and draw the resulting [`sim::GameState`].

pub mod audio;
pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};

/// Default game constants (pixels, ticks, milliseconds)
pub mod consts {
    /// Simulation rate in ticks per second
    pub const TICK_RATE: f32 = 80.0;

    /// Window dimensions
    pub const WINDOW_WIDTH: i32 = 960;
    pub const WINDOW_HEIGHT: i32 = 540;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 150;
    /// Max paddle travel per tick
    pub const PADDLE_SPEED: i32 = 10;
    /// Horizontal gap between a paddle and its side of the window
    pub const PADDLE_MARGIN: i32 = 40;

    /// Ball defaults
    pub const BALL_RADIUS: u32 = 10;
    /// Serve speed (pixels per tick)
    pub const BALL_SPEED: f32 = 12.0;
    pub const MAX_BOUNCE_ANGLE_DEG: f32 = 45.0;

    /// Rally speed-up: every N paddle hits, add SPEED_INCREMENT up to MAX_BALL_SPEED
    pub const HITS_PER_SPEEDUP: u32 = 10;
    pub const SPEED_INCREMENT: f32 = 1.0;
    pub const MAX_BALL_SPEED: f32 = 22.0;

    pub const WINNING_SCORE: u32 = 3;

    /// Delay before an AI-held ball is served
    pub const AI_SERVE_DELAY_MS: f32 = 700.0;
}
