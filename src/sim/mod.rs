//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through a [`RandomSource`]
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod collision;
pub mod rally;
pub mod rng;
pub mod state;
pub mod tick;

pub use ai::{AiController, AiState, Difficulty, DifficultyProfile, predict_ball_y_at_x};
pub use collision::{ball_intersects_paddle, bounce_angle, resolve_collisions};
pub use rally::Rally;
pub use rng::{FixedSequence, GameRng, RandomSource};
pub use state::{Ball, Controller, GameState, Paddle, Player, Possession, Score, Side};
pub use tick::{PaddleIntent, TickEvents, TickInput, tick};
