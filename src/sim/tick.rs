//! Fixed timestep simulation tick
//!
//! Core game loop: one call per rendered frame advances the match by one tick.

use super::collision::resolve_collisions;
use super::rng::RandomSource;
use super::state::{Controller, GameState, Possession, Side};

/// Vertical movement request for a human paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleIntent {
    #[default]
    Idle,
    Up,
    Down,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left paddle intent (ignored when AI-controlled)
    pub left: PaddleIntent,
    /// Right paddle intent (ignored when AI-controlled)
    pub right: PaddleIntent,
    /// Serve a ball held by a human player
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// What happened during a tick, for sound and HUD collaborators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Ball bounced off a paddle
    pub paddle_hit: bool,
    /// Side that served this tick
    pub launched: Option<Side>,
    /// Side that won a point this tick
    pub scored: Option<Side>,
    /// Set on the tick the match ends
    pub winner: Option<Side>,
}

/// Advance the match by one tick.
///
/// `dt_ms` is the wall-clock frame time, used for the AI serve delay.
/// Ball and paddle motion are per tick.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut dyn RandomSource,
    dt_ms: f32,
) -> TickEvents {
    let mut events = TickEvents::default();

    if input.pause && !state.is_game_over() {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }

    // Nothing moves while paused or after the match is decided
    if state.paused || state.is_game_over() {
        return events;
    }

    state.time_ticks += 1;

    // Human paddles
    let window_height = state.config.window_height;
    for side in Side::BOTH {
        let player = state.player_mut(side);
        if !player.controller.is_ai() {
            match input.intent(side) {
                PaddleIntent::Up => player.paddle.move_up(window_height),
                PaddleIntent::Down => player.paddle.move_down(window_height),
                PaddleIntent::Idle => {}
            }
        }
    }

    match state.possession {
        Possession::Held(holder) => serve(state, holder, input, dt_ms, &mut events),
        Possession::Live => {
            play(state, rng, &mut events);
            check_scoring(state, &mut events);
        }
    }

    events
}

/// Keep a held ball on its paddle and launch it when the holder is ready
fn serve(
    state: &mut GameState,
    holder: Side,
    input: &TickInput,
    dt_ms: f32,
    events: &mut TickEvents,
) {
    let paddle = state.player(holder).paddle;
    state.ball.pin_to(&paddle, holder);

    let ready = if state.player(holder).controller.is_ai() {
        state.serve_countdown_ms = (state.serve_countdown_ms - dt_ms).max(0.0);
        state.serve_countdown_ms <= 0.0
    } else {
        input.launch
    };

    if ready {
        events.launched = state.launch();
    }
}

/// AI, ball motion, collisions and rally speed for a live ball
fn play(state: &mut GameState, rng: &mut dyn RandomSource, events: &mut TickEvents) {
    let GameState {
        config,
        ball,
        left,
        right,
        rally,
        ..
    } = state;

    for (side, player) in [(Side::Left, &mut *left), (Side::Right, &mut *right)] {
        if let Controller::Ai(ai) = &mut player.controller {
            ai.update(&mut player.paddle, side, ball, config, rng);
        }
    }

    ball.move_step();

    let hit = resolve_collisions(
        ball,
        &left.paddle,
        &right.paddle,
        rally.speed,
        config.window_height,
        config.max_bounce_angle_deg,
    );

    if hit {
        events.paddle_hit = true;
        if rally.record_hit(config) {
            ball.normalize_to_speed(rally.speed);
        }
    }
}

/// Award a point once the ball fully leaves the window, then check for a winner
fn check_scoring(state: &mut GameState, events: &mut TickEvents) {
    let r = state.ball.r();
    let width = state.config.window_width as f32;

    let scorer = if state.ball.pos.x + r < 0.0 {
        Side::Right
    } else if state.ball.pos.x - r > width {
        Side::Left
    } else {
        return;
    };

    state.score.increment(scorer);
    state.rally.reset(&state.config);
    state.give_possession(scorer.opponent());
    events.scored = Some(scorer);
    log::info!(
        "{} scores ({} - {})",
        scorer.as_str(),
        state.score.left,
        state.score.right
    );

    if let Some(winner) = state.score.winner(state.config.winning_score) {
        state.winner = Some(winner);
        events.winner = Some(winner);
        log::info!("{} wins the match", winner.as_str());
    }
}
