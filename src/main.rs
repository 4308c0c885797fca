//! Retro Pong headless runner
//!
//! Plays a match without a window and logs what happens. Human sides hold
//! their paddles still and serve as soon as they get the ball.
//!
//! Usage:
//!   RUST_LOG=info cargo run -- --left hard --right easy --seed 7

use anyhow::{Context, Result, bail};
use clap::Parser;

use retro_pong::Config;
use retro_pong::audio;
use retro_pong::sim::{Controller, Difficulty, GameRng, GameState, Side, TickInput, tick};

#[derive(Parser)]
#[command(name = "retro-pong")]
#[command(about = "Run a headless Pong match and log the events")]
struct Args {
    /// Left paddle: human, easy, medium or hard
    #[arg(long, default_value = "medium")]
    left: String,

    /// Right paddle: human, easy, medium or hard
    #[arg(long, default_value = "hard")]
    right: String,

    /// RNG seed for serve selection and AI jitter
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON file overriding default settings
    #[arg(long)]
    config: Option<String>,

    /// Stop after this many ticks if nobody has won
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u64,
}

fn parse_controller(name: &str) -> Result<Controller> {
    if name.eq_ignore_ascii_case("human") {
        return Ok(Controller::Human);
    }
    match Difficulty::from_str(name) {
        Some(difficulty) => Ok(Controller::ai(difficulty)),
        None => bail!("unknown controller '{name}' (expected human, easy, medium or hard)"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {path}"))?,
        None => Config::default(),
    };
    let left = parse_controller(&args.left)?;
    let right = parse_controller(&args.right)?;

    let mut rng = GameRng::new(args.seed);
    let mut state = GameState::new(config, left, right, &mut rng);
    let dt_ms = state.config.tick_ms();

    log::info!(
        "Retro Pong: {} vs {} (seed {}, first to {})",
        args.left,
        args.right,
        args.seed,
        state.config.winning_score
    );

    let input = TickInput {
        launch: true,
        ..Default::default()
    };
    let mut rallies = 0u32;
    let mut longest_rally = 0u32;

    while state.time_ticks < args.max_ticks {
        let hits_before = state.rally.hits;
        let events = tick(&mut state, &input, &mut rng, dt_ms);

        for cue in audio::cues(&events) {
            log::trace!("cue {:?}", cue);
        }
        if events.scored.is_some() {
            rallies += 1;
            longest_rally = longest_rally.max(hits_before);
        }
        if let Some(winner) = events.winner {
            println!(
                "{} wins {} - {} after {} ticks ({} rallies, longest {} hits)",
                winner.as_str(),
                state.score.get(Side::Left),
                state.score.get(Side::Right),
                state.time_ticks,
                rallies,
                longest_rally
            );
            return Ok(());
        }
    }

    println!(
        "No winner after {} ticks ({} - {})",
        state.time_ticks, state.score.left, state.score.right
    );
    Ok(())
}
