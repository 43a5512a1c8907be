//! Nightfall headless simulation
//!
//! Builds a village, lets the player stand still and watches what the rest
//! of the world does for a number of turns.

mod scenario;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use nf_core::action::Action;
use nf_core::config::GameConfig;
use nf_core::{GameLoop, GameRng, TurnResult};

#[derive(Parser, Debug)]
#[command(name = "nightfall-sim", about = "Run the Nightfall simulation without a UI")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of turns to run
    #[arg(short, long, default_value_t = 500)]
    turns: u32,

    /// Print the final game state as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(%err, "failed to load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), turns = args.turns, "starting simulation");

    let mut game = GameLoop::new(scenario::build(config, rng));
    let mut last_phase = game.state().world.time.phase();

    for _ in 0..args.turns {
        let result = game.tick(Action::Wait);

        let state = game.state();
        for line in state.messages.current() {
            println!("[day {} {}] {line}", state.world.time.day(), state.world.time.display_name());
        }
        let phase = state.world.time.phase();
        if phase != last_phase {
            tracing::info!(
                day = state.world.time.day(),
                phase = %phase,
                fov_radius = state.world.fov_radius,
                "phase changed"
            );
            last_phase = phase;
        }

        match result {
            Ok(TurnResult::Continue) => {}
            Ok(TurnResult::PlayerDied(msg)) => {
                println!("{msg}");
                break;
            }
            Err(reason) => {
                tracing::warn!(%reason, "player could not act");
                break;
            }
        }
    }

    let state = game.state();
    let alive = state.world.actors.living().count();
    println!(
        "After {} turns (day {}, {}): {} of {} actors alive",
        state.turns,
        state.world.time.day(),
        state.world.time.display_name(),
        alive,
        state.world.actors.len()
    );
    for actor in state.world.actors.iter().filter(|a| a.deeds.kills > 0) {
        println!(
            "  {} killed {} ({} evil)",
            actor.name, actor.deeds.kills, actor.deeds.evil_kills
        );
    }

    if args.dump {
        match serde_json::to_string_pretty(state) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(%err, "failed to serialize game state");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
