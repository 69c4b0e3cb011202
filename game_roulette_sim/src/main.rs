mod logger;

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use game_roulette::ai;
use game_roulette::events::GameEvent;
use game_roulette::player::Controller;
use game_roulette::turn::GameOutcome;
use game_roulette::{GameConfig, GameState};

/// Plays shotgun roulette sessions with every seat controlled by the computer.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the game config. The default config is used if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the seed of the config. Consecutive games use consecutive seeds.
    #[arg(short, long)]
    seed: Option<u64>,
    /// The number of games to play.
    #[arg(short, long, default_value_t = 1)]
    games: u32,
}

fn main() -> ExitCode {
    if let Err(err) = logger::init() {
        eprintln!("failed to initialize logger: {}", err);
        return ExitCode::FAILURE;
    }

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut results = BTreeMap::<String, u32>::new();

    for game in 0..args.games {
        let mut config = config.clone();
        config.seed = config.seed.map(|seed| seed.wrapping_add(u64::from(game)));

        let mut state = GameState::new(config)?;
        for index in 0..state.players().len() {
            state.set_controller(index, Controller::Computer)?;
        }

        while !state.is_game_over() {
            ai::take_turn(&mut state)?;

            for event in state.drain_events() {
                log_event(&state, event);
            }
        }

        let name = match state.outcome() {
            Some(GameOutcome::Winner(index)) => state.players()[index].name.clone(),
            _ => String::from("draw"),
        };
        tracing::info!("game {} (seed {}): {}", game + 1, state.seed(), name);
        *results.entry(name).or_default() += 1;
    }

    for (name, wins) in &results {
        tracing::info!("{}: {}/{}", name, wins, args.games);
    }

    Ok(())
}

fn name(state: &GameState, index: usize) -> &str {
    &state.players()[index].name
}

fn log_event(state: &GameState, event: GameEvent) {
    match event {
        GameEvent::ItemUsed {
            player,
            item,
            effect,
        } => {
            tracing::info!("{} uses {} ({:?})", name(state, player), item, effect);
        }
        GameEvent::Shot(shot) => {
            let health = state.players()[shot.target].health;
            tracing::info!(
                "{} shoots {}: {} [{}]",
                name(state, shot.shooter),
                name(state, shot.target),
                shot.result,
                health,
            );
        }
        GameEvent::TurnPassed(change) => {
            tracing::debug!("{}'s turn", name(state, change.to));
        }
        // Reloads, drops and game over are logged by the game itself.
        GameEvent::ChamberLoaded { .. }
        | GameEvent::ItemGranted { .. }
        | GameEvent::TargetSelected { .. }
        | GameEvent::GameOver(_) => (),
    }
}
