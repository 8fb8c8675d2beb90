//! Simulation command: computer-vs-computer sessions with optional hand
//! history output.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//!
//! // 1000 hands, Easy against Hard, history written as JSONL
//! let args = [
//!     "holdem", "sim", "--hands", "1000", "--seed", "42",
//!     "--p1", "easy", "--p2", "hard", "--output", "data/sim.jsonl",
//! ];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use crate::config;
use crate::error::CliError;
use holdem_ai::create_strategy;
use holdem_engine::engine::Engine;
use holdem_engine::hand::Winner;
use holdem_engine::logger::{HandLogger, HandRecorder, format_hand_id};
use holdem_engine::player::{Difficulty, Seat, SeatKind};
use log::{debug, info};
use std::io::Write;

use super::{play_computer_turn, strategy_rng};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    hands: u32,
    wins: [u32; 2],
    ties: u32,
}

/// Handle the sim command.
///
/// Plays up to `hands` hands between two computer seats on one session
/// seed. Stops early when a stack is busted.
///
/// # Arguments
///
/// * `hands` - Number of hands to simulate (must be >= 1)
/// * `output` - Path to write hand histories (JSONL, one record per hand)
/// * `seed` - Session seed; configured or random when `None`
/// * `p1`, `p2` - Seat difficulties; the configured one when `None`
/// * `out` - Output stream for the summary
/// * `err` - Output stream for notes on early stops
pub fn handle_sim_command(
    hands: u32,
    output: Option<String>,
    seed: Option<u64>,
    p1: Option<Difficulty>,
    p2: Option<Difficulty>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let levels = [p1.unwrap_or(cfg.difficulty), p2.unwrap_or(cfg.difficulty)];
    let seats = levels.map(SeatKind::Computer);

    let mut engine = Engine::with_config(cfg.engine_config(seed, seats));
    let strategies = levels.map(create_strategy);
    let mut rng = strategy_rng(&engine);
    let mut logger = output.as_deref().map(HandLogger::create).transpose()?;
    let mut tally = Tally::default();

    info!(
        "sim: {} hands, {} vs {}, seed {}",
        hands,
        levels[0],
        levels[1],
        engine.seed()
    );

    loop {
        let hand_id = match logger.as_mut() {
            Some(l) => l.next_id(),
            None => format_hand_id("sim", engine.hands_played()),
        };
        let mut recorder = HandRecorder::begin(hand_id, &engine);

        while !engine.has_ended() {
            let seat = engine.player_turn();
            let strategy = match seat {
                Seat::Player1 => &strategies[0],
                Seat::Player2 => &strategies[1],
            };
            let events = play_computer_turn(&mut engine, seat, strategy.as_ref(), &mut rng)?;
            recorder.observe(&events);
        }

        let record = recorder.finish(&engine);
        debug!("{} -> {:?} pot {}", record.hand_id, record.winner, record.pot);
        if let Some(l) = logger.as_mut() {
            l.write(&record)?;
        }
        tally.hands += 1;
        match record.winner {
            Some(Winner::Player1) => tally.wins[0] += 1,
            Some(Winner::Player2) => tally.wins[1] += 1,
            Some(Winner::Tie) => tally.ties += 1,
            None => {}
        }

        if engine.is_busted() {
            if tally.hands < hands {
                writeln!(
                    err,
                    "Stopped after {} of {} hands: a stack is busted",
                    tally.hands, hands
                )?;
            }
            break;
        }
        if tally.hands >= hands {
            break;
        }
        engine.new_game()?;
    }

    writeln!(out, "Simulated: {} hands (seed {})", tally.hands, engine.seed())?;
    writeln!(out, "Player 1 ({}): {} wins", levels[0], tally.wins[0])?;
    writeln!(out, "Player 2 ({}): {} wins", levels[1], tally.wins[1])?;
    writeln!(out, "Ties: {}", tally.ties)?;
    writeln!(
        out,
        "Stacks: Player 1 {}, Player 2 {}",
        engine.player(Seat::Player1).chips(),
        engine.player(Seat::Player2).chips()
    )?;
    if let Some(path) = &output {
        writeln!(out, "Wrote {} hand records to {}", tally.hands, path)?;
    }
    Ok(())
}
