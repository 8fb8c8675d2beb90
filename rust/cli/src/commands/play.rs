//! # Play Command
//!
//! Hands at the terminal, either human (Player 1) against the computer or
//! computer against computer.
//!
//! ## Features
//!
//! - Moves typed as `f`/`fold`, `c`/`call`, `r N`/`raise N`; `q` quits
//! - Rejected moves are reported and the prompt repeats
//! - The session stops after `--hands` hands, on quit, or when a stack is busted
//! - End of input in the middle of a hand interrupts the session

use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_move, format_outcome};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_move};
use holdem_engine::engine::{Engine, EngineState};
use holdem_engine::events::GameEvent;
use holdem_engine::player::{Difficulty, Seat, SeatKind};
use log::info;
use std::io::{BufRead, Write};

use super::{play_computer_turn, seat_strategies, strategy_rng};

/// Handle the play command: hands at the terminal
///
/// # Arguments
///
/// * `vs` - Opponent type (human at the keyboard or computer only)
/// * `difficulty` - Computer difficulty; the configured one when `None`
/// * `hands` - Number of hands to play (must be >= 1); unlimited when `None`
/// * `seed` - RNG seed for reproducibility (default: configured or random)
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for the human's moves
///
/// # Returns
///
/// * `Ok(())` when the session finishes or the user quits
/// * `Err(CliError::Interrupted)` when input ends in the middle of a hand
/// * `Err(CliError)` if hands is 0, the configuration is invalid, or I/O fails
pub fn handle_play_command(
    vs: Vs,
    difficulty: Option<Difficulty>,
    hands: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let difficulty = difficulty.unwrap_or(cfg.difficulty);
    let seats = match vs {
        Vs::Human => [SeatKind::Human, SeatKind::Computer(difficulty)],
        Vs::Computer => [SeatKind::Computer(difficulty); 2],
    };

    if vs == Vs::Computer && hands.is_none() {
        ui::display_warning(err, "no --hands limit; playing until a stack is busted")?;
    }

    let mut engine = Engine::with_config(cfg.engine_config(seed, seats));
    let strategies = seat_strategies(seats);
    let mut rng = strategy_rng(&engine);

    writeln!(
        out,
        "play: vs={} difficulty={} seed={}",
        vs.as_str(),
        difficulty,
        engine.seed()
    )?;

    let mut played = 0u32;
    loop {
        writeln!(
            out,
            "\nHand {} (dealer {}, blinds {}/{})",
            engine.hands_played(),
            engine.dealer(),
            cfg.small_blind,
            cfg.big_blind
        )?;
        write_stacks(out, &engine)?;
        if vs == Vs::Human {
            write_hole(out, &engine, Seat::Player1, "Your cards")?;
        }

        while !engine.has_ended() {
            let seat = engine.player_turn();
            let events = match &strategies[seat_index(seat)] {
                Some(strategy) => play_computer_turn(&mut engine, seat, strategy.as_ref(), &mut rng)?,
                None => {
                    ui::prompt(out, engine.snapshot(seat).amount_to_call)?;
                    let Some(line) = read_stdin_line(stdin) else {
                        writeln!(out)?;
                        return Err(CliError::Interrupted(format!(
                            "input closed during hand {}",
                            engine.hands_played()
                        )));
                    };
                    match parse_move(&line) {
                        ParseResult::Move(mv) => match engine.make_move(seat, mv) {
                            Ok(events) => events,
                            Err(e) => {
                                ui::write_error(err, &e.to_string())?;
                                continue;
                            }
                        },
                        ParseResult::Quit => {
                            writeln!(out, "Quit. Hands played: {}", played)?;
                            return Ok(());
                        }
                        ParseResult::Invalid(msg) => {
                            ui::write_error(err, &msg)?;
                            continue;
                        }
                    }
                }
            };
            write_events(out, &engine, &events)?;
        }

        played += 1;
        writeln!(out, "{}", format_outcome(&engine))?;
        write_stacks(out, &engine)?;
        info!("hand {} done: {}", engine.hands_played(), format_outcome(&engine));

        if engine.is_busted() {
            let broke = if engine.player(Seat::Player1).chips() == 0 {
                Seat::Player1
            } else {
                Seat::Player2
            };
            writeln!(out, "{} is out of chips.", broke)?;
            break;
        }
        if hands.is_some_and(|n| played >= n) {
            break;
        }
        engine.new_game()?;
    }

    writeln!(out, "Hands played: {}", played)?;
    Ok(())
}

fn seat_index(seat: Seat) -> usize {
    match seat {
        Seat::Player1 => 0,
        Seat::Player2 => 1,
    }
}

fn write_stacks(out: &mut dyn Write, engine: &Engine) -> std::io::Result<()> {
    writeln!(
        out,
        "Stacks: Player 1 {}, Player 2 {}",
        engine.player(Seat::Player1).chips(),
        engine.player(Seat::Player2).chips()
    )
}

fn write_hole(out: &mut dyn Write, engine: &Engine, seat: Seat, label: &str) -> std::io::Result<()> {
    match engine.player(seat).hole_cards() {
        Some([a, b]) => writeln!(out, "{}: {} {}", label, format_card(&a), format_card(&b)),
        None => Ok(()),
    }
}

fn write_events(out: &mut dyn Write, engine: &Engine, events: &[GameEvent]) -> std::io::Result<()> {
    for ev in events {
        match *ev {
            GameEvent::Move { seat, mv } => {
                writeln!(out, "{}: {}  (pot {})", seat, format_move(&mv), engine.pot())?
            }
            GameEvent::StateTransition { to, .. } => match to {
                EngineState::Flop | EngineState::Turn | EngineState::River => {
                    writeln!(out, "{}: {}", to, format_board(engine.community_cards()))?
                }
                EngineState::Showdown => {
                    writeln!(out, "Showdown: {}", format_board(engine.community_cards()))?;
                    write_hole(out, engine, Seat::Player1, "Player 1")?;
                    write_hole(out, engine, Seat::Player2, "Player 2")?;
                }
                EngineState::PreFlop | EngineState::Folded => {}
            },
            GameEvent::HandStarted { .. } | GameEvent::HandEnded { .. } => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(vs: Vs, hands: Option<u32>, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            vs,
            Some(Difficulty::Easy),
            hands,
            Some(42),
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_zero_hands_is_invalid() {
        let (result, _, _) = play(Vs::Computer, Some(0), "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_computer_session_plays_requested_hands() {
        let (result, out, _) = play(Vs::Computer, Some(3), "");
        assert!(result.is_ok());
        assert!(out.contains("play: vs=computer difficulty=easy seed=42"));
        assert!(out.contains("Hand 1 (dealer Player 1"));
        assert!(out.contains("Hands played: 3") || out.contains("out of chips"));
    }

    #[test]
    fn test_human_fold_ends_hand() {
        // Player 1 holds the button for hand 1, so the computer acts first.
        let (result, out, _) = play(Vs::Human, Some(1), "f\n");
        assert!(result.is_ok(), "{:?}", result);
        assert!(out.contains("Your cards:"));
        assert!(out.contains("Player 1: fold"));
        assert!(out.contains("Player 2 wins"));
        assert!(out.contains("Hands played: 1"));
    }

    #[test]
    fn test_human_bad_input_reprompts() {
        let (result, out, err) = play(Vs::Human, Some(1), "check\nr 5000\nfold\n");
        assert!(result.is_ok(), "{:?}", result);
        assert!(err.contains("Unrecognized action 'check'"));
        assert!(err.contains("Raise higher than player's chips"));
        assert!(out.contains("Player 1: fold"));
    }

    #[test]
    fn test_human_quit() {
        let (result, out, _) = play(Vs::Human, None, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Quit. Hands played: 0"));
    }

    #[test]
    fn test_eof_mid_hand_interrupts() {
        let (result, _, _) = play(Vs::Human, Some(1), "");
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }
}
