//! Deal command: one hand dealt and checked down, for inspecting a seed.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_outcome};
use holdem_engine::engine::Engine;
use holdem_engine::player::{Move, Seat, SeatKind};
use std::io::Write;

/// Deals one hand on the configured table and calls every street for both
/// seats, then prints hole cards, board, and the result.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// let code = holdem_cli::run(["holdem", "deal", "--seed", "42"], &mut out, &mut Vec::new());
/// assert_eq!(code, 0);
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Hole P1:"));
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let mut eng = Engine::with_config(cfg.engine_config(seed, [SeatKind::Human; 2]));
    let hole = [Seat::Player1, Seat::Player2].map(|s| eng.player(s).hole_cards());

    while !eng.has_ended() {
        let seat = eng.player_turn();
        eng.make_move(seat, Move::Call)?;
    }

    writeln!(out, "Seed: {}", eng.seed())?;
    for (label, cards) in ["Hole P1", "Hole P2"].iter().zip(hole) {
        if let Some([a, b]) = cards {
            writeln!(out, "{}: {} {}", label, format_card(&a), format_card(&b))?;
        }
    }
    writeln!(out, "Board: {}", format_board(eng.community_cards()))?;
    writeln!(out, "Result: {}", format_outcome(&eng))?;
    if let Some(best) = eng.winning_hand() {
        writeln!(out, "Winning hand: {}", format_board(&best))?;
    }
    Ok(())
}
