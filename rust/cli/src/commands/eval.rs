//! Eval command: best five-card hand from hole and board cards.

use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::{ensure_distinct, parse_card_list};
use holdem_engine::hand::evaluate_hand;
use std::io::Write;

/// Parses `hole` (2 cards) and `board` (3 to 5 cards), rejects duplicates,
/// and prints the best hand with its category.
pub fn handle_eval_command(hole: &str, board: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hole = parse_card_list(hole, "hole", 2, 2).map_err(CliError::InvalidInput)?;
    let board = parse_card_list(board, "board", 3, 5).map_err(CliError::InvalidInput)?;
    ensure_distinct(&[&hole, &board]).map_err(CliError::InvalidInput)?;

    let best = evaluate_hand(&hole, &board);
    writeln!(out, "Best hand: {}", format_board(&best.cards))?;
    writeln!(out, "Category: {}", best.evaluation.description())?;
    Ok(())
}
