//! Input parsing and validation for interactive commands.
//!
//! - Move parsing for the `play` prompt
//! - Card-list parsing for `eval`, with duplicate detection
//!
//! Parsers return structured results so callers can re-prompt on bad input
//! instead of exiting.

use std::collections::HashSet;

use holdem_engine::cards::{Card, parse_cards};
use holdem_engine::player::Move;

/// Outcome of parsing one line typed at the move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A move to submit to the engine
    Move(Move),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a move or the quit command.
///
/// Accepts (case-insensitive):
/// - "f" or "fold"
/// - "c" or "call"
/// - "r N" or "raise N", N being the new street total
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_move, ParseResult};
/// use holdem_engine::player::Move;
///
/// assert_eq!(parse_move("fold"), ParseResult::Move(Move::Fold));
/// assert_eq!(parse_move("r 40"), ParseResult::Move(Move::Raise { amount: 40 }));
/// assert_eq!(parse_move("q"), ParseResult::Quit);
///
/// match parse_move("check") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "f" | "fold" => ParseResult::Move(Move::Fold),
        "c" | "call" => ParseResult::Move(Move::Call),
        "r" | "raise" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 40')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Move(Move::Raise { amount }),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, call, raise <amount>, q",
            other
        )),
    }
}

/// Parse a whitespace- or comma-separated card list, requiring between
/// `min` and `max` cards.
pub fn parse_card_list(input: &str, what: &str, min: usize, max: usize) -> Result<Vec<Card>, String> {
    let cards = parse_cards(input).map_err(|e| format!("{}: {}", what, e))?;
    if cards.len() < min || cards.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        return Err(format!(
            "{} needs {} cards, got {}",
            what,
            expected,
            cards.len()
        ));
    }
    Ok(cards)
}

/// Reject a card that appears more than once across `groups`.
pub fn ensure_distinct(groups: &[&[Card]]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for card in groups.iter().flat_map(|g| g.iter()) {
        if !seen.insert(*card) {
            return Err(format!("duplicate card {}", card));
        }
    }
    Ok(())
}
