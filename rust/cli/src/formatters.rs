//! Card, board, move, and outcome formatters for terminal display.
//!
//! Suits print as Unicode symbols where the terminal is known to render
//! them and as the letters `h d c s` otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::engine::{Engine, EngineState};
use holdem_engine::hand::Winner;
use holdem_engine::player::Move;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

/// Format a Card as a string combining rank and suit, like "A♠" (Unicode)
/// or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Format a board (list of cards) as a string in bracket notation.
///
/// # Example
///
/// ```rust
/// use holdem_engine::cards::parse_cards;
/// # use holdem_cli::formatters::format_board;
///
/// let flop = parse_cards("As Kh Qd").unwrap();
/// let formatted = format_board(&flop);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// assert_eq!(format_board(&[]), "[]");
/// ```
pub fn format_board(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// Format a move the way the move prompt accepts it back.
///
/// ```rust
/// use holdem_engine::player::Move;
/// # use holdem_cli::formatters::format_move;
///
/// assert_eq!(format_move(&Move::Fold), "fold");
/// assert_eq!(format_move(&Move::Raise { amount: 40 }), "raise 40");
/// ```
pub fn format_move(mv: &Move) -> String {
    match mv {
        Move::Fold => "fold".to_string(),
        Move::Call => "call".to_string(),
        Move::Raise { amount } => format!("raise {}", amount),
    }
}

/// One-line summary of a finished hand, e.g. `Player 2 wins 40 (fold)` or
/// `Split pot 200 (Two Pair)`. Empty while the hand is still running.
pub fn format_outcome(engine: &Engine) -> String {
    let pot = engine.pot();
    match (engine.state(), engine.winner()) {
        (EngineState::Folded, Some(w)) => format!("{} wins {} (fold)", w, pot),
        (EngineState::Showdown, Some(Winner::Tie)) => format!(
            "Split pot {} ({})",
            pot,
            engine.winning_hand_description().unwrap_or_default()
        ),
        (EngineState::Showdown, Some(w)) => format!(
            "{} wins {} with {}",
            w,
            pot,
            engine.winning_hand_description().unwrap_or_default()
        ),
        _ => String::new(),
    }
}
