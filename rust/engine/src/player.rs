use std::fmt;
use std::str::FromStr;

use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// One of the two seats at a heads-up table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player1,
    Player2,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::Player1 => Seat::Player2,
            Seat::Player2 => Seat::Player1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::Player1 => 0,
            Seat::Player2 => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => write!(f, "Player 1"),
            Seat::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Skill tier of a computer-controlled seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}

/// Who chooses the moves for a seat. The computer variant carries only the
/// difficulty tag; the driver resolves it into a strategy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatKind {
    Human,
    Computer(Difficulty),
}

/// A betting decision submitted through [`crate::engine::Engine::make_move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /// Give up the hand; the opponent takes the pot.
    Fold,
    /// Match the opponent's street bet (all-in when short).
    Call,
    /// Raise the street bet to a new total of `amount`.
    Raise { amount: u32 },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Fold => write!(f, "fold"),
            Move::Call => write!(f, "call"),
            Move::Raise { amount } => write!(f, "raise to {amount}"),
        }
    }
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Fold => MoveKind::Fold,
            Move::Call => MoveKind::Call,
            Move::Raise { .. } => MoveKind::Raise,
        }
    }
}

/// A [`Move`] without its amount, for reporting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveKind::Fold => "Fold",
            MoveKind::Call => "Call",
            MoveKind::Raise => "Raise",
        };
        f.write_str(s)
    }
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// Per-seat record reused across hands: chips, the street bet, the acted
/// flag and the two hole cards.
#[derive(Debug, Clone)]
pub struct Player {
    chips: u32,
    current_bet: u32,
    has_acted: bool,
    hole: [Option<Card>; 2],
    kind: SeatKind,
}

impl Player {
    pub fn new(chips: u32, kind: SeatKind) -> Self {
        Self {
            chips,
            current_bet: 0,
            has_acted: false,
            hole: [None, None],
            kind,
        }
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn kind(&self) -> SeatKind {
        self.kind
    }

    /// Both hole cards, or `None` between hands.
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub(crate) fn set_kind(&mut self, kind: SeatKind) {
        self.kind = kind;
    }

    pub(crate) fn give_card(&mut self, c: Card) -> Result<(), String> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err("Hole cards already full".to_string())
        }
    }

    pub(crate) fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Moves `amount` out of the stack. Callers validate first; the amount is
    /// clamped so the stack never underflows.
    pub(crate) fn take_chips(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.chips);
        self.chips -= taken;
        taken
    }

    pub(crate) fn set_current_bet(&mut self, bet: u32) {
        self.current_bet = bet;
    }

    pub(crate) fn set_has_acted(&mut self, acted: bool) {
        self.has_acted = acted;
    }

    /// Street reset: bets do not carry over.
    pub(crate) fn clear_street(&mut self) {
        self.current_bet = 0;
        self.has_acted = false;
    }
}
