use serde::{Deserialize, Serialize};

use crate::engine::EngineState;
use crate::hand::Winner;
use crate::player::{Move, Seat};

/// Notification produced by an engine action. Events are plain values
/// handed back to the caller; they hold no reference into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new hand was dealt with `dealer` on the button.
    HandStarted { dealer: Seat },
    /// `seat` made an accepted move.
    Move { seat: Seat, mv: Move },
    /// A street completed or the hand ended early.
    StateTransition { from: EngineState, to: EngineState },
    /// The pot was awarded.
    HandEnded { winner: Winner, pot: u32 },
}
