use thiserror::Error;

use crate::engine::EngineState;
use crate::player::{MoveKind, Seat};

/// Rule violations returned by the engine's action entry points. A rejected
/// action leaves every field of the game untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Wrong player's turn: {actual} acted but it is {expected}'s turn")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("Raise must be at least 2x the other player's bet: raised to {amount}, minimum {minimum}")]
    InvalidRaiseAmount { amount: u32, minimum: u32 },
    #[error("Raise higher than player's chips: needs {needed}, has {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("{action} called in {state} state")]
    IllegalActionInState { action: MoveKind, state: EngineState },
}
