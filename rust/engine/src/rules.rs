use crate::errors::GameError;
use crate::player::Move;

/// A move that passed validation, carrying the chip amounts to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedMove {
    Fold,
    /// Chips moved into the pot (already clamped for an all-in call).
    Call(u32),
    /// New street total and the chips it adds on top of the current bet.
    Raise { to: u32, added: u32 },
}

/// Validates a move against the acting seat's stack and both street bets.
///
/// # Arguments
///
/// * `chips` - Acting player's remaining stack
/// * `own_bet` - What the acting player already put in this street
/// * `opp_bet` - The opponent's street bet
/// * `mv` - The move the player wishes to make
///
/// # Returns
///
/// The amounts to apply. A call never fails: facing more than the stack it
/// becomes an all-in for the whole stack.
///
/// # Errors
///
/// - [`GameError::InvalidRaiseAmount`] - the new total is below twice the opponent's bet
/// - [`GameError::InsufficientChips`] - the chips added exceed the stack
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_move, ValidatedMove};
/// use holdem_engine::player::Move;
///
/// // Short stack calls all-in
/// let v = validate_move(30, 0, 50, &Move::Call);
/// assert_eq!(v, Ok(ValidatedMove::Call(30)));
///
/// // Raise to 100 after posting 20 costs 80
/// let v = validate_move(1000, 20, 50, &Move::Raise { amount: 100 });
/// assert_eq!(v, Ok(ValidatedMove::Raise { to: 100, added: 80 }));
/// ```
///
/// ```
/// use holdem_engine::rules::validate_move;
/// use holdem_engine::player::Move;
/// use holdem_engine::errors::GameError;
///
/// let v = validate_move(1000, 0, 50, &Move::Raise { amount: 90 });
/// assert!(matches!(v, Err(GameError::InvalidRaiseAmount { minimum: 100, .. })));
///
/// let v = validate_move(60, 0, 10, &Move::Raise { amount: 100 });
/// assert!(matches!(v, Err(GameError::InsufficientChips { needed: 100, available: 60 })));
/// ```
pub fn validate_move(
    chips: u32,
    own_bet: u32,
    opp_bet: u32,
    mv: &Move,
) -> Result<ValidatedMove, GameError> {
    match *mv {
        Move::Fold => Ok(ValidatedMove::Fold),
        Move::Call => {
            let to_call = opp_bet.saturating_sub(own_bet);
            Ok(ValidatedMove::Call(to_call.min(chips)))
        }
        Move::Raise { amount } => {
            let minimum = opp_bet.saturating_mul(2);
            if amount < minimum {
                return Err(GameError::InvalidRaiseAmount { amount, minimum });
            }
            let added = amount.saturating_sub(own_bet);
            if added > chips {
                return Err(GameError::InsufficientChips {
                    needed: added,
                    available: chips,
                });
            }
            Ok(ValidatedMove::Raise { to: amount, added })
        }
    }
}
