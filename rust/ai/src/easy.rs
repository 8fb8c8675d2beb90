use holdem_engine::engine::GameSnapshot;
use holdem_engine::player::Move;
use rand::{Rng, RngCore};

use crate::ComputerStrategy;

/// Smallest raise total Easy will make when nobody has bet.
pub const MIN_RAISE: u32 = 20;

/// Calls or min-raises with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyStrategy;

impl ComputerStrategy for EasyStrategy {
    fn decide(&self, snapshot: &GameSnapshot, rng: &mut dyn RngCore) -> Move {
        if rng.random_bool(0.5) {
            return Move::Call;
        }
        let target = snapshot.current_bet.saturating_mul(2).max(MIN_RAISE);
        if target.saturating_sub(snapshot.own_bet) > snapshot.chips {
            return Move::Call;
        }
        Move::Raise { amount: target }
    }

    fn name(&self) -> &str {
        "Easy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::engine::EngineState;
    use holdem_engine::player::Seat;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn snap(current_bet: u32, chips: u32) -> GameSnapshot {
        GameSnapshot {
            seat: Seat::Player2,
            hole_cards: None,
            community_cards: vec![],
            stage: EngineState::PreFlop,
            current_bet,
            own_bet: 0,
            amount_to_call: current_bet.min(chips),
            pot: 15,
            chips,
        }
    }

    #[test]
    fn only_calls_or_min_raises() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut raises = 0;
        for _ in 0..200 {
            match EasyStrategy.decide(&snap(30, 1000), &mut rng) {
                Move::Call => {}
                Move::Raise { amount } => {
                    assert_eq!(amount, 60);
                    raises += 1;
                }
                Move::Fold => panic!("easy never folds"),
            }
        }
        assert!(raises > 50 && raises < 150, "raises={raises}");
    }

    #[test]
    fn unbet_pot_raises_to_floor() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let moves: Vec<Move> = (0..50).map(|_| EasyStrategy.decide(&snap(0, 1000), &mut rng)).collect();
        assert!(moves.contains(&Move::Raise { amount: MIN_RAISE }));
    }

    #[test]
    fn short_stack_falls_back_to_call() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(EasyStrategy.decide(&snap(40, 50), &mut rng), Move::Call);
        }
    }

    #[test]
    fn huge_bet_does_not_overflow() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        for _ in 0..50 {
            assert_eq!(EasyStrategy.decide(&snap(3_000_000_000, 1_000), &mut rng), Move::Call);
        }
    }
}
