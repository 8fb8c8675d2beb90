use holdem_engine::engine::GameSnapshot;
use holdem_engine::player::Move;
use log::debug;
use rand::RngCore;

use crate::equity::{EquityEstimator, MonteCarloEquity};
use crate::medium::decide_with_strength;
use crate::ComputerStrategy;

/// Plays the medium decision table on estimated equity instead of a static
/// score: 0.8 equity acts like strength 80.
pub struct HardStrategy {
    estimator: Box<dyn EquityEstimator>,
}

impl HardStrategy {
    pub fn new() -> Self {
        Self::with_estimator(Box::new(MonteCarloEquity::default()))
    }

    pub fn with_estimator(estimator: Box<dyn EquityEstimator>) -> Self {
        Self { estimator }
    }

    /// Equity scaled to 0-100; 0 when the seat holds no cards or the hand
    /// is over.
    pub fn strength(&self, snapshot: &GameSnapshot, rng: &mut dyn RngCore) -> u32 {
        match snapshot.hole_cards {
            Some(hole) if !snapshot.stage.is_terminal() => {
                let equity = self.estimator.equity(hole, &snapshot.community_cards, rng);
                (equity.clamp(0.0, 1.0) * 100.0).round() as u32
            }
            _ => 0,
        }
    }
}

impl Default for HardStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for HardStrategy {
    fn decide(&self, snapshot: &GameSnapshot, rng: &mut dyn RngCore) -> Move {
        let strength = self.strength(snapshot, rng);
        let mv = decide_with_strength(strength, snapshot, rng);
        debug!("hard: equity {strength}% -> {mv}");
        mv
    }

    fn name(&self) -> &str {
        "Hard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::{parse_cards, Card};
    use holdem_engine::engine::EngineState;
    use holdem_engine::player::Seat;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    struct Fixed(f64);

    impl EquityEstimator for Fixed {
        fn equity(&self, _hole: [Card; 2], _board: &[Card], _rng: &mut dyn RngCore) -> f64 {
            self.0
        }
    }

    fn snap(stage: EngineState) -> GameSnapshot {
        let v = parse_cards("Ah Ad").unwrap();
        GameSnapshot {
            seat: Seat::Player2,
            hole_cards: Some([v[0], v[1]]),
            community_cards: vec![],
            stage,
            current_bet: 30,
            own_bet: 0,
            amount_to_call: 30,
            pot: 100,
            chips: 1000,
        }
    }

    #[test]
    fn equity_drives_medium_table() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let hard = HardStrategy::with_estimator(Box::new(Fixed(0.85)));
        assert_eq!(hard.strength(&snap(EngineState::PreFlop), &mut rng), 85);
        assert_eq!(
            hard.decide(&snap(EngineState::PreFlop), &mut rng),
            Move::Raise { amount: 110 }
        );
    }

    #[test]
    fn low_equity_calls_small_bet() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let hard = HardStrategy::with_estimator(Box::new(Fixed(0.1)));
        assert_eq!(hard.decide(&snap(EngineState::Flop), &mut rng), Move::Call);
    }

    #[test]
    fn terminal_stage_scores_zero() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let hard = HardStrategy::with_estimator(Box::new(Fixed(0.9)));
        assert_eq!(hard.strength(&snap(EngineState::Showdown), &mut rng), 0);
    }
}
