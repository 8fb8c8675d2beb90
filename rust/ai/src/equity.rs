use holdem_engine::cards::{full_deck, Card};
use holdem_engine::hand::{determine_winner, Winner};
use rand::seq::SliceRandom;
use rand::RngCore;

/// Estimates the probability that a hand wins at showdown against one
/// unknown opponent hand, counting a tie as half a win.
pub trait EquityEstimator: Send + Sync {
    /// Returns a value in `0.0..=1.0`.
    fn equity(&self, hole: [Card; 2], board: &[Card], rng: &mut dyn RngCore) -> f64;
}

/// Samples random opponent hands and board run-outs from the unseen cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloEquity {
    pub samples: u32,
}

impl Default for MonteCarloEquity {
    fn default() -> Self {
        Self { samples: 500 }
    }
}

impl EquityEstimator for MonteCarloEquity {
    fn equity(&self, hole: [Card; 2], board: &[Card], rng: &mut dyn RngCore) -> f64 {
        if self.samples == 0 {
            return 0.5;
        }
        let mut unseen: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !hole.contains(c) && !board.contains(c))
            .collect();
        let missing = 5usize.saturating_sub(board.len());
        let mut full_board = Vec::with_capacity(5);
        let mut score = 0.0;

        for _ in 0..self.samples {
            let (drawn, _) = unseen.partial_shuffle(&mut *rng, 2 + missing);
            let opp = [drawn[0], drawn[1]];
            full_board.clear();
            full_board.extend_from_slice(board);
            full_board.extend_from_slice(&drawn[2..]);
            score += match determine_winner(&hole, &opp, &full_board).winner {
                Winner::Player1 => 1.0,
                Winner::Tie => 0.5,
                Winner::Player2 => 0.0,
            };
        }
        score / f64::from(self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn hole(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn nuts_on_the_river_always_win() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
        let e = MonteCarloEquity { samples: 200 }.equity(hole("Ah Kh"), &board, &mut rng);
        assert_eq!(e, 1.0);
    }

    #[test]
    fn aces_beat_random_hand_preflop() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let aces = MonteCarloEquity { samples: 400 }.equity(hole("Ah Ad"), &[], &mut rng);
        let junk = MonteCarloEquity { samples: 400 }.equity(hole("7c 2d"), &[], &mut rng);
        assert!(aces > 0.75, "aces={aces}");
        assert!(junk < 0.45, "junk={junk}");
    }

    #[test]
    fn zero_samples_is_a_coin_flip() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let e = MonteCarloEquity { samples: 0 }.equity(hole("Ah Ad"), &[], &mut rng);
        assert_eq!(e, 0.5);
    }
}
