use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card stack. Dealing pops from the end of the underlying vector, so
/// the last element is the top of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Creates an ordered deck whose shuffles are driven by a ChaCha20 stream
    /// seeded with `seed`. The cards keep construction order until
    /// [`Deck::shuffle`] is called.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Builds a deck holding exactly `cards`, top of the stack last.
    ///
    /// Used to stack a deck for a known deal. Later shuffles restore the full
    /// 52 cards and draw from a stream seeded with `seed`.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Restores all 52 cards and applies a uniform random permutation.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Discards the top card face down. `None` when the deck is empty.
    pub fn burn_card(&mut self) -> Option<Card> {
        self.deal_card()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Cards still in the stack, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
