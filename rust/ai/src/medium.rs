//! Rule-based policy driven by a 0-100 hand-strength score.
//!
//! Pre-flop the score comes from a small table over pairs, suited cards and
//! high cards; post-flop it comes from the category of the best hand so far.
//! [`decide_with_strength`] maps any such score to a move and is shared with
//! the hard policy.

use holdem_engine::cards::{Card, Rank};
use holdem_engine::engine::{EngineState, GameSnapshot};
use holdem_engine::hand::{evaluate_hand, Category};
use holdem_engine::player::Move;
use log::debug;
use rand::{Rng, RngCore};

use crate::ComputerStrategy;

pub const HIGH_HAND_THRESHOLD: u32 = 80;
pub const MEDIUM_HAND_THRESHOLD: u32 = 60;
pub const WEAK_HAND_THRESHOLD: u32 = 40;

const STRONG_PAIR_THRESHOLD: u8 = 10;
const STRONG_SUITED_THRESHOLD: u8 = 10;
const MEDIUM_PAIR_THRESHOLD: u8 = 7;
const SUITED_HIGH_CARD_THRESHOLD: u8 = 9;

// percentages
const FOLD_CHANCE_LOW_HAND_LOW_BET: u32 = 50;
const CALL_CHANCE_WEAKER_HAND: u32 = 60;
const FOLD_CHANCE_LOW_HAND: u32 = 30;

/// Bets at or below this never scare off a weak hand.
const SMALL_BET: u32 = 60;
/// Assumed bet when nobody has bet yet this street.
const DEFAULT_OPENING_BET: u32 = 20;
const MINIMUM_BET_MULTIPLIER: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct MediumStrategy;

impl ComputerStrategy for MediumStrategy {
    fn decide(&self, snapshot: &GameSnapshot, rng: &mut dyn RngCore) -> Move {
        let strength = hand_strength(snapshot);
        let mv = decide_with_strength(strength, snapshot, rng);
        debug!("medium: strength {strength} -> {mv}");
        mv
    }

    fn name(&self) -> &str {
        "Medium"
    }
}

/// Scores the two hole cards before any board is dealt.
pub fn preflop_strength(hole: [Card; 2]) -> u32 {
    let (a, b) = (hole[0].rank.value(), hole[1].rank.value());
    let high = a.max(b);

    if a == b {
        if high >= STRONG_PAIR_THRESHOLD {
            return 90;
        } else if high >= MEDIUM_PAIR_THRESHOLD {
            return 70;
        }
    }

    if hole[0].suit == hole[1].suit {
        if a.abs_diff(b) == 1 && high >= STRONG_SUITED_THRESHOLD {
            return 90;
        } else if high >= SUITED_HIGH_CARD_THRESHOLD {
            return 80;
        }
    }

    if high > Rank::Jack.value() {
        40
    } else {
        30
    }
}

pub fn category_score(category: Category, royal: bool) -> u32 {
    match category {
        Category::HighCard => 15,
        Category::OnePair => 30,
        Category::TwoPair => 40,
        Category::ThreeOfAKind => 50,
        Category::Straight => 65,
        Category::Flush => 70,
        Category::FullHouse => 80,
        Category::FourOfAKind => 90,
        Category::StraightFlush if royal => 100,
        Category::StraightFlush => 95,
    }
}

/// Scores the best hand over hole cards plus 3 to 5 board cards, with a
/// small bonus for the higher hole card.
pub fn postflop_strength(hole: [Card; 2], community: &[Card]) -> u32 {
    let best = evaluate_hand(&hole, community);
    let score = category_score(best.evaluation.category, best.evaluation.is_royal());
    let high = u32::from(hole[0].rank.value().max(hole[1].rank.value()));
    (score + high / 10).min(100)
}

/// Strength for the snapshot's stage; 0 once the hand is over or before
/// hole cards are dealt.
pub fn hand_strength(snapshot: &GameSnapshot) -> u32 {
    let Some(hole) = snapshot.hole_cards else {
        return 0;
    };
    match snapshot.stage {
        EngineState::PreFlop => preflop_strength(hole),
        EngineState::Flop | EngineState::Turn | EngineState::River => {
            postflop_strength(hole, &snapshot.community_cards)
        }
        EngineState::Showdown | EngineState::Folded => 0,
    }
}

/// Slice of the pot added on top of the minimum raise, by strength tier,
/// rounded down to a multiple of 10.
pub fn pot_portion(strength: u32, pot: u32) -> u32 {
    let portion = if strength >= HIGH_HAND_THRESHOLD {
        pot / 2
    } else if strength >= MEDIUM_HAND_THRESHOLD {
        (u64::from(pot) * 3 / 10) as u32
    } else if strength >= WEAK_HAND_THRESHOLD {
        pot / 5
    } else {
        0
    };
    portion / 10 * 10
}

fn percent(rng: &mut dyn RngCore, chance: u32) -> bool {
    rng.random_range(0..100) < chance
}

/// Maps a 0-100 strength to a move.
///
/// A stack that cannot cover twice the bet takes the low-chip branch:
/// medium-or-better calls, anything weaker folds half the time. Otherwise
/// medium-or-better raises, weak hands mostly call and sometimes raise, and
/// worse hands call small bets but may fold to large ones.
///
/// Raise targets never exceed the seat's all-in total, so every move this
/// returns passes the engine's betting rules.
pub fn decide_with_strength(strength: u32, snapshot: &GameSnapshot, rng: &mut dyn RngCore) -> Move {
    let bet = if snapshot.current_bet == 0 {
        DEFAULT_OPENING_BET
    } else {
        snapshot.current_bet
    };
    let all_in = snapshot.own_bet + snapshot.chips;
    let min_raise = bet.saturating_mul(MINIMUM_BET_MULTIPLIER);
    let raise_to = min_raise
        .saturating_add(pot_portion(strength, snapshot.pot))
        .min(all_in);

    if snapshot.chips < min_raise {
        if strength >= MEDIUM_HAND_THRESHOLD || !percent(rng, FOLD_CHANCE_LOW_HAND_LOW_BET) {
            return Move::Call;
        }
        return Move::Fold;
    }

    if strength >= MEDIUM_HAND_THRESHOLD {
        return Move::Raise { amount: raise_to };
    }
    if strength >= WEAK_HAND_THRESHOLD {
        if percent(rng, CALL_CHANCE_WEAKER_HAND) {
            return Move::Call;
        }
        return Move::Raise { amount: raise_to };
    }

    if snapshot.current_bet <= SMALL_BET || !percent(rng, FOLD_CHANCE_LOW_HAND) {
        Move::Call
    } else {
        Move::Fold
    }
}
