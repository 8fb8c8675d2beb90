use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories, weakest first. Royal flush is a straight flush to the
/// Ace and only differs in its display name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Category plus the ordered rank values that break ties inside it.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    // rank values, most significant first
    pub tiebreakers: Vec<u8>,
}

impl HandEvaluation {
    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush
            && self.tiebreakers.first() == Some(&Rank::Ace.value())
    }

    pub fn description(&self) -> &'static str {
        if self.is_royal() {
            "Royal Flush"
        } else {
            self.category.name()
        }
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tiebreakers
                .iter()
                .zip(other.tiebreakers.iter())
                .map(|(a, b)| a.cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// The strongest five-card subset and its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    pub cards: [Card; 5],
    pub evaluation: HandEvaluation,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    Player1,
    Player2,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player1 => write!(f, "Player 1"),
            Winner::Player2 => write!(f, "Player 2"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}

/// Outcome of comparing both seats at showdown. `hand` is the winning five
/// cards and is absent on a tie; `evaluation` is the winning (or shared)
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    pub winner: Winner,
    pub hand: Option<[Card; 5]>,
    pub evaluation: HandEvaluation,
}

/// Ranks of a five-card subset, sorted descending, with the frequency table
/// ordered by (count desc, rank desc).
struct Shape {
    cards: [Card; 5],
    ranks: [u8; 5],
    freq: Vec<(u8, u8)>,
}

impl Shape {
    fn new(mut cards: [Card; 5]) -> Self {
        cards.sort_by(|a, b| b.rank.cmp(&a.rank));
        let ranks = cards.map(|c| c.rank.value());
        let mut freq: Vec<(u8, u8)> = Vec::with_capacity(5);
        for &r in &ranks {
            match freq.iter_mut().find(|(_, rank)| *rank == r) {
                Some((count, _)) => *count += 1,
                None => freq.push((1, r)),
            }
        }
        freq.sort_by(|a, b| b.cmp(a));
        Self { cards, ranks, freq }
    }

    fn counts(&self) -> Vec<u8> {
        self.freq.iter().map(|&(c, _)| c).collect()
    }

    /// Grouped ranks: quads/trips/pairs first, then kickers high to low.
    fn grouped(&self) -> Vec<u8> {
        self.freq.iter().map(|&(_, r)| r).collect()
    }

    fn is_flush(&self) -> bool {
        self.cards.iter().all(|c| c.suit == self.cards[0].suit)
    }

    /// High card of a straight; 5 for the wheel.
    fn straight_high(&self) -> Option<u8> {
        if self.freq.len() != 5 {
            return None;
        }
        if self.ranks[0] - self.ranks[4] == 4 {
            return Some(self.ranks[0]);
        }
        if self.ranks == [14, 5, 4, 3, 2] {
            return Some(5);
        }
        None
    }
}

type Rule = fn(&Shape) -> Option<HandEvaluation>;

fn eval(category: Category, tiebreakers: Vec<u8>) -> Option<HandEvaluation> {
    Some(HandEvaluation {
        category,
        tiebreakers,
    })
}

fn straight_flush(s: &Shape) -> Option<HandEvaluation> {
    if !s.is_flush() {
        return None;
    }
    eval(Category::StraightFlush, vec![s.straight_high()?])
}

fn four_of_a_kind(s: &Shape) -> Option<HandEvaluation> {
    if s.counts() != [4, 1] {
        return None;
    }
    eval(Category::FourOfAKind, s.grouped())
}

fn full_house(s: &Shape) -> Option<HandEvaluation> {
    if s.counts() != [3, 2] {
        return None;
    }
    eval(Category::FullHouse, s.grouped())
}

fn flush(s: &Shape) -> Option<HandEvaluation> {
    if !s.is_flush() {
        return None;
    }
    eval(Category::Flush, s.ranks.to_vec())
}

fn straight(s: &Shape) -> Option<HandEvaluation> {
    eval(Category::Straight, vec![s.straight_high()?])
}

fn three_of_a_kind(s: &Shape) -> Option<HandEvaluation> {
    if s.counts() != [3, 1, 1] {
        return None;
    }
    eval(Category::ThreeOfAKind, s.grouped())
}

fn two_pair(s: &Shape) -> Option<HandEvaluation> {
    if s.counts() != [2, 2, 1] {
        return None;
    }
    eval(Category::TwoPair, s.grouped())
}

fn one_pair(s: &Shape) -> Option<HandEvaluation> {
    if s.counts() != [2, 1, 1, 1] {
        return None;
    }
    eval(Category::OnePair, s.grouped())
}

fn high_card(s: &Shape) -> Option<HandEvaluation> {
    eval(Category::HighCard, s.ranks.to_vec())
}

// Strict precedence, strongest first. `high_card` always matches.
const RULES: [Rule; 9] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
    high_card,
];

/// Evaluates exactly five cards.
pub fn evaluate_five(cards: [Card; 5]) -> HandEvaluation {
    let shape = Shape::new(cards);
    RULES
        .iter()
        .find_map(|rule| rule(&shape))
        .unwrap_or_else(|| unreachable!("high card matches every hand"))
}

/// Finds the best five-card hand from 2 hole cards and 3 to 5 community
/// cards by scoring every five-card subset of the pool.
///
/// # Panics
///
/// Panics when `hole` does not hold exactly 2 cards or `community` holds
/// fewer than 3 or more than 5. Both indicate a mis-sequenced caller.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate_hand, Category};
///
/// let hole = parse_cards("Ah Kh").unwrap();
/// let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
/// let best = evaluate_hand(&hole, &board);
/// assert_eq!(best.evaluation.category, Category::StraightFlush);
/// assert_eq!(best.evaluation.description(), "Royal Flush");
/// ```
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> BestHand {
    assert_eq!(hole.len(), 2, "evaluator needs exactly 2 hole cards, got {}", hole.len());
    assert!(
        (3..=5).contains(&community.len()),
        "evaluator needs 3 to 5 community cards, got {}",
        community.len()
    );
    let mut best: Option<BestHand> = None;
    for combo in hole.iter().chain(community.iter()).copied().combinations(5) {
        let cards = [combo[0], combo[1], combo[2], combo[3], combo[4]];
        let evaluation = evaluate_five(cards);
        let better = match &best {
            Some(b) => evaluation > b.evaluation,
            None => true,
        };
        if better {
            let mut sorted = cards;
            sorted.sort_by(|a, b| b.rank.cmp(&a.rank));
            best = Some(BestHand {
                cards: sorted,
                evaluation,
            });
        }
    }
    best.unwrap_or_else(|| unreachable!("at least one five-card subset exists"))
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.cmp(b)
}

/// Evaluates both seats over the shared board and names the winner.
///
/// # Panics
///
/// Panics unless the board holds exactly 5 cards and each seat holds 2.
pub fn determine_winner(p1_hole: &[Card], p2_hole: &[Card], community: &[Card]) -> ShowdownResult {
    assert_eq!(
        community.len(),
        5,
        "showdown needs all 5 community cards, got {}",
        community.len()
    );
    let p1 = evaluate_hand(p1_hole, community);
    let p2 = evaluate_hand(p2_hole, community);
    match compare_hands(&p1.evaluation, &p2.evaluation) {
        Ordering::Greater => ShowdownResult {
            winner: Winner::Player1,
            hand: Some(p1.cards),
            evaluation: p1.evaluation,
        },
        Ordering::Less => ShowdownResult {
            winner: Winner::Player2,
            hand: Some(p2.cards),
            evaluation: p2.evaluation,
        },
        Ordering::Equal => ShowdownResult {
            winner: Winner::Tie,
            hand: None,
            evaluation: p1.evaluation,
        },
    }
}
