use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::GameEvent;
use crate::game::PokerGame;
use crate::hand::Winner;
use crate::player::{Move, Player, Seat, SeatKind, STARTING_STACK};

/// Stage of the current hand. `Showdown` and `Folded` are terminal: only
/// [`Engine::new_game`] leaves them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Folded,
}

impl EngineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, EngineState::Showdown | EngineState::Folded)
    }

    /// The street that follows a completed betting round.
    fn next(self) -> Option<EngineState> {
        match self {
            EngineState::PreFlop => Some(EngineState::Flop),
            EngineState::Flop => Some(EngineState::Turn),
            EngineState::Turn => Some(EngineState::River),
            EngineState::River => Some(EngineState::Showdown),
            EngineState::Showdown | EngineState::Folded => None,
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EngineState::PreFlop => "PreFlop",
            EngineState::Flop => "Flop",
            EngineState::Turn => "Turn",
            EngineState::River => "River",
            EngineState::Showdown => "Showdown",
            EngineState::Folded => "Folded",
        };
        f.write_str(s)
    }
}

/// Largest accepted `starting_stack`. Both stacks together must fit the
/// pot's `u32`.
pub const MAX_STARTING_STACK: u32 = u32::MAX / 2;

/// Table settings for one engine session.
///
/// `starting_stack` must be at most [`MAX_STARTING_STACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Seed for the shuffle stream; `None` draws one from the process RNG.
    pub seed: Option<u64>,
    pub seats: [SeatKind; 2],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: 5,
            big_blind: 10,
            seed: None,
            seats: [SeatKind::Human, SeatKind::Human],
        }
    }
}

/// Read-only view of the table from one seat, built fresh for each
/// decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub seat: Seat,
    pub hole_cards: Option<[Card; 2]>,
    pub community_cards: Vec<Card>,
    pub stage: EngineState,
    /// The opponent's bet on this street.
    pub current_bet: u32,
    /// This seat's bet on this street.
    pub own_bet: u32,
    pub amount_to_call: u32,
    pub pot: u32,
    pub chips: u32,
}

/// Heads-up Texas Hold'em state machine wrapping a [`PokerGame`].
///
/// Construction deals the first hand, so a fresh engine is already in
/// [`EngineState::PreFlop`]. Every action returns the events it produced.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{Engine, EngineState};
/// use holdem_engine::player::{Move, Seat};
///
/// let mut engine = Engine::new(Some(12345));
/// assert_eq!(engine.pot(), 15);
///
/// // Player1 holds the button for the first hand; Player2 acts first.
/// engine.make_move(Seat::Player2, Move::Call).unwrap();
/// engine.make_move(Seat::Player1, Move::Call).unwrap();
/// assert_eq!(engine.state(), EngineState::Flop);
/// assert_eq!(engine.community_cards().len(), 3);
///
/// let err = engine.make_move(Seat::Player2, Move::Raise { amount: 5000 });
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    game: PokerGame,
    state: EngineState,
    seed: u64,
    hands_played: u32,
}

impl Engine {
    /// Default table (1000 chips, blinds 5/10) with the given shuffle seed.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_config(EngineConfig {
            seed,
            ..EngineConfig::default()
        })
    }

    /// # Panics
    ///
    /// If `config.starting_stack` exceeds [`MAX_STARTING_STACK`].
    pub fn with_config(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::start(config, Deck::new_with_seed(seed), seed, true)
    }

    /// Plays the first hand from `deck` exactly as stacked (top of the
    /// stack is the last element). Later hands reshuffle from the deck's own
    /// stream.
    ///
    /// # Panics
    ///
    /// If `config.starting_stack` exceeds [`MAX_STARTING_STACK`].
    pub fn with_deck(config: EngineConfig, deck: Deck) -> Self {
        let seed = config.seed.unwrap_or(0);
        Self::start(config, deck, seed, false)
    }

    fn start(config: EngineConfig, deck: Deck, seed: u64, shuffle: bool) -> Self {
        assert!(
            config.starting_stack <= MAX_STARTING_STACK,
            "starting_stack {} exceeds {}",
            config.starting_stack,
            MAX_STARTING_STACK
        );
        let game = PokerGame::new(
            deck,
            config.starting_stack,
            config.small_blind,
            config.big_blind,
            config.seats,
        );
        let mut engine = Self {
            game,
            state: EngineState::PreFlop,
            seed,
            hands_played: 0,
        };
        engine.begin_hand(shuffle);
        engine
    }

    fn begin_hand(&mut self, shuffle: bool) -> GameEvent {
        if self.hands_played > 0 {
            self.game.rotate_dealer();
        }
        self.game.prepare_new_game();
        if shuffle {
            self.game.shuffle_deck();
        }
        self.game.post_blinds();
        self.game.deal_hole_cards();
        self.state = EngineState::PreFlop;
        self.hands_played += 1;
        debug!(
            "hand {} started, dealer {}, pot {}",
            self.hands_played,
            self.game.dealer(),
            self.game.pot()
        );
        GameEvent::HandStarted {
            dealer: self.game.dealer(),
        }
    }

    /// Starts the next hand from a terminal state: reshuffle, rotate the
    /// button, post blinds, deal hole cards. Mid-hand this does nothing and
    /// returns no events.
    pub fn new_game(&mut self) -> Result<Vec<GameEvent>, GameError> {
        if !self.state.is_terminal() {
            return Ok(Vec::new());
        }
        Ok(vec![self.begin_hand(true)])
    }

    /// Applies `mv` for `seat`. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalActionInState`] when the hand is over
    /// - [`GameError::OutOfTurn`] when `seat` is not the seat to act
    /// - [`GameError::InvalidRaiseAmount`] / [`GameError::InsufficientChips`]
    ///   for a raise that breaks the betting rules
    pub fn make_move(&mut self, seat: Seat, mv: Move) -> Result<Vec<GameEvent>, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::IllegalActionInState {
                action: mv.kind(),
                state: self.state,
            });
        }

        let mut events = Vec::new();
        match mv {
            Move::Fold => {
                self.game.perform_fold(seat)?;
                events.push(GameEvent::Move { seat, mv });
                events.push(self.transition_to(EngineState::Folded));
                events.push(self.hand_ended());
                return Ok(events);
            }
            Move::Call => {
                self.game.perform_call(seat)?;
            }
            Move::Raise { amount } => {
                self.game.perform_raise(seat, amount)?;
            }
        }
        events.push(GameEvent::Move { seat, mv });

        if self.game.all_players_have_acted() {
            self.transition_state(&mut events);
        }
        Ok(events)
    }

    fn transition_to(&mut self, to: EngineState) -> GameEvent {
        let from = self.state;
        self.state = to;
        debug!("{from} -> {to}");
        GameEvent::StateTransition { from, to }
    }

    /// Closes a completed street: clears bets and acted flags, deals the
    /// next cards, and on the river settles the showdown.
    fn transition_state(&mut self, events: &mut Vec<GameEvent>) {
        let Some(next) = self.state.next() else {
            return;
        };
        events.push(self.transition_to(next));
        self.game.clear_street();
        match next {
            EngineState::Flop => self.game.deal_flop(),
            EngineState::Turn => self.game.deal_turn(),
            EngineState::River => self.game.deal_river(),
            EngineState::Showdown => {
                self.game.determine_winner();
                events.push(self.hand_ended());
            }
            EngineState::PreFlop | EngineState::Folded => {}
        }
    }

    fn hand_ended(&self) -> GameEvent {
        let winner = self
            .game
            .winner()
            .unwrap_or_else(|| unreachable!("hand ended without a winner"));
        let pot = self.game.pot();
        match self.winning_hand_description() {
            Some(desc) => info!("hand {}: {winner} wins {pot} with {desc}", self.hands_played),
            None => info!("hand {}: {winner} wins {pot}", self.hands_played),
        }
        GameEvent::HandEnded { winner, pot }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }
    pub fn game(&self) -> &PokerGame {
        &self.game
    }
    pub fn pot(&self) -> u32 {
        self.game.pot()
    }
    pub fn community_cards(&self) -> &[Card] {
        self.game.community_cards()
    }
    pub fn player(&self, seat: Seat) -> &Player {
        self.game.player(seat)
    }
    pub fn player_turn(&self) -> Seat {
        self.game.player_turn()
    }
    pub fn dealer(&self) -> Seat {
        self.game.dealer()
    }
    pub fn has_ended(&self) -> bool {
        self.game.has_ended()
    }
    pub fn winner(&self) -> Option<Winner> {
        self.game.winner()
    }
    pub fn winning_hand(&self) -> Option<[Card; 5]> {
        self.game.winning_hand()
    }
    /// Seed of the shuffle stream for this session.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// Hands dealt so far, counting the one in progress.
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Category name of the showdown winner's hand ("Royal Flush" for an
    /// ace-high straight flush). `None` before showdown and after a fold.
    pub fn winning_hand_description(&self) -> Option<String> {
        self.game.evaluation().map(|e| e.description().to_string())
    }

    /// True when either seat has no chips left.
    pub fn is_busted(&self) -> bool {
        [Seat::Player1, Seat::Player2]
            .iter()
            .any(|&s| self.game.player(s).chips() == 0)
    }

    pub fn set_seat_kind(&mut self, seat: Seat, kind: SeatKind) {
        self.game.set_seat_kind(seat, kind);
    }

    pub fn snapshot(&self, seat: Seat) -> GameSnapshot {
        let me = self.game.player(seat);
        let opp = self.game.player(seat.other());
        GameSnapshot {
            seat,
            hole_cards: me.hole_cards(),
            community_cards: self.game.community_cards().to_vec(),
            stage: self.state,
            current_bet: opp.current_bet(),
            own_bet: me.current_bet(),
            amount_to_call: opp.current_bet().saturating_sub(me.current_bet()).min(me.chips()),
            pot: self.game.pot(),
            chips: me.chips(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_engine_is_preflop_with_blinds_posted() {
        let e = Engine::new(Some(9));
        assert_eq!(e.state(), EngineState::PreFlop);
        assert_eq!(e.pot(), 15);
        assert_eq!(e.dealer(), Seat::Player1);
        assert_eq!(e.player_turn(), Seat::Player2);
        assert_eq!(e.player(Seat::Player1).chips(), 995);
        assert_eq!(e.player(Seat::Player2).chips(), 990);
        assert!(e.player(Seat::Player1).hole_cards().is_some());
        assert!(e.community_cards().is_empty());
    }

    #[test]
    fn raise_never_completes_a_street() {
        let mut e = Engine::new(Some(1));
        e.make_move(Seat::Player2, Move::Call).unwrap();
        e.make_move(Seat::Player1, Move::Raise { amount: 20 }).unwrap();
        assert_eq!(e.state(), EngineState::PreFlop);
        assert!(!e.player(Seat::Player2).has_acted());
        e.make_move(Seat::Player2, Move::Call).unwrap();
        assert_eq!(e.state(), EngineState::Flop);
        assert_eq!(e.pot(), 55);
    }

    #[test]
    fn snapshot_reports_amount_to_call() {
        let mut e = Engine::new(Some(4));
        e.make_move(Seat::Player2, Move::Raise { amount: 30 }).unwrap();
        let s = e.snapshot(Seat::Player1);
        assert_eq!(s.current_bet, 30);
        assert_eq!(s.own_bet, 0);
        assert_eq!(s.amount_to_call, 30);
        assert_eq!(s.pot, 45);
        assert_eq!(s.chips, 995);
        assert_eq!(s.stage, EngineState::PreFlop);
    }

    #[test]
    fn dealer_alternates_between_hands() {
        let mut e = Engine::new(Some(2));
        e.make_move(Seat::Player2, Move::Fold).unwrap();
        e.new_game().unwrap();
        assert_eq!(e.dealer(), Seat::Player2);
        assert_eq!(e.player_turn(), Seat::Player1);
        assert_eq!(e.hands_played(), 2);
    }
}
