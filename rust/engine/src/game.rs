use log::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{determine_winner, HandEvaluation, Winner};
use crate::player::{Move, Player, Seat, SeatKind};
use crate::rules::{validate_move, ValidatedMove};

/// Authoritative record of one heads-up table: pot, blinds, dealer button,
/// whose turn it is, the board and the hand outcome.
///
/// The same record is reused for every hand of a session. Mutation goes
/// only through the crate-private operations below, which the
/// [`crate::engine::Engine`] state machine sequences; callers outside the
/// crate get read-only access.
#[derive(Debug, Clone)]
pub struct PokerGame {
    pot: u32,
    small_blind: u32,
    big_blind: u32,
    deck: Deck,
    players: [Player; 2],
    dealer: Seat,
    player_turn: Seat,
    community_cards: Vec<Card>,
    winner: Option<Winner>,
    winning_hand: Option<[Card; 5]>,
    evaluation: Option<HandEvaluation>,
}

impl PokerGame {
    pub(crate) fn new(
        deck: Deck,
        starting_stack: u32,
        small_blind: u32,
        big_blind: u32,
        kinds: [SeatKind; 2],
    ) -> Self {
        Self {
            pot: 0,
            small_blind,
            big_blind,
            deck,
            players: [
                Player::new(starting_stack, kinds[0]),
                Player::new(starting_stack, kinds[1]),
            ],
            dealer: Seat::Player1,
            player_turn: Seat::Player2,
            community_cards: Vec::with_capacity(5),
            winner: None,
            winning_hand: None,
            evaluation: None,
        }
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn dealer(&self) -> Seat {
        self.dealer
    }
    pub fn player_turn(&self) -> Seat {
        self.player_turn
    }
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn winning_hand(&self) -> Option<[Card; 5]> {
        self.winning_hand
    }
    pub fn evaluation(&self) -> Option<&HandEvaluation> {
        self.evaluation.as_ref()
    }
    /// A hand has ended once its winner is known.
    pub fn has_ended(&self) -> bool {
        self.winner.is_some()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// True exactly when both seats have acted since the street began or
    /// since the last raise.
    pub fn all_players_have_acted(&self) -> bool {
        self.players.iter().all(Player::has_acted)
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    fn check_turn(&self, seat: Seat) -> Result<(), GameError> {
        if seat != self.player_turn {
            return Err(GameError::OutOfTurn {
                expected: self.player_turn,
                actual: seat,
            });
        }
        Ok(())
    }

    fn rotate_player_turn(&mut self) {
        self.player_turn = self.player_turn.other();
    }

    /// Matches the opponent's street bet, all-in when short. Returns the
    /// chips moved into the pot.
    pub(crate) fn perform_call(&mut self, seat: Seat) -> Result<u32, GameError> {
        self.check_turn(seat)?;
        let opp_bet = self.player(seat.other()).current_bet();
        let me = self.player(seat);
        let amount = match validate_move(me.chips(), me.current_bet(), opp_bet, &Move::Call)? {
            ValidatedMove::Call(amount) => amount,
            other => unreachable!("call validated as {other:?}"),
        };

        let me = self.player_mut(seat);
        let moved = me.take_chips(amount);
        me.set_current_bet(opp_bet);
        me.set_has_acted(true);
        self.pot += moved;
        self.rotate_player_turn();
        debug!("{seat} calls {moved}, pot {}", self.pot);
        Ok(moved)
    }

    /// Raises the street bet to `amount` (a new total, not an increment).
    /// A raise reopens the action: the opponent must act again.
    pub(crate) fn perform_raise(&mut self, seat: Seat, amount: u32) -> Result<u32, GameError> {
        self.check_turn(seat)?;
        let opp_bet = self.player(seat.other()).current_bet();
        let me = self.player(seat);
        let validated = validate_move(me.chips(), me.current_bet(), opp_bet, &Move::Raise { amount })?;
        let (to, added) = match validated {
            ValidatedMove::Raise { to, added } => (to, added),
            other => unreachable!("raise validated as {other:?}"),
        };

        let me = self.player_mut(seat);
        me.take_chips(added);
        me.set_current_bet(to);
        me.set_has_acted(true);
        self.player_mut(seat.other()).set_has_acted(false);
        self.pot += added;
        self.rotate_player_turn();
        debug!("{seat} raises to {to} (+{added}), pot {}", self.pot);
        Ok(added)
    }

    /// Concedes the hand. The opponent is paid the whole pot and recorded as
    /// winner; the turn does not advance.
    pub(crate) fn perform_fold(&mut self, seat: Seat) -> Result<(), GameError> {
        self.check_turn(seat)?;
        let other = seat.other();
        let pot = self.pot;
        self.player_mut(other).add_chips(pot);
        self.winner = Some(winner_for(other));
        debug!("{seat} folds, {other} takes {pot}");
        Ok(())
    }

    /// Posts both blinds straight into the pot, each clamped to the poster's
    /// stack. The dealer posts the small blind. Street bets stay at zero.
    pub(crate) fn post_blinds(&mut self) {
        let (sb, bb) = (self.small_blind, self.big_blind);
        let dealer = self.dealer;
        let small = self.player_mut(dealer).take_chips(sb);
        let big = self.player_mut(dealer.other()).take_chips(bb);
        self.pot += small + big;
    }

    pub(crate) fn rotate_dealer(&mut self) {
        self.dealer = self.dealer.other();
    }

    /// Clears the previous hand and hands the first action to the
    /// non-dealer.
    pub(crate) fn prepare_new_game(&mut self) {
        self.pot = 0;
        self.winner = None;
        self.winning_hand = None;
        self.evaluation = None;
        self.community_cards.clear();
        for p in &mut self.players {
            p.clear_cards();
            p.clear_street();
        }
        self.player_turn = self.dealer.other();
    }

    pub(crate) fn shuffle_deck(&mut self) {
        self.deck.shuffle();
    }

    fn draw(&mut self) -> Card {
        self.deck
            .deal_card()
            .expect("deck exhausted mid-hand: a heads-up hand uses at most 15 cards")
    }

    /// Two cards each, alternating, Player1 first.
    pub(crate) fn deal_hole_cards(&mut self) {
        for _ in 0..2 {
            for seat in [Seat::Player1, Seat::Player2] {
                let c = self.draw();
                if let Err(e) = self.player_mut(seat).give_card(c) {
                    unreachable!("{seat}: {e}");
                }
            }
        }
    }

    fn deal_community(&mut self, n: usize) {
        let burned = self.draw();
        debug!("burn {burned}");
        for _ in 0..n {
            let c = self.draw();
            self.community_cards.push(c);
        }
    }

    pub(crate) fn deal_flop(&mut self) {
        self.deal_community(3);
    }

    pub(crate) fn deal_turn(&mut self) {
        self.deal_community(1);
    }

    pub(crate) fn deal_river(&mut self) {
        self.deal_community(1);
    }

    /// Street reset: bets and acted flags cleared, dealer acts first.
    pub(crate) fn clear_street(&mut self) {
        for p in &mut self.players {
            p.clear_street();
        }
        self.player_turn = self.dealer;
    }

    /// Evaluates both hands over the full board and pays the pot. A tie pays
    /// each seat half, rounded down.
    pub(crate) fn determine_winner(&mut self) {
        let (Some(p1), Some(p2)) = (
            self.player(Seat::Player1).hole_cards(),
            self.player(Seat::Player2).hole_cards(),
        ) else {
            panic!("showdown reached without both hole cards dealt");
        };
        let result = determine_winner(&p1, &p2, &self.community_cards);
        let pot = self.pot;
        match result.winner {
            Winner::Player1 => self.player_mut(Seat::Player1).add_chips(pot),
            Winner::Player2 => self.player_mut(Seat::Player2).add_chips(pot),
            Winner::Tie => {
                self.player_mut(Seat::Player1).add_chips(pot / 2);
                self.player_mut(Seat::Player2).add_chips(pot / 2);
            }
        }
        self.winner = Some(result.winner);
        self.winning_hand = result.hand;
        self.evaluation = Some(result.evaluation);
    }

    pub(crate) fn set_seat_kind(&mut self, seat: Seat, kind: SeatKind) {
        self.player_mut(seat).set_kind(kind);
    }
}

fn winner_for(seat: Seat) -> Winner {
    match seat {
        Seat::Player1 => Winner::Player1,
        Seat::Player2 => Winner::Player2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PokerGame {
        let mut deck = Deck::new_with_seed(3);
        deck.shuffle();
        let mut g = PokerGame::new(deck, 100, 5, 10, [SeatKind::Human; 2]);
        g.prepare_new_game();
        g.post_blinds();
        g.deal_hole_cards();
        g
    }

    #[test]
    fn blinds_clamped_to_short_stack() {
        let mut deck = Deck::new_with_seed(1);
        deck.shuffle();
        let mut g = PokerGame::new(deck, 7, 5, 10, [SeatKind::Human; 2]);
        g.prepare_new_game();
        g.post_blinds();
        assert_eq!(g.pot(), 12);
        assert_eq!(g.player(Seat::Player1).chips(), 2);
        assert_eq!(g.player(Seat::Player2).chips(), 0);
        assert_eq!(g.player(Seat::Player2).current_bet(), 0);
    }

    #[test]
    fn out_of_turn_leaves_state_untouched() {
        let mut g = game();
        let before = (g.pot(), g.player(Seat::Player1).chips(), g.player_turn());
        let err = g.perform_raise(Seat::Player1, 50).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfTurn {
                expected: Seat::Player2,
                actual: Seat::Player1
            }
        );
        assert_eq!(before, (g.pot(), g.player(Seat::Player1).chips(), g.player_turn()));
    }

    #[test]
    fn call_all_in_clamps_to_stack() {
        let mut g = game();
        g.perform_raise(Seat::Player2, 90).unwrap();
        g.perform_raise(Seat::Player1, 95).unwrap_err();
        assert_eq!(g.perform_call(Seat::Player1), Ok(90));
        assert_eq!(g.player(Seat::Player1).chips(), 5);
        assert_eq!(g.player(Seat::Player1).current_bet(), 90);
    }

    #[test]
    fn fold_pays_pot_without_advancing_turn() {
        let mut g = game();
        g.perform_fold(Seat::Player2).unwrap();
        assert_eq!(g.winner(), Some(Winner::Player1));
        assert_eq!(g.player(Seat::Player1).chips(), 95 + 15);
        assert_eq!(g.player_turn(), Seat::Player2);
        assert_eq!(g.pot(), 15);
    }

    #[test]
    fn clear_street_hands_action_to_dealer() {
        let mut g = game();
        g.perform_call(Seat::Player2).unwrap();
        g.perform_call(Seat::Player1).unwrap();
        assert!(g.all_players_have_acted());
        g.clear_street();
        g.deal_flop();
        assert!(!g.all_players_have_acted());
        assert_eq!(g.player_turn(), g.dealer());
        assert_eq!(g.community_cards().len(), 3);
        assert_eq!(g.deck_remaining(), 52 - 4 - 4);
    }
}
