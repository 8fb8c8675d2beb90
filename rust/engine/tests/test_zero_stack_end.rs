use holdem_engine::cards::parse_cards;
use holdem_engine::deck::Deck;
use holdem_engine::engine::{Engine, EngineConfig, EngineState};
use holdem_engine::hand::Winner;
use holdem_engine::player::{Move, Seat};

fn short_table() -> Engine {
    let mut cards = parse_cards("Ah Kh Ad Kd 2s 2c 7d 9h 3s Js 4s 3c").unwrap();
    cards.reverse();
    let cfg = EngineConfig {
        starting_stack: 10,
        seed: Some(99),
        ..EngineConfig::default()
    };
    Engine::with_deck(cfg, Deck::from_cards(cards, 99))
}

#[test]
fn big_blind_can_be_posted_all_in() {
    let e = short_table();
    assert_eq!(e.player(Seat::Player2).chips(), 0);
    assert_eq!(e.player(Seat::Player1).chips(), 5);
    assert_eq!(e.pot(), 15);
}

#[test]
fn losing_all_in_player_is_busted_after_showdown() {
    let mut e = short_table();
    while !e.has_ended() {
        e.make_move(e.player_turn(), Move::Call).unwrap();
    }
    assert_eq!(e.state(), EngineState::Showdown);
    assert_eq!(e.winner(), Some(Winner::Player1));
    assert_eq!(e.player(Seat::Player1).chips(), 20);
    assert!(e.is_busted());
}

#[test]
fn new_game_with_busted_seat_clamps_blinds_to_zero() {
    let mut e = short_table();
    while !e.has_ended() {
        e.make_move(e.player_turn(), Move::Call).unwrap();
    }
    e.new_game().unwrap();
    // Player2 is now dealer with nothing to post.
    assert_eq!(e.dealer(), Seat::Player2);
    assert_eq!(e.pot(), 10);
    assert_eq!(e.player(Seat::Player1).chips(), 10);
    assert_eq!(e.player(Seat::Player2).chips(), 0);
}
