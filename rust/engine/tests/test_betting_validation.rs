use holdem_engine::engine::{Engine, EngineConfig, EngineState, MAX_STARTING_STACK};
use holdem_engine::errors::GameError;
use holdem_engine::player::{Move, Seat};

fn fingerprint(e: &Engine) -> (u32, u32, u32, u32, u32, Seat, bool, bool) {
    let p1 = e.player(Seat::Player1);
    let p2 = e.player(Seat::Player2);
    (
        e.pot(),
        p1.chips(),
        p2.chips(),
        p1.current_bet(),
        p2.current_bet(),
        e.player_turn(),
        p1.has_acted(),
        p2.has_acted(),
    )
}

#[test]
fn out_of_turn_is_rejected_without_mutation() {
    let mut e = Engine::new(Some(10));
    let before = fingerprint(&e);
    for mv in [Move::Fold, Move::Call, Move::Raise { amount: 40 }] {
        let err = e.make_move(Seat::Player1, mv).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfTurn {
                expected: Seat::Player2,
                actual: Seat::Player1
            }
        );
        assert_eq!(fingerprint(&e), before);
    }
    assert_eq!(e.state(), EngineState::PreFlop);
}

#[test]
fn raise_below_double_is_rejected() {
    let mut e = Engine::new(Some(11));
    e.make_move(Seat::Player2, Move::Raise { amount: 40 }).unwrap();
    let before = fingerprint(&e);
    let err = e.make_move(Seat::Player1, Move::Raise { amount: 79 }).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidRaiseAmount {
            amount: 79,
            minimum: 80
        }
    );
    assert_eq!(fingerprint(&e), before);
    e.make_move(Seat::Player1, Move::Raise { amount: 80 }).unwrap();
}

#[test]
fn raise_beyond_stack_is_rejected() {
    let mut e = Engine::new(Some(12));
    let before = fingerprint(&e);
    let err = e.make_move(Seat::Player2, Move::Raise { amount: 991 }).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            needed: 991,
            available: 990
        }
    );
    assert_eq!(fingerprint(&e), before);
    // Exactly all-in is fine.
    e.make_move(Seat::Player2, Move::Raise { amount: 990 }).unwrap();
    assert_eq!(e.player(Seat::Player2).chips(), 0);
}

#[test]
fn raise_counts_chips_already_in_front() {
    let mut e = Engine::new(Some(13));
    e.make_move(Seat::Player2, Move::Raise { amount: 100 }).unwrap();
    e.make_move(Seat::Player1, Move::Raise { amount: 300 }).unwrap();
    // Player2 has 100 in, 890 behind: a raise to 990 costs 890.
    e.make_move(Seat::Player2, Move::Raise { amount: 990 }).unwrap();
    assert_eq!(e.player(Seat::Player2).chips(), 0);
    assert_eq!(e.pot(), 15 + 990 + 300);
}

#[test]
fn raise_reopens_action_for_opponent_who_already_acted() {
    let mut e = Engine::new(Some(14));
    e.make_move(Seat::Player2, Move::Call).unwrap();
    assert!(e.player(Seat::Player2).has_acted());
    e.make_move(Seat::Player1, Move::Raise { amount: 30 }).unwrap();
    assert!(!e.player(Seat::Player2).has_acted());
    assert!(e.player(Seat::Player1).has_acted());
    assert_eq!(e.state(), EngineState::PreFlop);
    assert_eq!(e.player_turn(), Seat::Player2);
}

#[test]
fn short_call_goes_all_in() {
    let cfg = EngineConfig {
        starting_stack: 200,
        seed: Some(15),
        ..EngineConfig::default()
    };
    let mut e = Engine::with_config(cfg);
    // Player2 posted 10 and has 190; Player1 posted 5 and shoves 195.
    e.make_move(Seat::Player2, Move::Call).unwrap();
    e.make_move(Seat::Player1, Move::Raise { amount: 195 }).unwrap();
    e.make_move(Seat::Player2, Move::Call).unwrap();
    assert_eq!(e.player(Seat::Player2).chips(), 0);
    assert_eq!(e.player(Seat::Player2).current_bet(), 195);
    assert_eq!(e.pot(), 15 + 195 + 190);
    assert_eq!(e.state(), EngineState::Flop);
}

#[test]
fn error_messages_name_the_violation() {
    let mut e = Engine::new(Some(16));
    let msg = e
        .make_move(Seat::Player1, Move::Call)
        .unwrap_err()
        .to_string();
    assert!(msg.starts_with("Wrong player's turn"), "{msg}");
    e.make_move(Seat::Player2, Move::Raise { amount: 50 }).unwrap();
    let msg = e
        .make_move(Seat::Player1, Move::Raise { amount: 60 })
        .unwrap_err()
        .to_string();
    assert!(msg.contains("at least 2x"), "{msg}");
}

#[test]
fn largest_stacks_all_in_fit_the_pot() {
    let cfg = EngineConfig {
        starting_stack: MAX_STARTING_STACK,
        seed: Some(21),
        ..EngineConfig::default()
    };
    let mut e = Engine::with_config(cfg);
    let shove = e.player(Seat::Player2).chips();
    e.make_move(Seat::Player2, Move::Raise { amount: shove }).unwrap();
    e.make_move(Seat::Player1, Move::Call).unwrap();

    assert_eq!(e.state(), EngineState::Flop);
    assert_eq!(e.pot(), 15 + 2 * shove);
    let total = e.pot() + e.player(Seat::Player1).chips() + e.player(Seat::Player2).chips();
    assert_eq!(total, 2 * MAX_STARTING_STACK);
}

#[test]
#[should_panic(expected = "starting_stack")]
fn stack_above_ceiling_is_refused() {
    Engine::with_config(EngineConfig {
        starting_stack: 3_000_000_000,
        seed: Some(1),
        ..EngineConfig::default()
    });
}
