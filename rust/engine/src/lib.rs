//! # holdem-engine: Heads-up Texas Hold'em rules engine
//!
//! A two-player Texas Hold'em engine: a betting state machine that enforces
//! street progression, a best-five-of-seven hand evaluator, and hand-history
//! records. Shuffles draw from a seeded ChaCha20 stream so sessions are
//! reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and printing
//! - [`deck`] - 52-card stack with seeded shuffling
//! - [`player`] - Seats, seat kinds, moves and per-seat chip state
//! - [`rules`] - Call and raise validation
//! - [`hand`] - Hand evaluation and comparison
//! - [`game`] - The mutable table record: pot, blinds, button, turn, board
//! - [`engine`] - The hand state machine and its driver-facing interface
//! - [`events`] - Notifications returned by each engine action
//! - [`logger`] - HandRecord building and JSONL output
//! - [`errors`] - Rule-violation errors
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::engine::{Engine, EngineState};
//! use holdem_engine::player::{Move, Seat};
//!
//! let mut engine = Engine::new(Some(7));
//!
//! // The non-dealer acts first pre-flop and folds.
//! let events = engine.make_move(Seat::Player2, Move::Fold).unwrap();
//! assert_eq!(engine.state(), EngineState::Folded);
//! assert_eq!(events.len(), 3);
//!
//! // Terminal states accept only `new_game`.
//! assert!(engine.make_move(Seat::Player1, Move::Call).is_err());
//! engine.new_game().unwrap();
//! assert_eq!(engine.state(), EngineState::PreFlop);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::determine_winner;
//!
//! let board = parse_cards("2c 7d 9h Js Kc").unwrap();
//! let aces = parse_cards("Ah Ad").unwrap();
//! let junk = parse_cards("3s 4s").unwrap();
//! let result = determine_winner(&aces, &junk, &board);
//! println!("{} wins with {}", result.winner, result.evaluation);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
