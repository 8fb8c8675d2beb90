//! # holdem-ai: Computer opponents for heads-up Hold'em
//!
//! Decision policies that turn a read-only [`GameSnapshot`] into a [`Move`].
//! Every policy draws randomness from the generator passed in, so a seeded
//! generator makes a whole simulation reproducible.
//!
//! ## Core Components
//!
//! - [`ComputerStrategy`] - Trait every policy implements
//! - [`easy`] - Coin flip between calling and a minimum raise
//! - [`medium`] - Static hand-strength score mapped through a threshold table
//! - [`hard`] - Win probability mapped through the same table
//! - [`equity`] - Equity estimators for the hard policy
//! - [`create_strategy`] - Factory resolving a [`Difficulty`] into a policy
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_strategy;
//! use holdem_engine::engine::Engine;
//! use holdem_engine::player::{Difficulty, Seat};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut engine = Engine::new(Some(42));
//! let strategy = create_strategy(Difficulty::Medium);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let seat = engine.player_turn();
//! let mv = strategy.decide(&engine.snapshot(seat), &mut rng);
//! // Medium only proposes moves the engine accepts.
//! assert!(engine.make_move(seat, mv).is_ok());
//! ```

use holdem_engine::engine::GameSnapshot;
use holdem_engine::player::{Difficulty, Move};
use rand::RngCore;

pub mod easy;
pub mod equity;
pub mod hard;
pub mod medium;

/// Interface for computer decision policies.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::ComputerStrategy;
/// use holdem_engine::engine::GameSnapshot;
/// use holdem_engine::player::Move;
/// use rand::RngCore;
///
/// struct AlwaysCall;
///
/// impl ComputerStrategy for AlwaysCall {
///     fn decide(&self, _snapshot: &GameSnapshot, _rng: &mut dyn RngCore) -> Move {
///         Move::Call
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait ComputerStrategy: Send + Sync {
    /// Choose a move for the seat the snapshot was taken from.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Read-only view of the table from the acting seat
    /// * `rng` - Source for every random choice the policy makes
    fn decide(&self, snapshot: &GameSnapshot, rng: &mut dyn RngCore) -> Move;

    /// Return the name/identifier of this policy.
    fn name(&self) -> &str;
}

/// Factory resolving a difficulty tag into its policy.
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_strategy;
/// use holdem_engine::player::Difficulty;
///
/// let ai = create_strategy(Difficulty::Easy);
/// assert_eq!(ai.name(), "Easy");
/// ```
pub fn create_strategy(difficulty: Difficulty) -> Box<dyn ComputerStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(easy::EasyStrategy),
        Difficulty::Medium => Box::new(medium::MediumStrategy),
        Difficulty::Hard => Box::new(hard::HardStrategy::new()),
    }
}
