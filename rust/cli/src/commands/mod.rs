//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated as `CliError`; the dispatcher prints them

mod cfg;
mod deal;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use holdem_ai::{ComputerStrategy, create_strategy};
use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::events::GameEvent;
use holdem_engine::player::{Move, Seat, SeatKind};
use log::warn;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Strategies for the computer seats, Player1 first.
pub(crate) fn seat_strategies(kinds: [SeatKind; 2]) -> [Option<Box<dyn ComputerStrategy>>; 2] {
    kinds.map(|kind| match kind {
        SeatKind::Computer(d) => Some(create_strategy(d)),
        SeatKind::Human => None,
    })
}

/// Decision stream for the computer seats, derived from the session seed so
/// a seeded session replays move for move.
pub(crate) fn strategy_rng(engine: &Engine) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(engine.seed().wrapping_add(1))
}

/// Lets `strategy` act for `seat`. A raise the engine refuses is replaced
/// by a call.
pub(crate) fn play_computer_turn(
    engine: &mut Engine,
    seat: Seat,
    strategy: &dyn ComputerStrategy,
    rng: &mut dyn RngCore,
) -> Result<Vec<GameEvent>, GameError> {
    let mv = strategy.decide(&engine.snapshot(seat), rng);
    match engine.make_move(seat, mv) {
        Ok(events) => Ok(events),
        Err(e) if matches!(mv, Move::Raise { .. }) => {
            warn!("{} ({}) proposed {}: {}; calling instead", seat, strategy.name(), mv, e);
            engine.make_move(seat, Move::Call)
        }
        Err(e) => Err(e),
    }
}
