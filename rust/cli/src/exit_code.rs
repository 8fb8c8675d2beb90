//! Process exit codes returned by [`crate::run`].

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, I/O failures.
pub const ERROR: i32 = 2;

/// Input ended in the middle of a hand.
pub const INTERRUPTED: i32 = 130;

pub fn for_error(e: &CliError) -> i32 {
    match e {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
