//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prompt shown before reading a human move.
pub fn prompt(out: &mut dyn Write, to_call: u32) -> std::io::Result<()> {
    if to_call > 0 {
        write!(out, "Your move ({} to call) [f]old [c]all [r]aise N [q]uit: ", to_call)?;
    } else {
        write!(out, "Your move [f]old [c]all [r]aise N [q]uit: ")?;
    }
    out.flush()
}
