//! # holdem CLI Library
//!
//! Command-line driver for the heads-up Hold'em engine: play at the
//! terminal, run computer-vs-computer simulations, and inspect deals and
//! hands.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, executes the subcommand, and
//! returns the process exit code. [`run_with_input`] does the same with an
//! explicit input stream for the interactive `play` command.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "play", "--vs", "human", "--hands", "10"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the computer, or watch two computer seats
//! - `sim`: Run computer-vs-computer sessions and write hand histories
//! - `deal`: Deal a single hand and check it down
//! - `eval`: Best five-card hand for given hole and board cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "eval", "cfg"];

/// Main entry point for the CLI application, reading interactive input
/// from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends in
/// the middle of a hand
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["holdem", "eval", "--hole", "As Ks", "--board", "Qs Js Ts"];
/// let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with the `play` command's moves read from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(&e, out, err),
    };
    logging::init(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            vs,
            difficulty,
            hands,
            seed,
        } => handle_play_command(vs, difficulty, hands, seed, out, err, input),
        Commands::Sim {
            hands,
            output,
            seed,
            p1,
            p2,
        } => handle_sim_command(hands, output, seed, p1, p2, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { hole, board } => handle_eval_command(&hole, &board, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::for_error(&e)
        }
    }
}

fn report_usage_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    let mut usage = format!(
        "{}\nholdem heads-up poker\nUsage: holdem <command> [options]\n\nCommands:\n",
        e
    );
    for c in COMMANDS {
        usage.push_str(&format!("  {}\n", c));
    }
    usage.push_str("\nFor full help, run: holdem --help");
    if writeln!(err, "{}", usage).is_err() {
        return exit_code::ERROR;
    }
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_capture(args: &[&str], input: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let code = run_with_input(args, &mut stdin, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run_capture(&["holdem", "--help"], "");
        assert_eq!(code, 0);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let (code, _, err) = run_capture(&["holdem", "bench"], "");
        assert_eq!(code, 2);
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}\n", c)), "missing {c}");
        }
    }

    #[test]
    fn test_deal_command_dispatch() {
        let (code, out, _) = run_capture(&["holdem", "deal", "--seed", "42"], "");
        assert_eq!(code, 0);
        assert!(out.contains("Hole P1:"));
    }

    #[test]
    fn test_eval_error_is_reported_once() {
        let (code, out, err) = run_capture(&["holdem", "eval", "--hole", "As", "--board", "Qh Jh Th"], "");
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert_eq!(err.matches("Error:").count(), 1);
        assert!(err.contains("hole needs 2 cards, got 1"));
    }

    #[test]
    fn test_play_eof_mid_hand_exits_130() {
        let args = ["holdem", "play", "--vs", "human", "--seed", "1", "--difficulty", "easy"];
        let (code, _, err) = run_capture(&args, "");
        assert_eq!(code, 130);
        assert!(err.contains("Interrupted"));
    }
}
