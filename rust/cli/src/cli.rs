//! Command-line surface of the `holdem` binary.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use holdem_engine::player::Difficulty;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Heads-up Texas Hold'em in the terminal"
)]
pub struct HoldemCli {
    /// Log more (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands at the terminal
    Play {
        #[arg(long, value_enum)]
        vs: Vs,
        /// Computer difficulty (easy, medium, hard); defaults to the configured one
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Stop after this many hands (default: until a stack is busted)
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run computer-vs-computer hands and report the results
    Sim {
        #[arg(long)]
        hands: u32,
        /// Write one JSON hand record per line to this file
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Difficulty for Player 1
        #[arg(long)]
        p1: Option<Difficulty>,
        /// Difficulty for Player 2
        #[arg(long)]
        p2: Option<Difficulty>,
    },
    /// Deal one hand and check it down to showdown
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate the best five-card hand from hole and board cards
    Eval {
        /// Two hole cards, e.g. "As Kd"
        #[arg(long)]
        hole: String,
        /// Three to five board cards, e.g. "Qh Jh Th"
        #[arg(long)]
        board: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Opponent type for the `play` command.
///
/// With `human` you sit in Player 1 and type your moves; with `computer`
/// both seats are played by the computer and the hands print as they go.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    Human,
    Computer,
}

impl Vs {
    /// ```
    /// # use holdem_cli::Vs;
    /// assert_eq!(Vs::Computer.as_str(), "computer");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Computer => "computer",
        }
    }
}
