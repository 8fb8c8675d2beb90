use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{Engine, EngineState};
use crate::events::GameEvent;
use crate::hand::Winner;
use crate::player::{Move, Seat};

/// Records a single accepted move and the street it was made on.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub street: EngineState,
    pub action: Move,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Session seed; with the hand number it reproduces the deal
    pub seed: Option<u64>,
    pub dealer: Seat,
    /// Hole cards by seat, Player1 first
    pub hole_cards: [Vec<Card>; 2],
    /// Chronological list of all accepted moves
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// How the hand ended: `Showdown` or `Folded`
    pub end_state: Option<EngineState>,
    pub winner: Option<Winner>,
    pub pot: u32,
    /// Winning hand name when the hand went to showdown
    #[serde(default)]
    pub description: Option<String>,
    /// Stacks after the pot was paid, Player1 first
    pub stacks: [u32; 2],
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Builds a [`HandRecord`] from the events one hand produces.
///
/// Start it right after a hand is dealt, feed it every event batch returned
/// by [`Engine::make_move`], then call [`HandRecorder::finish`] once the
/// engine reports the hand has ended.
#[derive(Debug, Clone)]
pub struct HandRecorder {
    hand_id: String,
    seed: Option<u64>,
    dealer: Seat,
    hole_cards: [Vec<Card>; 2],
    street: EngineState,
    actions: Vec<ActionRecord>,
    end_state: Option<EngineState>,
}

impl HandRecorder {
    pub fn begin(hand_id: String, engine: &Engine) -> Self {
        let hole = |seat| {
            engine
                .player(seat)
                .hole_cards()
                .map(|h| h.to_vec())
                .unwrap_or_default()
        };
        Self {
            hand_id,
            seed: Some(engine.seed()),
            dealer: engine.dealer(),
            hole_cards: [hole(Seat::Player1), hole(Seat::Player2)],
            street: engine.state(),
            actions: Vec::new(),
            end_state: None,
        }
    }

    pub fn observe(&mut self, events: &[GameEvent]) {
        for ev in events {
            match *ev {
                GameEvent::Move { seat, mv } => self.actions.push(ActionRecord {
                    seat,
                    street: self.street,
                    action: mv,
                }),
                GameEvent::StateTransition { to, .. } => {
                    self.street = to;
                    if to.is_terminal() {
                        self.end_state = Some(to);
                    }
                }
                GameEvent::HandStarted { .. } | GameEvent::HandEnded { .. } => {}
            }
        }
    }

    pub fn finish(self, engine: &Engine) -> HandRecord {
        HandRecord {
            hand_id: self.hand_id,
            seed: self.seed,
            dealer: self.dealer,
            hole_cards: self.hole_cards,
            actions: self.actions,
            board: engine.community_cards().to_vec(),
            end_state: self.end_state,
            winner: engine.winner(),
            pot: engine.pot(),
            description: engine.winning_hand_description(),
            stacks: [
                engine.player(Seat::Player1).chips(),
                engine.player(Seat::Player2).chips(),
            ],
            ts: None,
        }
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends hand records as JSON lines and hands out sequential ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers hands under a fixed date and writes nowhere.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
