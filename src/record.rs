//! The session's move history: an undo-bounded stack of [`PlayRecord`]s, plus the line-based
//! log-entry format a host can use to write out and replay a finished game.

use crate::error::ParseError::BadString;
use crate::error::{ParseError, UndoError};
use crate::pieces::{PieceType, Side};
use crate::play::{Play, PlayRecord};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How many moves each player may retract over the course of one game.
pub const MAX_UNDOS_PER_PLAYER: u8 = 3;

/// Records every executed move and enforces the per-player undo allowance. The history is the
/// sole source of truth for reversal: undo pops a record and inverts it, never replaying the
/// game from the start.
#[derive(Debug, Clone, Default)]
pub struct MoveRecorder {
    history: Vec<PlayRecord>,
    undos_used: [u8; 2],
}

impl MoveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a record of an executed move.
    pub fn record(&mut self, record: PlayRecord) {
        self.history.push(record);
    }

    /// The most recent move, if any.
    pub fn last(&self) -> Option<&PlayRecord> {
        self.history.last()
    }

    /// Whether the given side may undo right now: there must be a move to undo and the side
    /// must have allowance left.
    pub fn can_undo(&self, side: Side) -> bool {
        !self.history.is_empty() && self.undos_used[side.index()] < MAX_UNDOS_PER_PLAYER
    }

    /// Pop the most recent move, charging the given side one undo. Fails if the history is
    /// empty or the side's allowance is spent.
    pub fn undo_last(&mut self, side: Side) -> Result<PlayRecord, UndoError> {
        if self.history.is_empty() {
            return Err(UndoError::NoHistory);
        }
        if self.undos_used[side.index()] >= MAX_UNDOS_PER_PLAYER {
            return Err(UndoError::NoUndosLeft);
        }
        self.undos_used[side.index()] += 1;
        // Non-empty was checked above.
        Ok(self.history.pop().expect("history is non-empty"))
    }

    /// How many undos the given side has left.
    pub fn remaining_undos(&self, side: Side) -> u8 {
        MAX_UNDOS_PER_PLAYER - self.undos_used[side.index()]
    }

    /// Number of moves currently in the history (undone moves are not counted).
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// All recorded moves, oldest first.
    pub fn moves(&self) -> &[PlayRecord] {
        &self.history
    }
}

/// One line of a game record, carrying everything a consumer needs to replay the move without
/// re-validating it. The `Display`/`FromStr` forms use the comma-separated format
/// `seq,Pn,from,to,piece,captured-or-dash`, eg, `3,P0,A2,A3,R,-`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based sequence number of the move.
    pub seq: usize,
    /// The side that moved.
    pub side: Side,
    pub play: Play,
    /// The kind of animal that moved.
    pub piece: PieceType,
    /// The kind of animal captured, if any.
    pub captured: Option<PieceType>,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},P{},{},{},{},{}",
            self.seq,
            self.side.index(),
            self.play.from,
            self.play.to,
            self.piece.symbol(),
            self.captured.map(PieceType::symbol).unwrap_or('-'),
        )
    }
}

impl FromStr for LogEntry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let [seq, player, from, to, piece, captured] = fields[..] else {
            return Err(BadString(String::from(s)));
        };
        let side = match player.strip_prefix('P') {
            Some(index) => Side::from_index(index.parse::<u8>()?)?,
            None => return Err(BadString(String::from(player))),
        };
        let captured = match captured {
            "-" => None,
            sym => {
                let mut chars = sym.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(PieceType::try_from(c)?),
                    _ => return Err(BadString(String::from(sym))),
                }
            }
        };
        let mut piece_chars = piece.chars();
        let piece = match (piece_chars.next(), piece_chars.next()) {
            (Some(c), None) => PieceType::try_from(c)?,
            _ => return Err(BadString(String::from(piece))),
        };
        Ok(Self {
            seq: seq.parse()?,
            side,
            play: Play::new(from.parse()?, to.parse()?),
            piece,
            captured,
        })
    }
}
