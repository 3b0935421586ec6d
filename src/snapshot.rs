//! Saving and restoring games. A [`Snapshot`] is a small serializable summary of a game in
//! progress: whose turn it is, the player names and the board string. The move history and
//! spent undo allowances are deliberately not part of it, so a restored game starts with a
//! fresh history, the way a game loaded from a save file does.

use crate::board::state::Board;
use crate::error::ParseError;
use crate::game::{Game, GameStatus};
use crate::pieces::Side;
use crate::player::Player;
use crate::record::MoveRecorder;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The saved state of a game in progress.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Index of the player to move: 0 for north, 1 for south.
    pub current_player: u8,
    /// The two player names, north first.
    pub players: [String; 2],
    /// The board string, as produced by the board's `Display` implementation.
    pub board: String,
}

impl Game {
    /// Capture the current state of the game as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_player: self.side_to_play.index() as u8,
            players: [
                self.players[0].name().to_string(),
                self.players[1].name().to_string(),
            ],
            board: self.board.to_string(),
        }
    }

    /// Restore a game from a [`Snapshot`]. The restored game has a fresh move history and full
    /// undo allowances, and is considered ongoing regardless of the position.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Game, ParseError> {
        let board = Board::from_str(&snapshot.board)?;
        let side_to_play = Side::from_index(snapshot.current_player)?;
        let mut rosters = [vec![], vec![]];
        for (id, entry) in board.pieces() {
            rosters[entry.piece.side.index()].push(id);
        }
        let [north_roster, south_roster] = rosters;
        Ok(Game {
            players: [
                Player::new(snapshot.players[0].clone(), Side::North, north_roster),
                Player::new(snapshot.players[1].clone(), Side::South, south_roster),
            ],
            board,
            recorder: MoveRecorder::new(),
            side_to_play,
            status: GameStatus::Ongoing,
        })
    }
}
