use crate::board::state::PieceId;
use crate::error::ParseError;
use crate::error::ParseError::BadString;
use crate::pieces::Side;
use crate::tiles::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single move of a piece from one square to another. (Named "Play" rather than "Move" as the
/// lower-cased version of the latter would clash with the Rust keyword.)
///
/// A `Play` is just a pair of board squares; it is not guaranteed to be a legal move in any
/// particular game. Pass it to [`crate::game::logic::validate`] (or let
/// [`crate::game::Game::execute_play`] do so) to find out.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Play {
    pub from: Position,
    pub to: Position,
}

impl Play {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Whether the source and destination share a row or column. Jumps are only possible along
    /// a straight line.
    pub fn is_straight(&self) -> bool {
        self.from.row() == self.to.row() || self.from.col() == self.to.col()
    }

    /// The Manhattan distance covered by the move.
    pub fn distance(&self) -> u8 {
        self.from.distance_to(self.to)
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Play {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();
        if tokens.len() != 2 {
            return Err(BadString(String::from(s)));
        }
        Ok(Play::new(
            Position::from_str(tokens[0])?,
            Position::from_str(tokens[1])?,
        ))
    }
}

/// A thin wrapper around a [`Play`], intended to indicate that the `Play` has passed validation
/// against the current game state.
///
/// **NOTE:** A `ValidPlay` should only be constructed with a `Play` that is known to be valid.
/// It is generally preferable to obtain one by passing a `Play` to
/// [`crate::game::logic::validate`].
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ValidPlay {
    pub play: Play,
}

/// An immutable record of a single executed move. The stack of these held by
/// [`crate::record::MoveRecorder`] carries enough information to fully invert each move on undo:
/// both endpoint squares, the moved piece's id and the id of the captured piece, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    /// The side that made the move.
    pub side: Side,
    /// The movement itself.
    pub play: Play,
    /// The piece that moved.
    pub piece: PieceId,
    /// The piece captured by the move, if any.
    pub captured: Option<PieceId>,
    /// When the move was executed.
    pub timestamp: DateTime<Utc>,
}

impl PlayRecord {
    /// Whether the move captured a piece.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError::BadString;
    use crate::play::Play;
    use crate::tiles::Position;
    use std::str::FromStr;

    #[test]
    fn test_play_geometry() {
        let p = Play::new(Position::new(3, 0).unwrap(), Position::new(3, 3).unwrap());
        assert!(p.is_straight());
        assert_eq!(p.distance(), 3);

        let p = Play::new(Position::new(2, 1).unwrap(), Position::new(4, 2).unwrap());
        assert!(!p.is_straight());
        assert_eq!(p.distance(), 3);
    }

    #[test]
    fn test_parsing_plays() {
        let parsed = Play::from_str("A2-A3");
        let play = Play::new(Position::new(2, 0).unwrap(), Position::new(3, 0).unwrap());
        assert_eq!(parsed, Ok(play));
        assert_eq!(play.to_string(), "A2-A3");

        assert_eq!(
            Play::from_str("A2-A3-A4"),
            Err(BadString(String::from("A2-A3-A4")))
        );
        assert!(Play::from_str("A2").is_err());
        assert!(Play::from_str("!2-A3").is_err());
    }
}
