use crate::pieces::PieceType;
use crate::record::MAX_UNDOS_PER_PLAYER;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors that may be encountered when parsing a string.
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum ParseError {
    /// Tried to parse a multi-line string but encountered a line that was not the expected length.
    /// The given `usize` is the actual length.
    #[error("line has the wrong length ({0})")]
    BadLineLen(usize),
    /// Encountered an unexpected character in a string.
    #[error("unexpected character {0:?}")]
    BadChar(char),
    /// Tried to parse an empty string.
    #[error("cannot parse an empty string")]
    EmptyString,
    /// Could not parse an integer from a string.
    #[error("could not parse integer: {0}")]
    BadInt(#[from] ParseIntError),
    /// A player index other than 0 or 1.
    #[error("player index must be 0 or 1, got {0}")]
    BadPlayerIndex(u8),
    /// A parsed coordinate referred to a square not on the board.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// A generic error type where the given string could not be parsed for some reason.
    #[error("could not parse string {0:?}")]
    BadString(String),
}

/// Errors relating to the board.
#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
pub enum BoardError {
    /// Coordinates are out of bounds, ie, not on the board.
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i8, col: i8 },
    /// There is no piece at the given square, where one is expected.
    #[error("no piece at the given position")]
    NoPiece,
}

/// Different ways a play can be invalid. Each variant renders as a human-readable reason a host
/// can show to the player.
#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
pub enum PlayInvalid {
    /// Game is already over.
    #[error("the game is already over")]
    GameOver,
    /// Source and destination are the same square.
    #[error("cannot move to the same position")]
    SamePosition,
    /// There is no piece to move at the given square.
    #[error("no piece at the source position")]
    NoPiece,
    /// The piece being moved does not belong to the player whose turn it is.
    #[error("that piece does not belong to the player to move")]
    WrongPlayer,
    /// The destination holds a piece of the mover's own side.
    #[error("cannot capture your own piece")]
    SelfCapture,
    /// No player may ever enter their own den.
    #[error("cannot enter your own den")]
    OwnDen,
    /// A water jump is blocked by a rat (of either side) in the river.
    #[error("{0} cannot jump, a rat is blocking the water")]
    JumpBlocked(PieceType),
    /// The destination is not adjacent to the source and the move is not a valid jump.
    #[error("can only move to an adjacent square, or jump the water as lion or tiger")]
    NotAdjacent,
    /// Only the rat may enter water.
    #[error("{0} cannot enter water, only the rat can")]
    CannotEnterWater(PieceType),
    /// A rat in the water cannot capture a rat on land.
    #[error("a rat in the water cannot capture a rat on land")]
    RatInWaterVsLandRat,
    /// A rat in the water cannot capture the elephant.
    #[error("a rat in the water cannot capture the elephant")]
    RatInWaterVsElephant,
    /// A rat on land cannot capture a rat in the water.
    #[error("a rat on land cannot capture a rat in the water")]
    LandRatVsWaterRat,
    /// The mover is not strong enough to capture the target.
    #[error(
        "{mover} (rank {}) cannot capture {target} (rank {})",
        .mover.rank(),
        .target.rank()
    )]
    CannotCapture {
        mover: PieceType,
        target: PieceType,
    },
}

/// Ways an undo request can be refused.
#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
pub enum UndoError {
    /// The move history is empty.
    #[error("no moves to undo")]
    NoHistory,
    /// The requesting player has spent their whole undo allowance for this game.
    #[error("maximum {MAX_UNDOS_PER_PLAYER} undos per player reached")]
    NoUndosLeft,
}
