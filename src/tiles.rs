use crate::error::ParseError::{BadChar, EmptyString};
use crate::error::{BoardError, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Number of rows on the board.
pub const ROWS: u8 = 9;
/// Number of columns on the board.
pub const COLS: u8 = 7;

/// The location of a single square on the board, ie, row and column. This struct is only a
/// reference to a location on the board, and does not contain any other information such as piece
/// placement, terrain, etc.
///
/// A `Position` always refers to a square on the 9x7 board: [`Position::new`] fails for anything
/// else. Use [`Coords`] for hypothetical locations that may be off the board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a new [`Position`] with the given row and column, failing with
    /// [`BoardError::OutOfBounds`] if the square is not on the board.
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row >= ROWS || col >= COLS {
            Err(BoardError::OutOfBounds {
                row: row as i8,
                col: col as i8,
            })
        } else {
            Ok(Self { row, col })
        }
    }

    /// Create a new [`Position`] without a bounds check. Used for compile-time constants whose
    /// coordinates are known to be on the board.
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The Manhattan distance between this square and `other`.
    pub fn distance_to(&self, other: Position) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is orthogonally adjacent to this square, ie, the Manhattan distance is
    /// exactly one with only one axis differing.
    pub fn is_adjacent_to(&self, other: Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }

    /// Return an iterator over all squares on the board, row by row.
    pub fn iter_all() -> PositionIterator {
        PositionIterator {
            current_row: 0,
            current_col: 0,
        }
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position(row={}, col={})", self.row, self.col)
    }
}

impl Display for Position {
    /// Column letter (`A`-`G`) followed by row number (`0`-`8`), eg, `A2`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (self.col + b'A') as char, self.row)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let col = if let Some(&byte) = s.as_bytes().first() {
            let upper = byte.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return Err(BadChar(byte as char));
            }
            upper - b'A'
        } else {
            return Err(EmptyString);
        };
        let row = s[1..].parse::<u8>()?;
        Ok(Position::new(row, col)?)
    }
}

impl TryFrom<String> for Position {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.to_string()
    }
}

impl From<Position> for Coords {
    fn from(p: Position) -> Self {
        Self {
            row: p.row as i8,
            col: p.col as i8,
        }
    }
}

/// An unbounded row-column pair representing a hypothetical location, which may or may not be on
/// the board. Can be used to represent out-of-bounds locations, including those with negative row
/// or column values.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Coords {
    pub row: i8,
    pub col: i8,
}

impl Coords {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Convert back to a [`Position`], failing if the location is not on the board.
    pub fn to_position(self) -> Result<Position, BoardError> {
        if (0..ROWS as i8).contains(&self.row) && (0..COLS as i8).contains(&self.col) {
            Ok(Position::new_unchecked(self.row as u8, self.col as u8))
        } else {
            Err(BoardError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }
}

/// Iterator over all squares on the board.
pub struct PositionIterator {
    current_row: u8,
    current_col: u8,
}

impl Iterator for PositionIterator {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row >= ROWS {
            return None;
        }
        let pos = Position::new_unchecked(self.current_row, self.current_col);
        if self.current_col >= COLS - 1 {
            self.current_row += 1;
            self.current_col = 0;
        } else {
            self.current_col += 1;
        }
        Some(pos)
    }
}
