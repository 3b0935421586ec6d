//! Piece placement. The board holds a 9x7 grid of cells and an arena of piece entries; cells
//! (and player rosters) refer to pieces by stable [`PieceId`], so capturing and restoring a
//! piece only flips its flag and relinks its id rather than moving ownership around.

use crate::board::geometry;
use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadLineLen};
use crate::pieces::{Piece, PieceType, Side};
use crate::tiles::{Position, COLS, ROWS};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A stable identifier for a piece, assigned when the piece is placed at game setup (or on
/// load) and valid for the lifetime of the game. Captured pieces keep their id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PieceId(usize);

/// The live state of a single piece: what it is, where it stands (or stood, if captured) and
/// whether it has been captured.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PieceEntry {
    pub piece: Piece,
    /// The square the piece occupies. For a captured piece, the square it was captured on,
    /// which is where an undo will restore it.
    pub position: Position,
    pub captured: bool,
}

/// The 9x7 board. Each cell holds at most one piece id; the pieces themselves live in the
/// arena. Invariant: an uncaptured piece's recorded position always matches the cell that
/// refers to it, and captured pieces are referred to by no cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<PieceId>; COLS as usize]; ROWS as usize],
    pieces: Vec<PieceEntry>,
}

impl Board {
    /// Create an empty board.
    pub fn empty() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            pieces: vec![],
        }
    }

    fn cell(&self, pos: Position) -> Option<PieceId> {
        self.grid[pos.row() as usize][pos.col() as usize]
    }

    fn set_cell(&mut self, pos: Position, id: Option<PieceId>) {
        self.grid[pos.row() as usize][pos.col() as usize] = id;
    }

    /// Add a new piece to the arena and place it on the given square, returning its id.
    pub fn spawn(&mut self, piece: Piece, position: Position) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(PieceEntry {
            piece,
            position,
            captured: false,
        });
        self.set_cell(position, Some(id));
        id
    }

    /// The id of the piece occupying the given square, if any.
    pub fn id_at(&self, pos: Position) -> Option<PieceId> {
        self.cell(pos)
    }

    /// The piece occupying the given square, if any.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cell(pos).map(|id| self.entry(id).piece)
    }

    /// Whether any piece occupies the given square.
    pub fn occupied(&self, pos: Position) -> bool {
        self.cell(pos).is_some()
    }

    /// Look up a piece by id.
    pub fn entry(&self, id: PieceId) -> &PieceEntry {
        &self.pieces[id.0]
    }

    /// Iterate over every piece in the arena, captured or not, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &PieceEntry)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, e)| (PieceId(i), e))
    }

    /// Move the piece at `from` to the empty square `to`, keeping its recorded position in
    /// sync. Returns the id of the moved piece.
    ///
    /// Panics if `from` is empty; callers are expected to have validated the move.
    pub fn relocate(&mut self, from: Position, to: Position) -> PieceId {
        let id = self
            .cell(from)
            .expect("no piece at the source of a relocation");
        debug_assert!(self.cell(to).is_none());
        self.set_cell(from, None);
        self.set_cell(to, Some(id));
        self.pieces[id.0].position = to;
        id
    }

    /// Mark the given piece as captured and clear its cell. The entry keeps the square it was
    /// captured on so that [`Self::restore`] can put it back.
    pub fn capture(&mut self, id: PieceId) {
        let pos = self.pieces[id.0].position;
        self.set_cell(pos, None);
        self.pieces[id.0].captured = true;
    }

    /// Reverse a capture: clear the piece's captured flag and place it back on the square it
    /// was captured on.
    pub fn restore(&mut self, id: PieceId) {
        let pos = self.pieces[id.0].position;
        debug_assert!(self.cell(pos).is_none());
        self.pieces[id.0].captured = false;
        self.set_cell(pos, Some(id));
    }

    /// Whether any rat (of either side) stands on a water square strictly between `from` and
    /// `to`. Used to test whether a straight-line water jump is blocked. Returns `false` if the
    /// two squares do not share a row or column.
    pub fn rat_blocks_straight_path(&self, from: Position, to: Position) -> bool {
        geometry::positions_between(from, to)
            .into_iter()
            .filter(|p| geometry::is_water(*p))
            .any(|p| {
                self.piece_at(p)
                    .is_some_and(|piece| piece.piece_type == PieceType::Rat)
            })
    }

    /// Count the uncaptured pieces belonging to the given side.
    pub fn count_active(&self, side: Side) -> usize {
        self.pieces
            .iter()
            .filter(|e| e.piece.side == side && !e.captured)
            .count()
    }
}

impl Display for Board {
    /// A board string: nine rows separated by `/`, each a run-length-encoded mix of piece
    /// letters (uppercase north, lowercase south) and empty-square counts.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            let mut n_empty = 0;
            for col in 0..COLS {
                let pos = Position::new_unchecked(row, col);
                if let Some(piece) = self.piece_at(pos) {
                    if n_empty > 0 {
                        write!(f, "{n_empty}")?;
                        n_empty = 0;
                    }
                    write!(f, "{}", char::from(piece))?;
                } else {
                    n_empty += 1;
                }
            }
            if n_empty > 0 {
                write!(f, "{n_empty}")?;
            }
            if row < ROWS - 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse a board string in the format produced by the `Display` implementation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != ROWS as usize {
            return Err(BadLineLen(rows.len()));
        }
        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0u8;
            for c in row_str.chars() {
                if let Some(n) = c.to_digit(10) {
                    // Digit runs are accumulated checked; a row claiming more squares than the
                    // board has is malformed, however it is spelled.
                    col = col
                        .checked_add(n as u8)
                        .filter(|&c| c <= COLS)
                        .ok_or(BadLineLen(row_str.len()))?;
                } else {
                    if col >= COLS {
                        return Err(BadLineLen(row_str.len()));
                    }
                    let piece = Piece::try_from(c).map_err(|_| BadChar(c))?;
                    board.spawn(piece, Position::new_unchecked(row as u8, col));
                    col += 1;
                }
            }
            if col != COLS {
                return Err(BadLineLen(row_str.len()));
            }
        }
        Ok(board)
    }
}
