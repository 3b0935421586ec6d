//! Players and their rosters. A roster is the fixed set of piece ids that were placed for a
//! side at setup (or load); whether a given piece is still in play is read from the board.

use crate::board::state::{Board, PieceId};
use crate::pieces::Side;

/// One of the two players. Holds a display name and the ids of the eight (or, after a load,
/// possibly fewer) pieces placed for this player. The roster never changes after setup;
/// captures are reflected by the pieces' flags in the board arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    side: Side,
    roster: Vec<PieceId>,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side, roster: Vec<PieceId>) -> Self {
        Self {
            name: name.into(),
            side,
            roster,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// The ids of all pieces placed for this player, captured or not.
    pub fn roster(&self) -> &[PieceId] {
        &self.roster
    }

    /// Iterate over the ids of this player's pieces still on the board.
    pub fn active_pieces<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = PieceId> + 'a {
        self.roster
            .iter()
            .copied()
            .filter(|id| !board.entry(*id).captured)
    }

    /// Whether this player has no pieces left on the board and has therefore lost.
    pub fn has_lost(&self, board: &Board) -> bool {
        self.active_pieces(board).next().is_none()
    }
}
