//! The standard starting position. Only north's placements are listed; south's are derived by
//! mirroring through the centre of the board.

use crate::pieces::PieceType;
use crate::pieces::PieceType::{Cat, Dog, Elephant, Leopard, Lion, Rat, Tiger, Wolf};
use crate::tiles::Position;

/// North's eight opening placements. The lion and tiger hold the back corners, the dog and cat
/// the second row, and the remaining animals the third.
pub const NORTH_PLACEMENTS: [(PieceType, Position); 8] = [
    (Lion, Position::new_unchecked(0, 0)),
    (Tiger, Position::new_unchecked(0, 6)),
    (Dog, Position::new_unchecked(1, 1)),
    (Cat, Position::new_unchecked(1, 5)),
    (Rat, Position::new_unchecked(2, 0)),
    (Leopard, Position::new_unchecked(2, 2)),
    (Wolf, Position::new_unchecked(2, 4)),
    (Elephant, Position::new_unchecked(2, 6)),
];

/// Board strings for well-known positions.
pub mod boards {
    /// The standard starting position.
    pub const STANDARD: &str = "L5T/1D3C1/R1P1W1E/7/7/7/e1w1p1r/1c3d1/t5l";
}

#[cfg(test)]
mod tests {
    use crate::board::geometry;
    use crate::game::Game;
    use crate::preset::{boards, NORTH_PLACEMENTS};

    #[test]
    fn test_standard_setup() {
        let game = Game::new("a", "b");
        assert_eq!(game.board().to_string(), boards::STANDARD);
    }

    #[test]
    fn test_placements_on_sensible_squares() {
        // No piece starts in the water, on a den or on a trap.
        for (_, pos) in NORTH_PLACEMENTS {
            assert_eq!(geometry::classify(pos), geometry::Terrain::Land);
        }
    }
}
