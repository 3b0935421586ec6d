//! The fixed terrain of the board: two 3x2 blocks of water forming the river, a den on each
//! baseline and three traps around each den. Terrain is a pure function of the coordinates and
//! never changes over the course of a game.

use crate::pieces::Side;
use crate::tiles::Position;

/// The classification of a single board square. Every square has exactly one classification;
/// dens and traps always belong to a specific side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Terrain {
    Land,
    Water,
    Den(Side),
    Trap(Side),
}

/// The river: two 3x2 blocks spanning rows 3-5.
const WATER: [Position; 12] = [
    Position::new_unchecked(3, 1),
    Position::new_unchecked(3, 2),
    Position::new_unchecked(4, 1),
    Position::new_unchecked(4, 2),
    Position::new_unchecked(5, 1),
    Position::new_unchecked(5, 2),
    Position::new_unchecked(3, 4),
    Position::new_unchecked(3, 5),
    Position::new_unchecked(4, 4),
    Position::new_unchecked(4, 5),
    Position::new_unchecked(5, 4),
    Position::new_unchecked(5, 5),
];

const NORTH_DEN: Position = Position::new_unchecked(0, 3);
const SOUTH_DEN: Position = Position::new_unchecked(8, 3);

const NORTH_TRAPS: [Position; 3] = [
    Position::new_unchecked(0, 2),
    Position::new_unchecked(1, 3),
    Position::new_unchecked(0, 4),
];

const SOUTH_TRAPS: [Position; 3] = [
    Position::new_unchecked(8, 4),
    Position::new_unchecked(7, 3),
    Position::new_unchecked(8, 2),
];

/// Classify the given square.
pub fn classify(pos: Position) -> Terrain {
    for side in [Side::North, Side::South] {
        if is_den(pos, side) {
            return Terrain::Den(side);
        }
        if is_trap(pos, side) {
            return Terrain::Trap(side);
        }
    }
    if is_water(pos) {
        Terrain::Water
    } else {
        Terrain::Land
    }
}

/// Whether the given square is part of the river.
pub fn is_water(pos: Position) -> bool {
    WATER.contains(&pos)
}

/// Whether the given square is the den belonging to the given side.
pub fn is_den(pos: Position, side: Side) -> bool {
    den(side) == pos
}

/// Whether the given square is one of the three traps belonging to the given side.
pub fn is_trap(pos: Position, side: Side) -> bool {
    traps(side).contains(&pos)
}

/// The den square of the given side.
pub fn den(side: Side) -> Position {
    match side {
        Side::North => NORTH_DEN,
        Side::South => SOUTH_DEN,
    }
}

/// The three trap squares of the given side.
pub fn traps(side: Side) -> [Position; 3] {
    match side {
        Side::North => NORTH_TRAPS,
        Side::South => SOUTH_TRAPS,
    }
}

/// Get all the squares strictly between the given two squares. If the given squares do not share
/// a row or column, an empty vector is returned.
pub fn positions_between(p1: Position, p2: Position) -> Vec<Position> {
    let mut positions: Vec<Position> = vec![];
    let (r1, c1, r2, c2) = (p1.row(), p1.col(), p2.row(), p2.col());
    if r1 == r2 {
        let col_range = if c1 > c2 { (c2 + 1)..c1 } else { (c1 + 1)..c2 };
        for col in col_range {
            positions.push(Position::new_unchecked(r1, col));
        }
    } else if c1 == c2 {
        let row_range = if r1 > r2 { (r2 + 1)..r1 } else { (r1 + 1)..r2 };
        for row in row_range {
            positions.push(Position::new_unchecked(row, c1));
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use crate::board::geometry::{classify, den, positions_between, traps, Terrain};
    use crate::pieces::Side::{North, South};
    use crate::tiles::Position;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_classification_counts() {
        let mut water = 0;
        let mut dens = 0;
        let mut north_traps = 0;
        let mut south_traps = 0;
        let mut land = 0;
        for p in Position::iter_all() {
            match classify(p) {
                Terrain::Water => water += 1,
                Terrain::Den(_) => dens += 1,
                Terrain::Trap(North) => north_traps += 1,
                Terrain::Trap(South) => south_traps += 1,
                Terrain::Land => land += 1,
            }
        }
        assert_eq!(water, 12);
        assert_eq!(dens, 2);
        assert_eq!(north_traps, 3);
        assert_eq!(south_traps, 3);
        assert_eq!(land, 9 * 7 - 12 - 2 - 6);
    }

    #[test]
    fn test_special_squares() {
        assert_eq!(classify(pos(0, 3)), Terrain::Den(North));
        assert_eq!(classify(pos(8, 3)), Terrain::Den(South));
        assert_eq!(den(North), pos(0, 3));
        assert_eq!(den(South), pos(8, 3));
        for t in traps(North) {
            assert_eq!(classify(t), Terrain::Trap(North));
        }
        for t in traps(South) {
            assert_eq!(classify(t), Terrain::Trap(South));
        }
        assert_eq!(classify(pos(4, 1)), Terrain::Water);
        assert_eq!(classify(pos(4, 3)), Terrain::Land);
        assert_eq!(classify(pos(0, 0)), Terrain::Land);
    }

    #[test]
    fn test_positions_between() {
        let b = positions_between(pos(3, 0), pos(3, 3));
        assert_eq!(b, vec![pos(3, 1), pos(3, 2)]);

        let b = positions_between(pos(3, 3), pos(3, 0));
        assert_eq!(b, vec![pos(3, 1), pos(3, 2)]);

        let b = positions_between(pos(2, 1), pos(6, 1));
        assert_eq!(b, vec![pos(3, 1), pos(4, 1), pos(5, 1)]);

        assert!(positions_between(pos(2, 1), pos(3, 2)).is_empty());
        assert!(positions_between(pos(2, 1), pos(2, 1)).is_empty());
        assert!(positions_between(pos(2, 1), pos(2, 2)).is_empty());
    }
}
