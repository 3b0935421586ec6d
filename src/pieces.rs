use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadPlayerIndex};
use crate::pieces::PieceType::{Cat, Dog, Elephant, Leopard, Lion, Rat, Tiger, Wolf};
use crate::pieces::Side::{North, South};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The two sides of the game. `North`'s den sits on row 0 and `South`'s on row 8; the two
/// starting positions are mirror images of each other across the river.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    North = 0,
    South = 1,
}

impl Side {
    /// Return the other side.
    pub fn other(&self) -> Self {
        match self {
            North => South,
            South => North,
        }
    }

    /// The side's player index (0 for north, 1 for south), as used in the snapshot and move-log
    /// formats.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        match index {
            0 => Ok(North),
            1 => Ok(South),
            other => Err(BadPlayerIndex(other)),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            North => write!(f, "North"),
            South => write!(f, "South"),
        }
    }
}

/// The eight animals. The discriminant of each variant is its rank: the integer strength that
/// governs capture eligibility, from the rat at 1 to the elephant at 8.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Rat = 1,
    Cat = 2,
    Dog = 3,
    Wolf = 4,
    Leopard = 5,
    Tiger = 6,
    Lion = 7,
    Elephant = 8,
}

impl PieceType {
    /// All piece types, in rank order.
    pub const ALL: [PieceType; 8] = [Rat, Cat, Dog, Wolf, Leopard, Tiger, Lion, Elephant];

    /// The piece's rank.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this animal may stand on a water square. True only for the rat.
    pub fn can_enter_water(self) -> bool {
        self == Rat
    }

    /// Whether this animal may leap over a straight run of water squares in one move. True only
    /// for the lion and the tiger.
    pub fn can_jump_water(self) -> bool {
        matches!(self, Lion | Tiger)
    }

    /// A single-letter symbol for the animal, as used in board strings and move records. Note
    /// that the leopard's letter is `P`, the tiger having claimed `T`.
    pub fn symbol(self) -> char {
        match self {
            Rat => 'R',
            Cat => 'C',
            Dog => 'D',
            Wolf => 'W',
            Leopard => 'P',
            Tiger => 'T',
            Lion => 'L',
            Elephant => 'E',
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rat => "Rat",
            Cat => "Cat",
            Dog => "Dog",
            Wolf => "Wolf",
            Leopard => "Leopard",
            Tiger => "Tiger",
            Lion => "Lion",
            Elephant => "Elephant",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<char> for PieceType {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'R' => Ok(Rat),
            'C' => Ok(Cat),
            'D' => Ok(Dog),
            'W' => Ok(Wolf),
            'P' => Ok(Leopard),
            'T' => Ok(Tiger),
            'L' => Ok(Lion),
            'E' => Ok(Elephant),
            other => Err(BadChar(other)),
        }
    }
}

/// An animal belonging to a particular side.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    /// Create a new piece of the given type and side.
    pub fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// The base capture rule, before the engine applies terrain modifiers (trap
    /// rank-nullification and the rat/water parity rules): a piece may capture an opposing piece
    /// of equal or lower rank, except that the rat may always capture the elephant and the
    /// elephant may never capture the rat.
    pub fn can_capture(&self, target: Piece) -> bool {
        if target.side == self.side {
            return false;
        }
        match (self.piece_type, target.piece_type) {
            (Rat, Elephant) => true,
            (Elephant, Rat) => false,
            (mover, target) => mover.rank() >= target.rank(),
        }
    }
}

impl From<Piece> for char {
    /// A single-character representation of a given piece: the animal's symbol, uppercase for
    /// north and lowercase for south.
    fn from(value: Piece) -> Self {
        let c = value.piece_type.symbol();
        match value.side {
            North => c,
            South => c.to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if !value.is_ascii_alphabetic() {
            return Err(BadChar(value));
        }
        let side = if value.is_ascii_uppercase() {
            North
        } else {
            South
        };
        Ok(Piece::new(PieceType::try_from(value)?, side))
    }
}

#[cfg(test)]
mod tests {
    use crate::pieces::PieceType::{Elephant, Leopard, Lion, Rat, Tiger};
    use crate::pieces::Side::{North, South};
    use crate::pieces::{Piece, PieceType};

    #[test]
    fn test_ranks() {
        let ranks: Vec<u8> = PieceType::ALL.iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_capabilities() {
        for pt in PieceType::ALL {
            assert_eq!(pt.can_enter_water(), pt == Rat);
            assert_eq!(pt.can_jump_water(), pt == Lion || pt == Tiger);
        }
    }

    #[test]
    fn test_base_capture() {
        // Equal rank captures in both directions, for every rank.
        for pt in PieceType::ALL {
            let n = Piece::new(pt, North);
            let s = Piece::new(pt, South);
            assert!(n.can_capture(s));
            assert!(s.can_capture(n));
            assert!(!n.can_capture(n));
        }
        // Higher rank captures lower, not vice versa.
        let lion = Piece::new(Lion, North);
        let leopard = Piece::new(Leopard, South);
        assert!(lion.can_capture(leopard));
        assert!(!leopard.can_capture(lion));
        // The rat/elephant pair is asymmetric, regardless of rank.
        let rat = Piece::new(Rat, North);
        let elephant = Piece::new(Elephant, South);
        assert!(rat.can_capture(elephant));
        assert!(!elephant.can_capture(rat));
    }

    #[test]
    fn test_char_round_trip() {
        for pt in PieceType::ALL {
            for side in [North, South] {
                let piece = Piece::new(pt, side);
                let c: char = piece.into();
                assert_eq!(Piece::try_from(c), Ok(piece));
            }
        }
        assert_eq!(char::from(Piece::new(Leopard, North)), 'P');
        assert_eq!(char::from(Piece::new(Tiger, South)), 't');
        assert!(Piece::try_from('x').is_err());
        assert!(Piece::try_from('3').is_err());
    }
}
