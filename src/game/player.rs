use crate::{PLAYER1_GLYPH, PLAYER2_GLYPH};

/// Which side of the board a piece or player belongs to. South is player 1
/// (bottom rank, moves first); North is player 2 (top rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    South,
    North,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Side::South => PLAYER1_GLYPH,
            Side::North => PLAYER2_GLYPH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub glyph: char,
    pub side: Side,
}

impl Player {
    pub fn new(name: &str, side: Side) -> Self {
        Self {
            name: name.to_string(),
            glyph: side.glyph(),
            side,
        }
    }
}
