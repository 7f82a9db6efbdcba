use tracing::debug;

use super::player::Side;
use crate::{BOARD_H, BOARD_W};

/// What a cell currently holds. One king per side exists at any time; the
/// engine only relocates pieces, it never creates or removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Pawn(Side),
    King(Side),
}

impl Occupant {
    pub fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::Pawn(side) | Occupant::King(side) => Some(side),
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Occupant::King(_))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

/// Master is the single central cell the kings race for; fixed at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Normal,
    Master,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub occupant: Occupant,
    pub kind: CellKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a (lowercased) direction letter to its enum; anything outside
    /// u/d/l/r is unrecognized.
    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds the opening position: each side's five pieces on its back rank
    /// with the king centered, and the master cell at the board's center.
    pub fn new() -> Self {
        let empty = Cell {
            occupant: Occupant::Empty,
            kind: CellKind::Normal,
        };
        let mut board = Self {
            width: BOARD_W,
            height: BOARD_H,
            cells: vec![empty; BOARD_W * BOARD_H],
        };

        let center = board.width / 2;
        board.cell_mut(board.height / 2, center).kind = CellKind::Master;
        for col in 0..board.width {
            board.cell_mut(0, col).occupant = if col == center {
                Occupant::King(Side::North)
            } else {
                Occupant::Pawn(Side::North)
            };
            board.cell_mut(board.height - 1, col).occupant = if col == center {
                Occupant::King(Side::South)
            } else {
                Occupant::Pawn(Side::South)
            };
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.occupant.is_empty())
            .count()
    }

    /// Slides the piece at (row, col) one cell at a time until the next cell
    /// is off the board or occupied. Stopping immediately is legal; nothing is
    /// ever captured or displaced.
    pub fn slide(&mut self, row: usize, col: usize, direction: Direction) {
        let (dr, dc) = direction.delta();
        let (mut row, mut col) = (row as i32, col as i32);
        loop {
            let cur = self.idx(row as usize, col as usize);
            if self.cells[cur].occupant.is_empty() {
                debug!(row, col, "nothing to slide");
                break;
            }
            let (next_row, next_col) = (row + dr, col + dc);
            if !self.in_bounds(next_row, next_col) {
                break;
            }
            let next = self.idx(next_row as usize, next_col as usize);
            if !self.cells[next].occupant.is_empty() {
                break;
            }
            self.cells[next].occupant = self.cells[cur].occupant;
            self.cells[cur].occupant = Occupant::Empty;
            row = next_row;
            col = next_col;
        }
    }

    /// The match is won the instant either side's king sits on the master
    /// cell. A king passing through it mid-slide does not count; the slide has
    /// to stop there.
    pub fn is_won(&self) -> bool {
        self.get(self.height / 2, self.width / 2).occupant.is_king()
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.idx(row, col);
        &mut self.cells[idx]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
