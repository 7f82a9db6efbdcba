pub mod board;
pub mod player;
pub mod state;

pub use board::{Board, Cell, CellKind, Direction, Occupant};
pub use player::{Player, Side};
pub use state::{Game, MatchOutcome, Move, MoveError};
