use std::error::Error;

use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod game;
mod io;
mod ui;

pub use config::{BOARD_H, BOARD_W, CELL_W, CROWN_GLYPH, PLAYER1_GLYPH, PLAYER2_GLYPH};
pub use game::{
    Board, Cell, CellKind, Direction, Game, MatchOutcome, Move, MoveError, Occupant, Player, Side,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    app::run()
}
