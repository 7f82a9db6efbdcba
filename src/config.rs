// Shared board/render constants.
pub const BOARD_W: usize = 5;
pub const BOARD_H: usize = 5;
pub const CELL_W: usize = 5; // cell interior width in characters
pub const PLAYER1_GLYPH: char = 'X';
pub const PLAYER2_GLYPH: char = 'O';
pub const CROWN_GLYPH: char = '^';
