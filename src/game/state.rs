use std::io;

use thiserror::Error;
use tracing::debug;

use crate::game::{Board, Direction, Player, Side};
use crate::io::Console;

/// A fully parsed move: zero-based cell coordinates plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Everything that can go wrong between reading a line and mutating the
/// board. All of these are recoverable: the same player is re-prompted and
/// the turn never advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid format, expected (C)olumn(R)ow(D)irection, ex: A5U")]
    Format,
    #[error("invalid row={0}")]
    Row(i32),
    #[error("invalid column={0}")]
    Column(i32),
    #[error("invalid direction={0}")]
    Direction(char),
    #[error("cell is empty, select another cell")]
    EmptyCell,
    #[error("cell occupied by other player, select another cell")]
    WrongOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won(Side),
    Quit,
}

pub struct Game {
    players: [Player; 2],
    current: usize,
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self {
            players: [
                Player::new("Player 1", Side::South),
                Player::new("Player 2", Side::North),
            ],
            current: 0,
            board: Board::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Parses a case-insensitive `<column><row><direction>` token such as
    /// `A5U`. The row digit is 1-based on screen; bounds come from the board's
    /// own dimensions. Characters past the third are ignored.
    pub fn parse_move(&self, input: &str) -> Result<Move, MoveError> {
        let token = input.to_ascii_lowercase();
        let mut chars = token.chars();
        let (Some(col_ch), Some(row_ch), Some(dir_ch)) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(MoveError::Format);
        };

        let col = col_ch as i32 - 'a' as i32;
        let row = row_ch.to_digit(10).map_or(-1, |digit| digit as i32 - 1);

        if row < 0 || row >= self.board.height() as i32 {
            return Err(MoveError::Row(row + 1));
        }
        if col < 0 || col >= self.board.width() as i32 {
            return Err(MoveError::Column(col + 1));
        }
        let direction = Direction::from_letter(dir_ch).ok_or(MoveError::Direction(dir_ch))?;

        Ok(Move {
            row: row as usize,
            col: col as usize,
            direction,
        })
    }

    /// Checks that the selected cell holds one of the current player's pieces
    /// and executes the slide. A slide that cannot advance is still a success.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.board.get(mv.row, mv.col).occupant.side() {
            None => return Err(MoveError::EmptyCell),
            Some(side) if side != self.current_player().side => {
                return Err(MoveError::WrongOwner);
            }
            Some(_) => {}
        }
        self.board.slide(mv.row, mv.col, mv.direction);
        Ok(())
    }

    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Runs one match to completion: prompt, parse, validate, slide, check for
    /// the win, hand the turn over. Rejected input re-prompts the same player.
    /// `quit` (any case) or end of input abandons the match.
    pub fn play(&mut self, console: &mut dyn Console) -> io::Result<MatchOutcome> {
        loop {
            console.render_board(&self.board);

            let player = self.current_player();
            let prompt = format!("[{} ({})] Enter move: ", player.name, player.glyph);
            let Some(input) = console.read_line(&prompt)? else {
                return Ok(MatchOutcome::Quit);
            };
            let input = input.trim();
            if input.eq_ignore_ascii_case("quit") {
                return Ok(MatchOutcome::Quit);
            }

            let mv = match self.parse_move(input) {
                Ok(mv) => mv,
                Err(err) => {
                    console.announce(&err.to_string());
                    continue;
                }
            };
            debug!(row = mv.row, col = mv.col, direction = ?mv.direction, "executing move");
            if let Err(err) = self.apply_move(mv) {
                console.announce(&err.to_string());
                continue;
            }

            if self.board.is_won() {
                console.render_board(&self.board);
                let winner = self.current_player();
                console.announce(&format!("{} wins", winner.name));
                return Ok(MatchOutcome::Won(winner.side));
            }
            self.advance_turn();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::game::Occupant;

    struct Script {
        inputs: VecDeque<String>,
        announcements: Vec<String>,
        renders: usize,
    }

    impl Script {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                announcements: Vec::new(),
                renders: 0,
            }
        }
    }

    impl Console for Script {
        fn render_board(&mut self, _board: &Board) {
            self.renders += 1;
        }

        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.inputs.pop_front())
        }

        fn announce(&mut self, message: &str) {
            self.announcements.push(message.to_string());
        }
    }

    #[test]
    fn parses_tokens_in_either_case() {
        let game = Game::new();
        let mv = game.parse_move("A5U").unwrap();
        assert_eq!((mv.row, mv.col, mv.direction), (4, 0, Direction::Up));
        let mv = game.parse_move("c1d").unwrap();
        assert_eq!((mv.row, mv.col, mv.direction), (0, 2, Direction::Down));
        let mv = game.parse_move("e3L").unwrap();
        assert_eq!((mv.row, mv.col, mv.direction), (2, 4, Direction::Left));
    }

    #[test]
    fn rejects_short_tokens() {
        assert_eq!(Game::new().parse_move("a5"), Err(MoveError::Format));
        assert_eq!(Game::new().parse_move(""), Err(MoveError::Format));
    }

    #[test]
    fn rejects_out_of_range_rows_before_columns() {
        // Row 9 resolves to index 8, outside a 5-row board.
        assert_eq!(Game::new().parse_move("z9x"), Err(MoveError::Row(9)));
        assert_eq!(Game::new().parse_move("a0u"), Err(MoveError::Row(0)));
        assert_eq!(Game::new().parse_move("a6u"), Err(MoveError::Row(6)));
        // A non-digit row reads as out of range, not as a format error.
        assert_eq!(Game::new().parse_move("aau"), Err(MoveError::Row(0)));
    }

    #[test]
    fn rejects_out_of_range_columns() {
        assert_eq!(Game::new().parse_move("f1u"), Err(MoveError::Column(6)));
    }

    #[test]
    fn rejects_unknown_directions_at_the_parse_boundary() {
        assert_eq!(Game::new().parse_move("c1x"), Err(MoveError::Direction('x')));
    }

    #[test]
    fn rejects_moves_from_empty_cells() {
        let mut game = Game::new();
        let mv = game.parse_move("a3u").unwrap();
        assert_eq!(game.apply_move(mv), Err(MoveError::EmptyCell));
    }

    #[test]
    fn rejects_moving_the_other_players_pieces() {
        let mut game = Game::new();
        // Player 1 to move; A1 holds a north pawn.
        let mv = game.parse_move("a1d").unwrap();
        assert_eq!(game.apply_move(mv), Err(MoveError::WrongOwner));
    }

    #[test]
    fn turns_cycle_through_both_players() {
        let mut game = Game::new();
        assert_eq!(game.current_player().side, Side::South);
        game.advance_turn();
        assert_eq!(game.current_player().side, Side::North);
        game.advance_turn();
        assert_eq!(game.current_player().side, Side::South);
    }

    #[test]
    fn quit_ends_the_match_in_any_case() {
        let mut game = Game::new();
        let mut console = Script::new(&["quit"]);
        assert_eq!(game.play(&mut console).unwrap(), MatchOutcome::Quit);

        let mut game = Game::new();
        let mut console = Script::new(&["QUIT"]);
        assert_eq!(game.play(&mut console).unwrap(), MatchOutcome::Quit);
    }

    #[test]
    fn exhausted_input_ends_the_match() {
        let mut game = Game::new();
        let mut console = Script::new(&[]);
        assert_eq!(game.play(&mut console).unwrap(), MatchOutcome::Quit);
        assert_eq!(console.renders, 1);
    }

    #[test]
    fn failed_moves_keep_the_turn_and_announce_the_error() {
        let mut game = Game::new();
        let mut console = Script::new(&["a9u", "a1d", "a5u", "quit"]);
        assert_eq!(game.play(&mut console).unwrap(), MatchOutcome::Quit);
        // Two rejections for player 1, then one success, so player 2 held the
        // turn when the script ran out.
        assert_eq!(console.announcements.len(), 2);
        assert_eq!(game.current_player().side, Side::North);
    }

    #[test]
    fn scripted_match_ends_when_the_king_stops_on_the_master_cell() {
        let mut game = Game::new();
        let mut console = Script::new(&[
            "D5U", // south pawn up to (1,3)
            "A1D", // north pawn down to (3,0)
            "B5U", // south pawn up to (1,1)
            "E1D", // north pawn down to (3,4)
            "B2R", // south pawn right to (1,2), one short of (1,3)
            "A4D", // north pawn blocked by (4,0): a legal no-op
            "C5U", // south king climbs and stops exactly on the master cell
        ]);
        let outcome = game.play(&mut console).unwrap();
        assert_eq!(outcome, MatchOutcome::Won(Side::South));
        assert_eq!(game.board().get(2, 2).occupant, Occupant::King(Side::South));
        assert_eq!(game.board().piece_count(), 10);
        assert_eq!(console.announcements, vec!["Player 1 wins".to_string()]);
    }
}
