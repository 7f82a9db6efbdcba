use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use tracing::warn;

use crate::ui::render;
use crate::{Board, CROWN_GLYPH, PLAYER1_GLYPH, PLAYER2_GLYPH};

/// The narrow boundary the game loop talks through: show the board, collect a
/// line, say something. Tests substitute a scripted implementation.
pub trait Console {
    fn render_board(&mut self, board: &Board);

    /// Prints `prompt` without a newline, then blocks for one line of input.
    /// The trailing line terminator is stripped. Returns None once the input
    /// stream is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn announce(&mut self, message: &str);
}

/// Console backed by stdin/stdout with colored piece glyphs.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {
    fn render_board(&mut self, board: &Board) {
        let mut out = io::stdout();
        if let Err(err) = write_board(&mut out, board) {
            warn!(%err, "board render failed");
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut out = io::stdout();
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn announce(&mut self, message: &str) {
        println!("{message}");
    }
}

fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for line in render::board_lines(board) {
        for ch in line.chars() {
            match glyph_color(ch) {
                Some(color) => queue!(out, SetForegroundColor(color), Print(ch), ResetColor)?,
                None => queue!(out, Print(ch))?,
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

fn glyph_color(ch: char) -> Option<Color> {
    if ch == PLAYER1_GLYPH {
        Some(Color::Red)
    } else if ch == PLAYER2_GLYPH {
        Some(Color::Blue)
    } else if ch == CROWN_GLYPH {
        Some(Color::Yellow)
    } else {
        None
    }
}
