use std::error::Error;

use crossterm::style::Stylize;
use tracing::info;

use crate::io::{Console, Terminal};
use crate::Game;

/// Process entry: banner, then one match per loop with a rematch prompt in
/// between. Every match gets a fresh Game; nothing carries over.
pub fn run() -> Result<(), Box<dyn Error>> {
    let mut console = Terminal::new();
    print_banner();
    if console.read_line("Press enter to begin")?.is_none() {
        return Ok(());
    }

    loop {
        let mut game = Game::new();
        let outcome = game.play(&mut console)?;
        info!(?outcome, "match over");

        let Some(answer) = console.read_line("Play again? (Y/n) ")? else {
            break;
        };
        let answer = answer.trim().to_ascii_lowercase();
        if !answer.is_empty() && !answer.starts_with('y') {
            break;
        }
    }
    Ok(())
}

fn print_banner() {
    println!("{}", "=============".bold());
    println!("{}", "King's Valley".bold());
    println!("{}", "=============".bold());
    println!("Move format: (C)olumn(R)ow(D)irection");
    println!("ex: A5U moves the piece in cell A5 (bottom left) in the Upward direction.");
    println!("Inputting 'quit' will end the game.");
}
