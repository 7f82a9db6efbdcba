use crate::game::{Board, CellKind, Occupant};
use crate::{CELL_W, CROWN_GLYPH};

/// Renders the board as plain text lines: lettered column headers, bordered
/// cell interiors, 1-based row labels alongside each row. Kings carry a crown
/// on the top line of their cell; the master cell gets a bracket motif.
pub fn board_lines(board: &Board) -> Vec<String> {
    let border = "-".repeat(grid_width(board));
    let mut lines = vec![header_line(board), border.clone()];
    for row in 0..board.height() {
        let (top, bottom) = row_lines(board, row);
        lines.push(top);
        lines.push(bottom);
        lines.push(border.clone());
    }
    lines
}

fn grid_width(board: &Board) -> usize {
    board.width() * CELL_W + board.width() + 1
}

fn header_line(board: &Board) -> String {
    let mut chars = vec![' '; grid_width(board)];
    for col in 0..board.width() {
        chars[1 + col * (CELL_W + 1) + CELL_W / 2] = (b'A' + col as u8) as char;
    }
    chars.into_iter().collect()
}

fn row_lines(board: &Board, row: usize) -> (String, String) {
    let mut top = String::from("|");
    let mut bottom = String::from("|");
    for col in 0..board.width() {
        let cell = board.get(row, col);
        let base = match cell.kind {
            CellKind::Normal => " ".repeat(CELL_W),
            CellKind::Master => format!("|{}|", "-".repeat(CELL_W - 2)),
        };
        let mid = CELL_W / 2;
        let cell_top = match cell.occupant {
            Occupant::King(_) => replace_at(&base, mid, CROWN_GLYPH),
            _ => base.clone(),
        };
        let cell_bottom = match cell.occupant.side() {
            Some(side) => replace_at(&base, mid, side.glyph()),
            None => base,
        };
        top.push_str(&cell_top);
        top.push('|');
        bottom.push_str(&cell_bottom);
        bottom.push('|');
    }
    top.push_str(&format!("  {}", row + 1));
    (top, bottom)
}

fn replace_at(s: &str, idx: usize, ch: char) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i == idx { ch } else { c })
        .collect()
}
