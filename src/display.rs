use colored::Colorize;

use crate::grid::{Grid, Pos, EMPTY};

/// Renders the board the way Sudoku players expect it on paper: columns
/// numbered 1-9 across the top, rows lettered A-I down the side, heavy
/// frames at the 3x3 box boundaries.
pub fn render(grid: &Grid) -> String {
    render_impl(grid, false)
}

/// Same layout as [`render`], with labels and digits styled for a terminal.
pub fn render_colored(grid: &Grid) -> String {
    render_impl(grid, true)
}

fn render_impl(grid: &Grid, color: bool) -> String {
    let mut s = String::new();
    s.push_str("   ");
    for c in 0..9 {
        let label = ((b'1' + c) as char).to_string();
        if color {
            s.push_str(&format!(" {}  ", label.bold()));
        } else {
            s.push_str(&format!(" {}  ", label));
        }
    }
    s.push('\n');
    for r in 0..9u8 {
        s.push_str(&frame(r));
        let label = ((b'A' + r) as char).to_string();
        if color {
            s.push_str(&format!("{} ", label.bold()));
        } else {
            s.push_str(&format!("{} ", label));
        }
        for c in 0..9u8 {
            s.push(if c % 3 == 0 { '|' } else { ':' });
            let d = grid.get(Pos { r: r as usize, c: c as usize });
            let symbol = if d == EMPTY { ' ' } else { (b'0' + d) as char };
            if color && d != EMPTY {
                s.push_str(&format!(" {} ", symbol.to_string().cyan()));
            } else {
                s.push_str(&format!(" {} ", symbol));
            }
        }
        s.push_str("|\n");
    }
    s.push_str(&frame(9));
    s
}

// Heavy frame at box boundaries, light frame between the rows inside a box.
fn frame(row: u8) -> String {
    if row % 3 == 0 {
        "  +===========+===========+===========+\n".to_string()
    } else {
        "  +---+---+---+---+---+---+---+---+---+\n".to_string()
    }
}
