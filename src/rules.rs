//! Move legality rules. A placement is legal only if all six predicates
//! hold; `attempt_place` is the only function here that mutates the grid.

use crate::grid::{Digit, Grid, Pos, EMPTY};

/// Criterion 1: the digit is one of the nine playable symbols. The empty
/// marker and anything else are rejected.
pub fn is_valid_digit(d: Digit) -> bool { (1..=9).contains(&d) }

/// Criterion 2: row and column lie on the board. The unsigned index type
/// already rules out negative coordinates, so both upper bounds remain.
pub fn position_in_range(p: Pos) -> bool { p.r < 9 && p.c < 9 }

/// Criterion 3: the target cell is vacant. Checked before the uniqueness
/// scans; an occupied cell holding the candidate digit would otherwise look
/// row/col/box-consistent.
pub fn cell_empty(grid: &Grid, p: Pos) -> bool { grid.get(p) == EMPTY }

/// Criterion 4: the digit does not already appear in the row.
pub fn not_in_row(grid: &Grid, row: usize, d: Digit) -> bool {
    (0..9).all(|c| grid.get(Pos { r: row, c }) != d)
}

/// Criterion 5: the digit does not already appear in the column.
pub fn not_in_col(grid: &Grid, col: usize, d: Digit) -> bool {
    (0..9).all(|r| grid.get(Pos { r, c: col }) != d)
}

/// Criterion 6: the digit does not already appear in the 3x3 box.
pub fn not_in_box(grid: &Grid, p: Pos, d: Digit) -> bool {
    let o = p.box_origin();
    (0..3).all(|dr| (0..3).all(|dc| grid.get(Pos { r: o.r + dr, c: o.c + dc }) != d))
}

/// Conjunction of all six criteria. Pure; short-circuits left to right.
pub fn is_legal_move(grid: &Grid, p: Pos, d: Digit) -> bool {
    is_valid_digit(d)
        && position_in_range(p)
        && cell_empty(grid, p)
        && not_in_row(grid, p.r, d)
        && not_in_col(grid, p.c, d)
        && not_in_box(grid, p, d)
}

/// Places the digit if the move is legal. Returns true and writes the cell
/// on success; returns false and leaves the grid untouched otherwise.
pub fn attempt_place(grid: &mut Grid, p: Pos, d: Digit) -> bool {
    if is_legal_move(grid, p, d) {
        grid.set(p, d);
        return true;
    }
    false
}
