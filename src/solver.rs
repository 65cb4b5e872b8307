use crate::grid::{Grid, Pos, EMPTY};
use crate::rules::attempt_place;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

// Row-major visiting order: row 0 left to right, then row 1, and so on.
static SCAN_ORDER: Lazy<Vec<Pos>> = Lazy::new(|| {
    (0..9).cartesian_product(0..9).map(|(r, c)| Pos { r, c }).collect()
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Placements that passed the rule engine during the search.
    pub nodes: u64,
    /// Placements reverted after their subtree failed.
    pub backtracks: u64,
}

/// Exhaustive depth-first search over the empty cells. Returns true and
/// leaves the grid fully populated if a solution is reachable; returns false
/// and leaves the grid exactly as it was passed in otherwise.
///
/// Cells are visited in row-major order and digits tried ascending, so the
/// outcome is deterministic for a given input. Worst case is exponential in
/// the number of empty cells; there is no internal deadline, so a caller
/// wanting a time bound must impose one around this call.
pub fn solve(grid: &mut Grid) -> bool {
    solve_with_stats(grid).0
}

pub fn solve_with_stats(grid: &mut Grid) -> (bool, SolveStats) {
    let mut stats = SolveStats::default();
    let solved = search(grid, &mut stats);
    (solved, stats)
}

fn search(grid: &mut Grid, stats: &mut SolveStats) -> bool {
    // A complete grid reached through rule-checked placements is a solution;
    // no separate consistency pass is needed.
    let Some(p) = first_empty(grid) else { return true };
    for d in 1..=9 {
        if attempt_place(grid, p, d) {
            stats.nodes += 1;
            if search(grid, stats) {
                return true;
            }
            grid.clear(p);
            stats.backtracks += 1;
        }
    }
    // Every digit failed here: backtrack to the previous cell.
    false
}

fn first_empty(grid: &Grid) -> Option<Pos> {
    SCAN_ORDER.iter().copied().find(|&p| grid.get(p) == EMPTY)
}

/// Wall-clock timing wrapper around [`solve`]. Measurement only: it cannot
/// interrupt a running search, and if the surrounding task is abandoned
/// mid-call no guarantee is made about the grid's state at that point.
pub fn timed_solve(grid: &mut Grid) -> (bool, Duration) {
    let start = Instant::now();
    let solved = solve(grid);
    (solved, start.elapsed())
}
