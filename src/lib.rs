pub mod display;
pub mod grid;
pub mod io;
pub mod logger;
pub mod rules;
pub mod solver;

pub use grid::{Digit, Grid, Pos, EMPTY};
pub use rules::{attempt_place, is_legal_move};
pub use solver::{solve, solve_with_stats, timed_solve, SolveStats};
