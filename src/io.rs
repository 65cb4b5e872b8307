use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

use crate::grid::{digit_from_char, Grid, Pos, EMPTY};

/// Parses the on-disk board convention: nine lines of nine symbols, each a
/// digit '1'..='9' or '.' (or '0') for an empty cell. Shape and symbols are
/// checked here so the core can assume a well-formed grid afterwards.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut g = Grid::empty();
    let mut rows = 0usize;
    for (r, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        if r >= 9 { bail!("expected 9 rows, found more") }
        let line = line.trim_end();
        if line.chars().count() != 9 {
            bail!("row {} must have 9 symbols, got {}", r + 1, line.chars().count())
        }
        for (c, ch) in line.chars().enumerate() {
            match ch {
                '.' | '0' => {}
                '1'..='9' => g.set(Pos { r, c }, digit_from_char(ch)),
                _ => bail!("invalid symbol {ch:?} at row {}, column {}", r + 1, c + 1),
            }
        }
        rows += 1;
    }
    if rows != 9 { bail!("expected 9 rows, got {rows}") }
    Ok(g)
}

pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_grid(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Serializes in the same convention the loader reads: one row per line,
/// digits for filled cells and '.' for empty ones.
pub fn grid_to_text(grid: &Grid) -> String {
    let mut s = String::with_capacity(90);
    for r in 0..9 {
        for c in 0..9 {
            let d = grid.get(Pos { r, c });
            s.push(if d == EMPTY { '.' } else { (b'0' + d) as char });
        }
        s.push('\n');
    }
    s
}

pub fn save_grid(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, grid_to_text(grid)).with_context(|| format!("writing {}", path.display()))
}
