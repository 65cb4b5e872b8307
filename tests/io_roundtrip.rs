use pretty_assertions::assert_eq;
use rustdoku::display::render;
use rustdoku::io::{grid_to_text, load_grid, parse_grid, save_grid};
use std::{env, fs};

const PUZZLE: &str = "\
..467.912
6.21.5..8
19...2.67
8..7...23
42..53...
71...4856
9615372.4
287419.3.
3.5286.7.
";

#[test]
fn parse_then_serialize_is_identity() {
    let g = parse_grid(PUZZLE).unwrap();
    assert_eq!(grid_to_text(&g), PUZZLE);
}

#[test]
fn zero_reads_as_empty_marker() {
    let text = PUZZLE.replace('.', "0");
    let g = parse_grid(&text).unwrap();
    assert_eq!(g, parse_grid(PUZZLE).unwrap());
    // Serialization always writes dots.
    assert_eq!(grid_to_text(&g), PUZZLE);
}

#[test]
fn save_and_load_round_trip() {
    let g = parse_grid(PUZZLE).unwrap();
    let path = env::temp_dir().join(format!("rustdoku-roundtrip-{}.txt", std::process::id()));
    save_grid(&path, &g).unwrap();
    let loaded = load_grid(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(loaded, g);
}

#[test]
fn malformed_boards_are_rejected() {
    // Too few rows.
    let short: String = PUZZLE.lines().take(8).map(|l| format!("{l}\n")).collect();
    assert!(parse_grid(&short).is_err());
    // Too many rows.
    let long = format!("{PUZZLE}.........\n");
    assert!(parse_grid(&long).is_err());
    // A row of the wrong width.
    let wide = PUZZLE.replacen("6.21.5..8", "6.21.5..89", 1);
    assert!(parse_grid(&wide).is_err());
    // An alien symbol.
    let alien = PUZZLE.replacen('4', "X", 1);
    assert!(parse_grid(&alien).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = load_grid("definitely/not/here.txt").unwrap_err();
    assert!(format!("{err:#}").contains("definitely/not/here.txt"));
}

#[test]
fn render_layout() {
    let g = parse_grid(PUZZLE).unwrap();
    let out = render(&g);
    // Column header and box frames.
    assert!(out.contains("1   2   3"));
    assert!(out.contains("+===========+===========+===========+"));
    assert!(out.contains("+---+---+---+---+---+---+---+---+---+"));
    // First row: blanks render as spaces, boxes separated by pipes.
    assert!(out.contains("A |   :   : 4 | 6 : 7 :   | 9 : 1 : 2 |"));
    // Last row carries its label too.
    assert!(out.contains("I | 3 :   : 5 | 2 : 8 : 6 |   : 7 :   |"));
    // Presenter never mutates.
    assert_eq!(g, parse_grid(PUZZLE).unwrap());
    // All nine row labels appear.
    for letter in 'A'..='I' {
        assert!(out.contains(&format!("\n{letter} |")), "missing row {letter}");
    }
}
