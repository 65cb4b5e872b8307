use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rustdoku::{
    display,
    grid::{digit_from_char, Pos},
    io::{load_grid, save_grid},
    logger::RunLogger,
    rules::attempt_place,
    solver::{solve_with_stats, timed_solve},
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(name = "rustdoku", version, about = "Sudoku board tool: rule-checked moves and backtracking solve")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Colorize board and log output
    #[arg(long, global = true)]
    color: bool,

    /// Write run logs (one numbered file per milestone) into this directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a board file and pretty-print it
    Show {
        /// Board file: 9 lines of 9 symbols, digits or '.' for empty
        input: PathBuf,
    },
    /// Attempt one move on a board, e.g. `place puzzle.txt D5 9`
    Place {
        input: PathBuf,
        /// Cell coordinate: row letter A-I then column digit 1-9
        cell: String,
        /// Digit symbol to place
        digit: String,
        /// Save the resulting board here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Solve a board by backtracking search
    Solve {
        input: PathBuf,
        /// Save the solved board here
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report wall-clock time spent solving
        #[arg(long)]
        time: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut logger = match &cli.log_dir {
        Some(dir) => Some(RunLogger::new(dir, cli.color, 0)?),
        None => None,
    };

    let render = if cli.color { display::render_colored } else { display::render };

    match cli.command {
        Command::Show { input } => {
            let grid = load_grid(&input)?;
            log(&mut logger, "Board loaded", &format!("{} empty cells", grid.count_empty()))?;
            println!("{}", render(&grid));
        }
        Command::Place { input, cell, digit, output } => {
            let mut grid = load_grid(&input)?;
            let pos = Pos::parse(&cell).context("invalid cell coordinate")?;
            let mut symbols = digit.chars();
            let (Some(symbol), None) = (symbols.next(), symbols.next()) else {
                bail!("digit must be a single symbol, got {digit:?}")
            };
            let placed = attempt_place(&mut grid, pos, digit_from_char(symbol));
            if placed {
                println!("Placing '{digit}' into {cell} is a valid move.");
            } else {
                println!("Placing '{digit}' into {cell} is NOT a valid move.");
            }
            log(&mut logger, "Move attempted", &format!("{digit} at {cell}: {}", if placed { "placed" } else { "rejected" }))?;
            println!("{}", render(&grid));
            if let Some(out) = output {
                save_grid(&out, &grid)?;
                log(&mut logger, "Board saved", &out.display().to_string())?;
            }
            if !placed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Solve { input, output, time } => {
            let mut grid = load_grid(&input)?;
            let (solved, elapsed) = if time {
                timed_solve(&mut grid)
            } else {
                let (solved, stats) = solve_with_stats(&mut grid);
                log(&mut logger, "Search finished", &format!("{} nodes, {} backtracks", stats.nodes, stats.backtracks))?;
                (solved, std::time::Duration::ZERO)
            };
            if !solved {
                // Not an error: the board simply has no solution from here.
                println!("A solution cannot be found.");
                log(&mut logger, "No solution", "search exhausted every branch")?;
                return Ok(ExitCode::FAILURE);
            }
            println!("The board has a solution:\n{}", render(&grid));
            if time {
                println!("Takes {} microseconds to solve.", elapsed.as_micros());
            }
            log(&mut logger, "Board solved", &format!("{} cells filled", 81 - grid.count_empty()))?;
            if let Some(out) = output {
                save_grid(&out, &grid)?;
                log(&mut logger, "Board saved", &out.display().to_string())?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn log(logger: &mut Option<RunLogger>, title: &str, details: &str) -> Result<()> {
    if let Some(l) = logger.as_mut() {
        l.log(title, details)?;
    }
    Ok(())
}
