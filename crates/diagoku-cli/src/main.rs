//! Command-line solver for classic and diagonal sudoku.
//!
//! # Usage
//!
//! Solve the built-in demo puzzle (diagonal rules):
//!
//! ```sh
//! cargo run --bin diagoku
//! ```
//!
//! Solve a puzzle given as an 81-character grid string, `.` for blanks:
//!
//! ```sh
//! cargo run --bin diagoku -- "2.............62....1....7...6..8..."
//! ```
//!
//! Drop the diagonal constraint:
//!
//! ```sh
//! cargo run --bin diagoku -- --classic "..3.2.6..9..3.5..1..18.64..."
//! ```
//!
//! Replay every finalized assignment in order:
//!
//! ```sh
//! cargo run --bin diagoku -- --log
//! ```

use std::process;

use clap::Parser;
use diagoku_solver::Solver;

const DEMO_GRID: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character grid, row by row: `.` for a blank, `1`-`9` for a clue.
    #[arg(value_name = "GRID", default_value = DEMO_GRID)]
    grid: String,

    /// Solve without the two diagonal units.
    #[arg(long)]
    classic: bool,

    /// Print each finalized assignment in the order it was made.
    #[arg(long)]
    log: bool,

    /// Print solve counters.
    #[arg(long)]
    stats: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let solver = if args.classic {
        Solver::classic()
    } else {
        Solver::diagonal()
    };

    let report = match solver.solve_grid(&args.grid) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Invalid grid: {err}");
            process::exit(2);
        }
    };
    log::info!(
        "{} reductions, {} branches, {} assignments",
        report.stats().reductions(),
        report.stats().branches(),
        report.log().len()
    );

    if args.log {
        for (step, assignment) in report.log().into_iter().enumerate() {
            println!(
                "{:4}: {} := {}",
                step + 1,
                assignment.cell(),
                assignment.digit()
            );
        }
        println!();
    }

    if args.stats {
        println!(
            "Stats:\n  reductions: {}\n  branches: {}\n  assignments: {}",
            report.stats().reductions(),
            report.stats().branches(),
            report.log().len()
        );
        println!();
    }

    match report.solution() {
        Some(solution) => println!("{solution}"),
        None => {
            eprintln!("No solution exists for this grid.");
            process::exit(1);
        }
    }
}
