//! Command-line search for unique-distance boards.
//!
//! Scans every placement of N markers on an N×N grid, keeps the boards
//! whose pairwise squared distances are all distinct, and prints one
//! representative per symmetry class followed by a summary count.
//!
//! ```sh
//! gridlace -n 4
//! gridlace -n 4 --parallel --workers 8
//! gridlace -n 5 --print-all false --quit-after 10
//! ```

use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use gridlace_core::Board;
use gridlace_search::{SearchConfig, SearchError, search_parallel, search_sequential};

use crate::render::RenderError;

mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size (N for an N×N grid).
    #[arg(short = 'n', long, value_name = "SIZE", default_value_t = 3)]
    board_size: u8,

    /// Print all valid boards seen.
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    print_all: bool,

    /// Quit after finding this many solutions (0 for 'all').
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    quit_after: u64,

    /// Use the parallel implementation.
    #[arg(long)]
    parallel: bool,

    /// Number of workers for the parallel implementation.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    workers: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(found) => println!("Found {found} solutions"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<u64, SearchError> {
    let config = SearchConfig {
        board_size: args.board_size,
        quit_after: (args.quit_after != 0).then_some(args.quit_after),
    };
    log::debug!("scanning with {config:?}, parallel={}", args.parallel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let emit = |board: &Board| {
        if !args.print_all {
            return;
        }
        if let Err(err) = print_solution(&mut out, board) {
            eprintln!("failed to render solution: {err}");
            process::exit(1);
        }
    };

    if args.parallel {
        search_parallel(&config, args.workers, emit)
    } else {
        search_sequential(&config, emit)
    }
}

/// Renders one solution followed by a separating blank line.
fn print_solution<W: Write>(out: &mut W, board: &Board) -> Result<(), RenderError> {
    render::write_board(out, board)?;
    writeln!(out)?;
    Ok(())
}
