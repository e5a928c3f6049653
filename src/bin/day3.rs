// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Sum the part numbers in an engine schematic (Advent of Code 2023, day 3 part 1)

use advent2023::input::{input_path, read_file_lines};
use advent2023::logging;
use advent2023::schematic::Schematic;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Gear Ratios: sum the part numbers in an engine schematic", long_about = None)]
struct Args {
    #[arg(help = "The engine schematic [default: input.txt]")]
    input: Option<PathBuf>,
    #[arg(help = "Read sample.txt instead of input.txt")]
    #[arg(short, long)]
    sample: bool,
    #[arg(help = "Log more details to stderr (repeatable)")]
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    let path = input_path(args.input, args.sample);

    let lines = match read_file_lines(&path) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!(error = %e, "error reading input file");
            eprintln!("Error reading file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let schematic = match Schematic::from_lines(&lines) {
        Ok(schematic) => schematic,
        Err(e) => {
            eprintln!("Invalid schematic in {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut sum = 0;
    for (index, row) in schematic.rows().iter().enumerate() {
        println!("{row}");
        for part in schematic.row_part_numbers(index) {
            println!(
                "  Captured number {} at pos {} because of adjacent symbols",
                part.value, part.start
            );
            sum += part.value;
        }
    }
    debug_assert_eq!(sum, schematic.part_number_sum());

    println!("\nSum: {sum}");
    ExitCode::SUCCESS
}
