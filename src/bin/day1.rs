// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Sum the calibration values in a calibration document (Advent of Code 2023, day 1 part 1)

use advent2023::calibration::calibration_value;
use advent2023::input::{input_path, read_file_lines};
use advent2023::logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Trebuchet?!: sum the calibration values of a document", long_about = None)]
struct Args {
    #[arg(help = "The calibration document [default: input.txt]")]
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

    let lines = match read_file_lines(input_path(args.input, args.sample)) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!(error = %e, "error reading input file");
            eprintln!("Error reading input file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sum = 0;
    for line in &lines {
        let value = calibration_value(line);
        sum += value;
        tracing::info!(line = line.as_str(), value, sum, "decoded line");
    }

    println!("Final sum: {sum}");
    ExitCode::SUCCESS
}
