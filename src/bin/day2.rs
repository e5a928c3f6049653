// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Check recorded games of cubes against a bag (Advent of Code 2023, day 2 parts 1 and 2)

use advent2023::cube_game::{GameParseError, PUZZLE_BAG, parse_games, possible_id_sum, power_sum};
use advent2023::input::{input_path, read_file_lines};
use advent2023::logging;
use ariadne::{Color, Config, Fmt, IndexType, Label, Report, ReportKind, Source};
use chumsky::error::Rich;
use clap::{Parser, ValueEnum};
use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(PartialEq, Clone, Copy, ValueEnum)]
enum Part {
    /// sum the IDs of the games possible with 12 red, 13 green and 14 blue cubes
    #[value(name("1"), alias("one"))]
    One,
    /// sum the powers of the minimum set of cubes for each game
    #[value(name("2"), alias("two"))]
    Two,
    /// solve both parts
    Both,
}

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Cube Conundrum: check recorded games of cubes", long_about = None)]
struct Args {
    #[arg(help = "The recorded games [default: input.txt]")]
    input: Option<PathBuf>,
    #[arg(help = "Read sample.txt instead of input.txt")]
    #[arg(short, long)]
    sample: bool,
    #[arg(help = "Which part of the puzzle to solve")]
    #[arg(short, long)]
    #[arg(default_value = "both")]
    part: Part,
    #[arg(help = "Log more details to stderr (repeatable)")]
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Build a report of `err` against the full input, whose lines are `lines`.
///
/// chumsky spans are byte offsets into the line, so the report indexes its source by byte.
fn parse_report<'a>(
    err: &Rich<'_, char>,
    line_number: usize,
    file: &'a str,
    lines: &[String],
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset: usize = lines[..line_number].iter().map(|l| l.len() + 1).sum();
    let range = err.span().into_range();
    let range = (range.start + offset)..(range.end + offset);

    let mut builder = Report::build(ReportKind::Error, (file, range.clone()))
        .with_config(
            Config::default()
                .with_index_type(IndexType::Byte)
                .with_color(color),
        )
        .with_message(format!(
            "Invalid game on line {} of {}",
            line_number + 1,
            file.fg(Color::Red)
        ));

    builder = builder.with_label(
        Label::new((file, range))
            .with_message(match err.found() {
                Some(found) => format!("Found \'{}\'", found.escape_default().fg(Color::Cyan)),
                None => String::from("Found end of line"),
            })
            .with_color(Color::Yellow),
    );

    let expected: Vec<String> = err.expected().map(ToString::to_string).collect();
    if !expected.is_empty() {
        builder = builder.with_note(format!(
            "Expected one of: {}",
            expected.join(", ").fg(Color::Blue)
        ));
    }

    builder.finish()
}

/// Print `err` as a report against the full input on stderr
fn report_parse_err(err: &Rich<'_, char>, line_number: usize, file: &str, lines: &[String]) {
    let source = lines.join("\n");
    let report = parse_report(err, line_number, file, lines, true);
    if let Err(e) = report.eprint((file, Source::from(source))) {
        eprintln!("{err} (failed to render report: {e})");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    let path = input_path(args.input, args.sample);
    let file = path.to_string_lossy();

    let lines = match read_file_lines(&path) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!(error = %e, "error reading input file");
            eprintln!("Error reading input file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let games = match parse_games(lines.iter().map(String::as_str)) {
        Ok(games) => games,
        Err(GameParseError {
            line_number,
            errors,
            ..
        }) => {
            for err in &errors {
                report_parse_err(err, line_number, &file, &lines);
            }
            return ExitCode::FAILURE;
        }
    };
    println!("Found {} games", games.len());

    if matches!(args.part, Part::One | Part::Both) {
        let possible = games
            .iter()
            .filter(|game| game.is_possible_with(&PUZZLE_BAG))
            .count();
        println!("Found {possible} possible games");
        println!("Game ID sum: {}", possible_id_sum(&games, &PUZZLE_BAG));
    }
    if matches!(args.part, Part::Two | Part::Both) {
        println!("Sum of powers: {}", power_sum(&games));
    }
    ExitCode::SUCCESS
}
