// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Library providing the puzzle models behind a handful of [Advent of Code 2023] solutions
//!
//! Each puzzle gets its own module, and a thin binary under `src/bin` which reads the puzzle
//! input with [`read_file_lines`] and prints the answer.
//!
//! * [calibration] - [Day 1], part 1: recovering calibration values from a document
//! * [cube_game] - [Day 2], parts 1 and 2: checking games of cubes drawn from a bag
//! * [schematic] - [Day 3], part 1: summing the part numbers in an engine schematic
//!
//! # Example
//!
//! ```rust
//! use advent2023::prelude::*;
//!
//! let schematic = Schematic::from_lines(["467..114..", "...*......", "..35..633."]).unwrap();
//! assert_eq!(schematic.part_number_sum(), 467 + 35);
//! ```
//!
//! [Advent of Code 2023]: https://adventofcode.com/2023
//! [Day 1]: https://adventofcode.com/2023/day/1
//! [Day 2]: https://adventofcode.com/2023/day/2
//! [Day 3]: https://adventofcode.com/2023/day/3

pub mod calibration;
pub mod cube_game;
pub mod input;
pub mod logging;
pub mod schematic;

/// A small module that re-exports the items most solutions need
pub mod prelude {
    pub use crate::calibration::{calibration_sum, calibration_value};
    pub use crate::cube_game::{CubeSet, Game, parse_games};
    pub use crate::input::{InputError, read_file_lines};
    pub use crate::schematic::{GridError, PartCandidate, Schematic};
}

pub use input::{InputError, read_file_lines};
