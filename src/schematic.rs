// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Engine schematics from [Day 3], and the part numbers hidden in them
//!
//! A schematic is a rectangular grid of characters. Runs of digits within a row are numbers, `.`
//! is empty space, and anything else is a symbol. A number is a *part number* if a symbol is in
//! any of the 8 directions from any of its digits.
//!
//! # Example
//!
//! ```rust
//! use advent2023::schematic::Schematic;
//!
//! let schematic: Schematic = "\
//! 467..114..
//! ...*......
//! ..35..633.
//! ......#..."
//!     .parse()
//!     .unwrap();
//!
//! let parts: Vec<u64> = schematic.part_numbers().map(|part| part.value).collect();
//! assert_eq!(parts, vec![467, 35, 633]);
//! ```
//!
//! [Day 3]: https://adventofcode.com/2023/day/3

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

mod fmt_impls;
mod scan;

pub use scan::Candidates;

/// The character used for empty space in a schematic
pub const FILLER: char = '.';

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// What a [Cell] holds
pub enum CellKind {
    /// An ASCII digit, part of some number
    Digit,
    /// Anything that's neither a digit nor [FILLER]
    Symbol,
    /// [FILLER]
    Filler,
}

impl CellKind {
    /// Classify `c`
    pub const fn classify(c: char) -> Self {
        match c {
            '0'..='9' => CellKind::Digit,
            FILLER => CellKind::Filler,
            _ => CellKind::Symbol,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A single classified character of a schematic
pub struct Cell {
    character: char,
    kind: CellKind,
}

impl Cell {
    /// Classify `character` into a new cell
    pub const fn new(character: char) -> Self {
        Self {
            character,
            kind: CellKind::classify(character),
        }
    }

    /// The character this cell was built from
    pub const fn character(self) -> char {
        self.character
    }

    /// The classification of this cell
    pub const fn kind(self) -> CellKind {
        self.kind
    }

    /// Shorthand for checking whether `self.kind()` is [`CellKind::Digit`]
    pub const fn is_digit(self) -> bool {
        matches!(self.kind, CellKind::Digit)
    }

    /// Shorthand for checking whether `self.kind()` is [`CellKind::Symbol`]
    pub const fn is_symbol(self) -> bool {
        matches!(self.kind, CellKind::Symbol)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// One row of a [Schematic]
pub struct Row {
    text: Box<str>,
    cells: Box<[Cell]>,
}

impl Row {
    fn new(text: &str) -> Self {
        Self {
            text: Box::from(text),
            cells: text.chars().map(Cell::new).collect(),
        }
    }

    /// The original text of the row
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The classified cells of the row, in order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `column` is a symbol. Columns past the end of the row have no symbol.
    pub fn is_symbol_at(&self, column: usize) -> bool {
        self.cells.get(column).is_some_and(|cell| cell.is_symbol())
    }

    /// Whether any cell within `columns` is a symbol, ignoring any part of `columns` that's out of
    /// range.
    pub fn has_symbol_within(&self, mut columns: RangeInclusive<usize>) -> bool {
        columns.any(|column| self.is_symbol_at(column))
    }
}

/// A maximal run of digits within a single row of a [Schematic], which may or may not turn out
/// to be a part number.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PartCandidate {
    /// The number the digits spell out, or `0` if it doesn't fit into a [u64]
    pub value: u64,
    /// Index of the row the digits are in
    pub row: usize,
    /// Column of the first digit
    pub start: usize,
    /// Column of the last digit
    pub end: usize,
}

#[derive(Debug, PartialEq, Eq)]
/// An error occured while building a [Schematic]
pub enum GridError {
    /// A row's length didn't match that of the first row
    RaggedRow {
        /// 0-based index of the offending row
        row: usize,
        /// the length of the first row
        expected: usize,
        /// the length of the offending row
        found: usize,
    },
}

impl Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} is {found} characters wide, but the schematic is {expected} wide",
                row + 1
            ),
        }
    }
}

impl Error for GridError {}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
/// A rectangular engine schematic, classified and ready to be scanned for part numbers
pub struct Schematic {
    width: usize,
    rows: Vec<Row>,
}

impl Schematic {
    /// Build a schematic from its rows of text.
    ///
    /// Every row must be as wide as the first. No lines at all is a valid, empty schematic.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Row> = lines.into_iter().map(|s| Row::new(s.as_ref())).collect();
        let width = rows.first().map_or(0, Row::len);

        if let Some((row, ragged)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                found: ragged.len(),
            });
        }

        tracing::debug!(rows = rows.len(), width, "built schematic");
        Ok(Self { width, rows })
    }

    /// The number of columns in each row
    pub fn width(&self) -> usize {
        self.width
    }

    /// The rows of the schematic, in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get row `index`, if it exists
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// The row before row `index`, or [`None`] at the top of the schematic
    pub fn above(&self, index: usize) -> Option<&Row> {
        index.checked_sub(1).and_then(|i| self.row(i))
    }

    /// The row after row `index`, or [`None`] at the bottom of the schematic
    pub fn below(&self, index: usize) -> Option<&Row> {
        index.checked_add(1).and_then(|i| self.row(i))
    }

    /// Iterate over every run of digits in row `index`, from left to right. If there is no such
    /// row, the iterator is empty.
    pub fn row_candidates(&self, index: usize) -> Candidates<'_> {
        Candidates::new(index, self.row(index).map_or(&[][..], Row::cells))
    }

    /// Iterate over every run of digits in the schematic, row by row
    pub fn candidates(&self) -> impl Iterator<Item = PartCandidate> + '_ {
        (0..self.rows.len()).flat_map(move |index| self.row_candidates(index))
    }

    /// Check whether a symbol is adjacent to `candidate`
    ///
    /// Looks at the cells directly to either side of it, and at the cells in the rows above and
    /// below it, from one column before its start through one column after its end. Any of those
    /// positions that fall outside of the schematic hold no symbol.
    pub fn is_part_number(&self, candidate: &PartCandidate) -> bool {
        let Some(row) = self.row(candidate.row) else {
            return false;
        };
        let Some(last_column) = self.width.checked_sub(1) else {
            return false;
        };
        let span = candidate.start.saturating_sub(1)..=(candidate.end + 1).min(last_column);

        let left = candidate
            .start
            .checked_sub(1)
            .is_some_and(|column| row.is_symbol_at(column));
        let right = row.is_symbol_at(candidate.end + 1);
        let above = self
            .above(candidate.row)
            .is_some_and(|above| above.has_symbol_within(span.clone()));
        let below = self
            .below(candidate.row)
            .is_some_and(|below| below.has_symbol_within(span));

        left || right || above || below
    }

    /// Iterate over the part numbers in row `index`, from left to right
    pub fn row_part_numbers(&self, index: usize) -> impl Iterator<Item = PartCandidate> + '_ {
        self.row_candidates(index)
            .filter(move |candidate| self.is_part_number(candidate))
    }

    /// Iterate over every part number in the schematic, row by row
    pub fn part_numbers(&self) -> impl Iterator<Item = PartCandidate> + '_ {
        self.candidates().filter(move |candidate| {
            let is_part = self.is_part_number(candidate);
            tracing::trace!(?candidate, is_part, "checked candidate");
            is_part
        })
    }

    /// The sum of every part number in the schematic
    pub fn part_number_sum(&self) -> u64 {
        self.part_numbers().map(|part| part.value).sum()
    }
}

impl FromStr for Schematic {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

#[cfg(test)]
mod tests;
