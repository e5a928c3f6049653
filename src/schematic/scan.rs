// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::{Cell, PartCandidate};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum ScanState {
    Scanning,
    InNumber { start: usize },
}

#[derive(Debug, Clone)]
/// Iterator over the runs of digits within one row of a [Schematic], from left to right.
///
/// Created with [`Schematic::row_candidates`]
///
/// [Schematic]: super::Schematic
/// [`Schematic::row_candidates`]: super::Schematic::row_candidates
pub struct Candidates<'a> {
    row: usize,
    cells: &'a [Cell],
    column: usize,
    state: ScanState,
}

impl<'a> Candidates<'a> {
    pub(super) fn new(row: usize, cells: &'a [Cell]) -> Self {
        Self {
            row,
            cells,
            column: 0,
            state: ScanState::Scanning,
        }
    }

    /// The run of digits in columns `start..=end` of the row
    fn capture(&self, start: usize, end: usize) -> PartCandidate {
        PartCandidate {
            value: digits_value(&self.cells[start..=end]),
            row: self.row,
            start,
            end,
        }
    }
}

/// The number spelled out by `digits`, or `0` if it's too big for a [u64]
fn digits_value(digits: &[Cell]) -> u64 {
    digits
        .iter()
        .try_fold(0u64, |acc, cell| {
            let digit = cell.character().to_digit(10)?;
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })
        .unwrap_or(0)
}

impl Iterator for Candidates<'_> {
    type Item = PartCandidate;

    fn next(&mut self) -> Option<PartCandidate> {
        while self.column <= self.cells.len() {
            let column = self.column;
            self.column += 1;
            let is_digit = self.cells.get(column).is_some_and(|cell| cell.is_digit());

            match (self.state, is_digit) {
                (ScanState::Scanning, true) => self.state = ScanState::InNumber { start: column },
                (ScanState::Scanning, false) | (ScanState::InNumber { .. }, true) => (),
                // a non-digit or the end of the row closes the number
                (ScanState::InNumber { start }, false) => {
                    self.state = ScanState::Scanning;
                    return Some(self.capture(start, column - 1));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Candidates<'_> {}
