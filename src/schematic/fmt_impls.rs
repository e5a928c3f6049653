// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::{Cell, CellKind, PartCandidate, Row, Schematic};

use itertools::Itertools;
use std::fmt::{self, Display};

impl Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Digit => write!(f, "digit"),
            CellKind::Symbol => write!(f, "symbol"),
            CellKind::Filler => write!(f, "filler"),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self.character, self.kind)
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}", self.text)
    }
}

impl Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().map(Row::text).format("\n"))
    }
}

impl Display for PartCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (row {}, columns {}..={})",
            self.value, self.row, self.start, self.end
        )
    }
}
