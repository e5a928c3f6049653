// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::*;
use itertools::iproduct;
use proptest::prelude::*;

const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

fn schematic(s: &str) -> Schematic {
    s.parse().unwrap()
}

fn part_values(s: &Schematic) -> Vec<u64> {
    s.part_numbers().map(|part| part.value).collect()
}

#[test]
fn classification() {
    assert_eq!(CellKind::classify('7'), CellKind::Digit);
    assert_eq!(CellKind::classify('.'), CellKind::Filler);
    for c in ['*', '#', '$', '+', '/', '=', '@', '%', '&', '-', ' '] {
        assert_eq!(CellKind::classify(c), CellKind::Symbol, "{c:?}");
    }
}

#[test]
fn sample_part_numbers() {
    let schematic = schematic(SAMPLE);
    assert_eq!(
        part_values(&schematic),
        vec![467, 35, 633, 617, 592, 755, 664, 598]
    );
    assert_eq!(schematic.part_number_sum(), 4361);
}

#[test]
fn sample_exclusions() {
    let schematic = schematic(SAMPLE);
    let excluded: Vec<_> = schematic
        .candidates()
        .filter(|c| !schematic.is_part_number(c))
        .collect();
    assert_eq!(
        excluded,
        vec![
            PartCandidate {
                value: 114,
                row: 0,
                start: 5,
                end: 7
            },
            PartCandidate {
                value: 58,
                row: 5,
                start: 7,
                end: 8
            },
        ]
    );
}

#[test]
fn summing_is_repeatable() {
    let schematic = schematic(SAMPLE);
    let before = schematic.clone();
    assert_eq!(schematic.part_number_sum(), schematic.part_number_sum());
    assert_eq!(schematic, before);
}

#[test]
fn each_zone_counts() {
    // left, right, above (diagonal), below (diagonal)
    assert_eq!(part_values(&schematic("#12..")), vec![12]);
    assert_eq!(part_values(&schematic("..12#")), vec![12]);
    assert_eq!(part_values(&schematic("...$.\n.12..")), vec![12]);
    assert_eq!(part_values(&schematic(".12..\n$....")), vec![12]);
    // two columns away is too far
    assert!(part_values(&schematic("...$.\n12...\n...@.")).is_empty());
}

#[test]
fn numbers_at_the_edges() {
    let s = schematic("12..34\n......\n*....+");
    assert!(part_values(&s).is_empty());

    let s = schematic("12..34\n*....+");
    assert_eq!(part_values(&s), vec![12, 34]);
    assert_eq!(
        s.row_candidates(0).last(),
        Some(PartCandidate {
            value: 34,
            row: 0,
            start: 4,
            end: 5
        })
    );
}

#[test]
fn second_to_last_row_sees_last_row() {
    let s = schematic("......\n.42...\n...*..");
    assert_eq!(part_values(&s), vec![42]);
}

#[test]
fn digits_are_not_symbols() {
    assert!(part_values(&schematic("12\n34")).is_empty());
}

#[test]
fn neighbours() {
    let s = schematic(SAMPLE);
    assert_eq!(s.above(0), None);
    assert_eq!(s.above(1).map(Row::text), Some("467..114.."));
    assert_eq!(s.below(8).map(Row::text), Some(".664.598.."));
    assert_eq!(s.below(9), None);
    assert_eq!(s.row_candidates(10).count(), 0);
}

#[test]
fn out_of_range_lookups_hold_no_symbol() {
    let s = schematic("*");
    assert!(s.rows()[0].is_symbol_at(0));
    assert!(!s.rows()[0].is_symbol_at(1));
    assert!(!s.rows()[0].has_symbol_within(1..=50));
    let stray = PartCandidate {
        value: 1,
        row: 7,
        start: 0,
        end: 0,
    };
    assert!(!s.is_part_number(&stray));
}

#[test]
fn empty_schematic() {
    let s = Schematic::from_lines(Vec::<String>::new()).unwrap();
    assert_eq!(s.width(), 0);
    assert_eq!(s.part_number_sum(), 0);
    assert_eq!(schematic(""), s);
}

#[test]
fn ragged_rows_are_rejected() {
    assert_eq!(
        Schematic::from_lines(["....", "...", "...."]),
        Err(GridError::RaggedRow {
            row: 1,
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        "1.\n2..".parse::<Schematic>().unwrap_err().to_string(),
        "row 2 is 3 characters wide, but the schematic is 2 wide"
    );
}

#[test]
fn display() {
    let s = schematic(SAMPLE);
    assert_eq!(s.to_string(), SAMPLE);
    assert_eq!(s.rows()[3].to_string(), "Line: ......#...");
    assert_eq!(s.rows()[3].cells()[6].to_string(), "'#' (symbol)");
}

/// Sum every run of digits with a symbol anywhere in the 8 cells around any one of its digits,
/// without going through [Schematic] at all
fn brute_force_sum(grid: &[Vec<char>]) -> u64 {
    let symbol_at = |row: isize, column: isize| -> bool {
        let (Ok(row), Ok(column)) = (usize::try_from(row), usize::try_from(column)) else {
            return false;
        };
        grid.get(row)
            .and_then(|r| r.get(column))
            .is_some_and(|&c| !c.is_ascii_digit() && c != '.')
    };
    let touches_symbol = |row: usize, column: usize| {
        iproduct!(-1isize..=1, -1isize..=1).any(|(dr, dc)| {
            symbol_at(row as isize + dr, column as isize + dc)
        })
    };

    let mut sum = 0;
    for (row, chars) in grid.iter().enumerate() {
        let mut column = 0;
        while column < chars.len() {
            if !chars[column].is_ascii_digit() {
                column += 1;
                continue;
            }
            let start = column;
            while column < chars.len() && chars[column].is_ascii_digit() {
                column += 1;
            }
            if (start..column).any(|c| touches_symbol(row, c)) {
                let digits: String = chars[start..column].iter().collect();
                sum += digits.parse::<u64>().unwrap();
            }
        }
    }
    sum
}

#[test]
fn brute_force_agrees_on_sample() {
    let grid: Vec<Vec<char>> = SAMPLE.lines().map(|l| l.chars().collect()).collect();
    assert_eq!(brute_force_sum(&grid), 4361);
}

const ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '.', '.', '.', '.', '.', '*', '#', '$',
    '+',
];

fn grids() -> impl Strategy<Value = Vec<Vec<char>>> {
    (1usize..12, 0usize..8).prop_flat_map(|(width, height)| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(ALPHABET), width),
            height,
        )
    })
}

proptest! {
    #[test]
    fn matches_brute_force(grid in grids()) {
        let lines: Vec<String> = grid.iter().map(|row| row.iter().collect()).collect();
        let schematic = Schematic::from_lines(&lines).unwrap();
        prop_assert_eq!(schematic.part_number_sum(), brute_force_sum(&grid));
    }

    #[test]
    fn parts_never_lack_a_symbol(grid in grids()) {
        let lines: Vec<String> = grid.iter().map(|row| row.iter().collect()).collect();
        let schematic = Schematic::from_lines(&lines).unwrap();
        for part in schematic.part_numbers() {
            let first = part.start.saturating_sub(1);
            let last = (part.end + 1).min(schematic.width() - 1);
            let found = (part.row.saturating_sub(1)..=part.row + 1)
                .filter_map(|row| schematic.row(row))
                .any(|row| row.has_symbol_within(first..=last));
            prop_assert!(found, "{part} has no adjacent symbol");
        }
    }
}
