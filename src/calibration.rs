// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Calibration documents from [Day 1]
//!
//! [Day 1]: https://adventofcode.com/2023/day/1

/// Recover the calibration value from one line of a calibration document.
///
/// The value is a two-digit number made from the first digit in the line followed by the last.
/// If the line has only one digit, it's used for both; if it has none, the value is `0`.
///
/// ```rust
/// use advent2023::calibration::calibration_value;
/// assert_eq!(calibration_value("pqr3stu8vwx"), 38);
/// assert_eq!(calibration_value("treb7uchet"), 77);
/// assert_eq!(calibration_value("trebuchet"), 0);
/// ```
pub fn calibration_value(line: &str) -> u32 {
    let mut digits = line.chars().filter_map(|c| c.to_digit(10));
    match digits.next() {
        Some(first) => first * 10 + digits.last().unwrap_or(first),
        None => 0,
    }
}

/// The sum of the calibration values of every line
pub fn calibration_sum<I, S>(lines: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| {
            let value = calibration_value(line.as_ref());
            tracing::trace!(line = line.as_ref(), value, "decoded calibration value");
            value
        })
        .sum()
}
