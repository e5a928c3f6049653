// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Games of cubes drawn from a bag, from [Day 2]
//!
//! Each line of the puzzle input records one game: its ID, then a `;`-separated list of the
//! handfuls of cubes that were revealed.
//!
//! ```rust
//! use advent2023::cube_game::{CubeSet, Game, PUZZLE_BAG};
//!
//! let game = Game::parse("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
//! assert!(game.is_possible_with(&PUZZLE_BAG));
//! assert_eq!(game.minimum_set(), CubeSet { red: 4, green: 2, blue: 6 });
//! assert_eq!(game.power(), 48);
//! ```
//!
//! [Day 2]: https://adventofcode.com/2023/day/2

use chumsky::error::Rich;
use std::error::Error;
use std::fmt::{self, Display};

mod parsers;

/// The bag that the elf asks about in part 1
pub const PUZZLE_BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
/// A number of cubes of each colour, either revealed in one round of a game or held in a bag
pub struct CubeSet {
    #[allow(missing_docs, reason = "trivial")]
    pub red: u32,
    #[allow(missing_docs, reason = "trivial")]
    pub green: u32,
    #[allow(missing_docs, reason = "trivial")]
    pub blue: u32,
}

impl CubeSet {
    /// Whether `self` has at least as many cubes of every colour as `other`
    pub const fn contains(&self, other: &CubeSet) -> bool {
        self.red >= other.red && self.green >= other.green && self.blue >= other.blue
    }

    /// The colour-by-colour maximum of `self` and `other`
    #[must_use]
    pub fn union(self, other: CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// The product of the number of cubes of each colour
    pub fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
/// One recorded game
pub struct Game {
    /// The ID of the game
    pub id: u32,
    /// The rounds of the game, in order
    pub rounds: Vec<CubeSet>,
    line: Box<str>,
}

impl Game {
    /// Parse a game from one line of the puzzle input
    pub fn parse(line: &str) -> Result<Self, GameParseError<'_>> {
        parsers::parse_game(line)
            .map(|(id, rounds)| Game {
                id,
                rounds,
                line: Box::from(line),
            })
            .map_err(|errors| GameParseError {
                line_number: 0,
                line,
                errors,
            })
    }

    /// The line this game was parsed from
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Whether every round of the game could have been drawn from `bag`
    pub fn is_possible_with(&self, bag: &CubeSet) -> bool {
        self.rounds.iter().all(|round| bag.contains(round))
    }

    /// The fewest cubes of each colour that the bag could have held for the game to be possible
    pub fn minimum_set(&self) -> CubeSet {
        self.rounds
            .iter()
            .copied()
            .fold(CubeSet::default(), CubeSet::union)
    }

    /// The power of the game's [minimum set](Game::minimum_set)
    pub fn power(&self) -> u64 {
        self.minimum_set().power()
    }
}

/// Parse every line of the puzzle input into a [Game], stopping at the first invalid line.
pub fn parse_games<'a, I>(lines: I) -> Result<Vec<Game>, GameParseError<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(line_number, line)| {
            let game = Game::parse(line).map_err(|e| GameParseError { line_number, ..e })?;
            tracing::trace!(id = game.id, rounds = game.rounds.len(), "parsed game");
            Ok(game)
        })
        .collect()
}

/// The sum of the IDs of every game that's possible with `bag`
pub fn possible_id_sum(games: &[Game], bag: &CubeSet) -> u64 {
    games
        .iter()
        .filter(|game| game.is_possible_with(bag))
        .map(|game| u64::from(game.id))
        .sum()
}

/// The sum of the power of every game
pub fn power_sum(games: &[Game]) -> u64 {
    games.iter().map(Game::power).sum()
}

#[derive(Debug)]
/// A line of input was not a valid game
pub struct GameParseError<'a> {
    /// 0-based number of the line within the input
    pub line_number: usize,
    /// The text of the line
    pub line: &'a str,
    /// The errors encountered while parsing, with spans relative to the start of `line`
    pub errors: Vec<Rich<'a, char>>,
}

impl Display for GameParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid game on line {}", self.line_number + 1)?;
        if let Some(first) = self.errors.first() {
            write!(f, ": {first}")?;
        }
        Ok(())
    }
}

impl Error for GameParseError<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 5] = [
        "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green",
        "Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue",
        "Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red",
        "Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red",
        "Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green",
    ];

    #[test]
    fn sample_possible_games() {
        let games = parse_games(SAMPLE).unwrap();
        let possible: Vec<u32> = games
            .iter()
            .filter(|g| g.is_possible_with(&PUZZLE_BAG))
            .map(|g| g.id)
            .collect();
        assert_eq!(possible, vec![1, 2, 5]);
        assert_eq!(possible_id_sum(&games, &PUZZLE_BAG), 8);
    }

    #[test]
    fn sample_powers() {
        let games = parse_games(SAMPLE).unwrap();
        let powers: Vec<u64> = games.iter().map(Game::power).collect();
        assert_eq!(powers, vec![48, 12, 1560, 630, 36]);
        assert_eq!(power_sum(&games), 2286);
    }

    #[test]
    fn bag_containment() {
        let bag = CubeSet {
            red: 1,
            green: 2,
            blue: 3,
        };
        assert!(bag.contains(&bag));
        assert!(bag.contains(&CubeSet::default()));
        assert!(!bag.contains(&CubeSet {
            red: 2,
            ..CubeSet::default()
        }));
    }

    #[test]
    fn error_reports_line_number() {
        let err = parse_games(["Game 1: 1 red", "Game 2: 1 purple"]).unwrap_err();
        assert_eq!(err.line_number, 1);
        assert_eq!(err.line, "Game 2: 1 purple");
        assert!(!err.errors.is_empty());
        assert!(err.to_string().starts_with("invalid game on line 2"));
    }

    #[test]
    fn keeps_original_line() {
        let game = Game::parse(SAMPLE[2]).unwrap();
        assert_eq!(game.line(), SAMPLE[2]);
        assert_eq!(game.id, 3);
        assert_eq!(game.rounds.len(), 3);
    }
}
