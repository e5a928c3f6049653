// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::CubeSet;
use chumsky::prelude::*;

macro_rules! padded {
    ($inner: expr) => {{ $inner.padded_by(text::inline_whitespace()) }};
}

macro_rules! with_sep {
    ($inner: expr) => {{ $inner.then_ignore(text::inline_whitespace().at_least(1)) }};
}

type RichErr<'a> = chumsky::extra::Err<Rich<'a, char>>;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Colour {
    Red,
    Green,
    Blue,
}

fn number<'a>(what: &'static str) -> impl Parser<'a, &'a str, u32, RichErr<'a>> + Clone {
    text::int(10)
        .try_map(move |s: &str, span| {
            s.parse::<u32>()
                .map_err(|e| Rich::custom(span, format!("error parsing {s} as {what}: {e}")))
        })
        .labelled(what)
}

fn colour<'a>() -> impl Parser<'a, &'a str, Colour, RichErr<'a>> + Clone {
    choice((
        just("red").to(Colour::Red),
        just("green").to(Colour::Green),
        just("blue").to(Colour::Blue),
    ))
    .labelled("colour (red, green or blue)")
}

fn cubes<'a>() -> impl Parser<'a, &'a str, (u32, Colour), RichErr<'a>> + Clone {
    with_sep!(number("cube count")).then(colour())
}

fn round<'a>() -> impl Parser<'a, &'a str, CubeSet, RichErr<'a>> + Clone {
    cubes()
        .separated_by(padded!(just(',')).labelled("comma"))
        .at_least(1)
        .collect::<Vec<_>>()
        .map(|drawn| {
            // a colour listed twice keeps its last count
            drawn
                .into_iter()
                .fold(CubeSet::default(), |mut set, (count, colour)| {
                    match colour {
                        Colour::Red => set.red = count,
                        Colour::Green => set.green = count,
                        Colour::Blue => set.blue = count,
                    }
                    set
                })
        })
        .labelled("round")
        .as_context()
}

fn game<'a>() -> impl Parser<'a, &'a str, (u32, Vec<CubeSet>), RichErr<'a>> {
    let id = with_sep!(just("Game"))
        .ignore_then(number("game ID"))
        .then_ignore(padded!(just(':')).labelled("colon"));
    let rounds = round()
        .separated_by(padded!(just(';')).labelled("semicolon"))
        .at_least(1)
        .collect::<Vec<_>>();
    padded!(id.then(rounds))
}

/// Parse a line into the game's ID and its rounds
pub(super) fn parse_game(line: &str) -> Result<(u32, Vec<CubeSet>), Vec<Rich<'_, char>>> {
    game().parse(line).into_result()
}
