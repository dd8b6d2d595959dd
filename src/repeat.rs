use super::parser::Parser;
use crate::cursor::{Cursor, CursorOf};
use crate::error::Mismatch;
use crate::parser::Outcome;

/// Parser combinator that greedily matches between `min` and `max` occurrences of the given parser
///
/// Repetition never backtracks: it keeps every match it makes and stops at the
/// first failure. If fewer than `min` matches were collected the whole
/// repetition fails at its entry cursor, discarding the partial matches.
///
/// An unbounded repetition also stops after a match that consumed nothing
/// once `min` is reached, since repeating it could never make progress.
#[derive(Clone)]
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: usize,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, min: usize, max: usize) -> Self {
        Repeat { parser, min, max }
    }
}

impl<P> Parser for Repeat<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = Vec<P::Output>;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        let mut results = Vec::new();
        let mut rest = cursor;

        while results.len() < self.max {
            match self.parser.parse(rest) {
                Ok((value, next)) => {
                    results.push(value);
                    let stalled = next.remaining_len() == rest.remaining_len();
                    rest = next;
                    if stalled && self.max == usize::MAX && results.len() >= self.min {
                        break;
                    }
                }
                // Stop on first error, the count decides the outcome
                Err(_) => break,
            }
        }

        if results.len() >= self.min {
            Ok((results, rest))
        } else {
            Err(Mismatch::new(cursor))
        }
    }
}

/// Match `parser` at least `min` and at most `max` times
pub fn repeat<P>(parser: P, min: usize, max: usize) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, min, max)
}

/// Zero or more occurrences
pub fn many<P>(parser: P) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, 0, usize::MAX)
}

/// One or more occurrences
pub fn many1<P>(parser: P) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, 1, usize::MAX)
}

/// Exactly `n` occurrences
pub fn times<P>(parser: P, n: usize) -> Repeat<P>
where
    P: Parser,
{
    Repeat::new(parser, n, n)
}

/// Extension trait to add repetition methods to parsers
pub trait RepeatExt: Parser + Sized {
    fn repeat(self, min: usize, max: usize) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }

    fn many(self) -> Repeat<Self> {
        many(self)
    }

    fn many1(self) -> Repeat<Self> {
        many1(self)
    }

    fn times(self, n: usize) -> Repeat<Self> {
        times(self, n)
    }
}

impl<P> RepeatExt for P where P: Parser {}
