use crate::cursor::CursorOf;
use crate::error::Mismatch;
use crate::parser::{Outcome, Parser};

/// Parser combinator that requires `suffix` after `parser` and keeps only `parser`'s value
#[derive(Clone)]
pub struct FollowedBy<P, S> {
    parser: P,
    suffix: S,
}

impl<P, S> FollowedBy<P, S> {
    pub fn new(parser: P, suffix: S) -> Self {
        FollowedBy { parser, suffix }
    }
}

impl<P, S> Parser for FollowedBy<P, S>
where
    P: Parser,
    S: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        let (value, rest) = self.parser.parse(cursor)?;
        let (_, rest) = self
            .suffix
            .parse(rest)
            .map_err(|_| Mismatch::new(cursor))?;
        Ok((value, rest))
    }
}

pub fn followed_by<P, S>(parser: P, suffix: S) -> FollowedBy<P, S>
where
    P: Parser,
    S: Parser<Input = P::Input>,
{
    FollowedBy::new(parser, suffix)
}

/// Extension trait to add .followed_by() method support for parsers
pub trait FollowedByExt: Parser + Sized {
    fn followed_by<S>(self, suffix: S) -> FollowedBy<Self, S>
    where
        S: Parser<Input = Self::Input>,
    {
        FollowedBy::new(self, suffix)
    }
}

impl<P> FollowedByExt for P where P: Parser {}
