use crate::cursor::CursorOf;
use crate::error::Mismatch;
use crate::parser::{Outcome, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// It does not handle whitespace around the delimiters.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"{data}"` → `"data"`
#[derive(Clone)]
pub struct Between<P, L, R> {
    content: P,
    open: L,
    close: R,
}

impl<P, L, R> Between<P, L, R> {
    pub fn new(content: P, open: L, close: R) -> Self {
        Between {
            content,
            open,
            close,
        }
    }
}

impl<P, L, R> Parser for Between<P, L, R>
where
    P: Parser,
    L: Parser<Input = P::Input>,
    R: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        let (_, rest) = self.open.parse(cursor).map_err(|_| Mismatch::new(cursor))?;
        let (content, rest) = self
            .content
            .parse(rest)
            .map_err(|_| Mismatch::new(cursor))?;
        let (_, rest) = self.close.parse(rest).map_err(|_| Mismatch::new(cursor))?;

        Ok((content, rest))
    }
}

/// Creates a parser that matches `content` between `open` and `close`
pub fn between<P, L, R>(content: P, open: L, close: R) -> Between<P, L, R>
where
    P: Parser,
    L: Parser<Input = P::Input>,
    R: Parser<Input = P::Input>,
{
    Between::new(content, open, close)
}

/// Creates a parser that matches `content` with the same delimiter on both sides
pub fn surrounded<P, D>(content: P, delimiter: D) -> Between<P, D, D>
where
    P: Parser,
    D: Parser<Input = P::Input> + Clone,
{
    Between::new(content, delimiter.clone(), delimiter)
}

/// Extension trait to add .between() and .surrounded() method support for parsers
pub trait BetweenExt: Parser + Sized {
    fn between<L, R>(self, open: L, close: R) -> Between<Self, L, R>
    where
        L: Parser<Input = Self::Input>,
        R: Parser<Input = Self::Input>,
    {
        Between::new(self, open, close)
    }

    fn surrounded<D>(self, delimiter: D) -> Between<Self, D, D>
    where
        D: Parser<Input = Self::Input> + Clone,
    {
        surrounded(self, delimiter)
    }
}

impl<P> BetweenExt for P where P: Parser {}
