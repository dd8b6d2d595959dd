use super::parser::Parser;
use crate::cursor::CursorOf;
use crate::error::Mismatch;
use crate::parser::Outcome;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
#[derive(Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    type Input = P1::Input;
    type Output = P1::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self
                .parser2
                .parse(cursor)
                .map_err(|_| Mismatch::new(cursor)),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Input = Self::Input, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

/// Ordered choice over a tuple of parsers
///
/// Tries each alternative in order against the same input and returns the
/// first success. Order matters: this is not longest-match.
#[derive(Clone)]
pub struct Choice<T> {
    parsers: T,
}

macro_rules! impl_choice {
    ($P1:ident $p1:ident, $($P:ident $p:ident),+) => {
        impl<$P1, $($P),+> Parser for Choice<($P1, $($P),+)>
        where
            $P1: Parser,
            $($P: Parser<Input = $P1::Input, Output = $P1::Output>),+
        {
            type Input = $P1::Input;
            type Output = $P1::Output;

            fn parse<'code>(
                &self,
                cursor: CursorOf<'code, Self::Input>,
            ) -> Outcome<'code, Self::Input, Self::Output> {
                let ($p1, $($p),+) = &self.parsers;
                if let Ok(found) = $p1.parse(cursor) {
                    return Ok(found);
                }
                $(
                    if let Ok(found) = $p.parse(cursor) {
                        return Ok(found);
                    }
                )+
                Err(Mismatch::new(cursor))
            }
        }
    };
}

impl_choice!(P1 p1, P2 p2);
impl_choice!(P1 p1, P2 p2, P3 p3);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8, P9 p9);

/// Ordered choice over 2 to 9 parsers given as a tuple
///
/// ```
/// use lexicomb::{Parser, choice, utf8::is_char};
///
/// let sign = choice((is_char('+'), is_char('-'), is_char('*')));
/// assert_eq!(sign.parse("-1"), Ok(('-', "1")));
/// ```
pub fn choice<T>(parsers: T) -> Choice<T>
where
    Choice<T>: Parser,
{
    Choice { parsers }
}
