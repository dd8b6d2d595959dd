use super::parser::Parser;
use crate::cursor::{CursorOf, Input};
use crate::error::Mismatch;
use crate::map::Map;
use crate::parser::Outcome;

/// A tuple of parsers that run one after another
///
/// Implemented for tuples of 2 to 9 parsers over the same input. The outputs
/// are collected into a tuple of the same arity. If any element fails the
/// whole sequence fails at its own entry cursor, not at the failing element.
pub trait Sequence {
    type Input: Input;
    type Output;

    fn parse_all<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output>;
}

macro_rules! impl_sequence {
    ($P1:ident $p1:ident $v1:ident, $($P:ident $p:ident $v:ident),+) => {
        impl<$P1, $($P),+> Sequence for ($P1, $($P),+)
        where
            $P1: Parser,
            $($P: Parser<Input = $P1::Input>),+
        {
            type Input = $P1::Input;
            type Output = ($P1::Output, $($P::Output),+);

            fn parse_all<'code>(
                &self,
                cursor: CursorOf<'code, Self::Input>,
            ) -> Outcome<'code, Self::Input, Self::Output> {
                let ($p1, $($p),+) = self;
                let ($v1, rest) = $p1.parse(cursor).map_err(|_| Mismatch::new(cursor))?;
                $(
                    let ($v, rest) = $p.parse(rest).map_err(|_| Mismatch::new(cursor))?;
                )+
                Ok((($v1, $($v),+), rest))
            }
        }
    };
}

impl_sequence!(P1 p1 v1, P2 p2 v2);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8, P9 p9 v9);

/// Parser combinator that runs a tuple of parsers in order and returns their outputs as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Pass a flat
/// tuple to [`seq`] or [`sequence`] to get a flat result.
///
/// Example:
/// ```
/// use lexicomb::{AndExt, Parser, seq, utf8::is_char};
///
/// let (((a, b), c), rest) = is_char('1').and(is_char('2')).and(is_char('3')).parse("123").unwrap();
/// assert_eq!((a, b, c, rest), ('1', '2', '3', ""));
///
/// let ((a, b, c), rest) = seq((is_char('1'), is_char('2'), is_char('3'))).parse("123").unwrap();
/// assert_eq!((a, b, c, rest), ('1', '2', '3', ""));
/// ```
#[derive(Clone)]
pub struct And<S> {
    parsers: S,
}

impl<S> And<S> {
    pub fn new(parsers: S) -> Self {
        And { parsers }
    }
}

impl<S> Parser for And<S>
where
    S: Sequence,
{
    type Input = S::Input;
    type Output = S::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        self.parsers.parse_all(cursor)
    }
}

/// Run 2 to 9 parsers in order, returning a tuple of their outputs
pub fn seq<S>(parsers: S) -> And<S>
where
    S: Sequence,
{
    And::new(parsers)
}

/// Run 2 to 9 parsers in order and combine their outputs with `mapper`
///
/// The mapper receives the tuple of outputs; it only ever sees a fully
/// successful sequence.
pub fn sequence<S, F, R>(parsers: S, mapper: F) -> Map<And<S>, F>
where
    S: Sequence,
    F: Fn(S::Output) -> R,
{
    Map::new(And::new(parsers), mapper)
}

/// Convenience function to create an And parser of two parsers
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<(P1, P2)>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    And::new((parser1, parser2))
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<(Self, P)>
    where
        P: Parser<Input = Self::Input>,
    {
        And::new((self, other))
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
