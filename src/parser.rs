use crate::cursor::{CursorOf, Input};
use crate::cursors::{Text, Tokens};
use crate::error::Mismatch;
use std::sync::Arc;

/// Outcome of running a parser over input `I`
///
/// `Ok` carries the value and the cursor after it. `Err` carries the cursor the
/// failing parser was entered with, never a partially consumed one.
pub type Outcome<'code, I, T> = Result<(T, CursorOf<'code, I>), Mismatch<CursorOf<'code, I>>>;

/// Outcome of a character-level parser: the cursor is the remaining source
pub type ParseResult<'code, T> = Outcome<'code, Text, T>;

/// Outcome of a token-level parser
pub type TokenParseResult<'code, T> = Outcome<'code, Tokens, T>;

/// Core parser trait for parser combinators
pub trait Parser {
    type Input: Input;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err holding the unchanged entry cursor if the parse fails.
    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        (**self).parse(cursor)
    }
}
