use crate::cursor::{Cursor, CursorOf, Input};
use crate::error::Mismatch;
use crate::parser::{Outcome, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input
pub struct ConstantParser<I> {
    _phantom: PhantomData<I>,
}

impl<I> ConstantParser<I> {
    pub fn new() -> Self {
        ConstantParser {
            _phantom: PhantomData,
        }
    }
}

impl<I> Default for ConstantParser<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for ConstantParser<I> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<I: Input> Parser for ConstantParser<I> {
    type Input = I;
    type Output = ();

    fn parse<'code>(&self, cursor: CursorOf<'code, I>) -> Outcome<'code, I, ()> {
        Ok(((), cursor))
    }
}

/// Convenience function to create a parser that always succeeds
pub fn constant<I: Input>() -> ConstantParser<I> {
    ConstantParser::new()
}

/// Parser that succeeds only if there is no input remaining
///
/// For token input this means there is no current token.
pub struct EndOfInputParser<I> {
    _phantom: PhantomData<I>,
}

impl<I> EndOfInputParser<I> {
    pub fn new() -> Self {
        EndOfInputParser {
            _phantom: PhantomData,
        }
    }
}

impl<I> Default for EndOfInputParser<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for EndOfInputParser<I> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<I: Input> Parser for EndOfInputParser<I> {
    type Input = I;
    type Output = ();

    fn parse<'code>(&self, cursor: CursorOf<'code, I>) -> Outcome<'code, I, ()> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            Err(Mismatch::new(cursor))
        }
    }
}

pub fn end_of_input<I: Input>() -> EndOfInputParser<I> {
    EndOfInputParser::new()
}
