use crate::cursor::{Cursor, CursorOf};
use crate::cursors::{Text, Tokens};
use crate::error::Mismatch;
use crate::parser::{Parser, TokenParseResult};

/// Lifts a character-level parser to a token-level leaf
///
/// The wrapped parser runs over the text of the current token and must consume
/// all of it. On success the context moves to the next token.
#[derive(Clone)]
pub struct Token<P> {
    parser: P,
}

impl<P> Token<P> {
    pub fn new(parser: P) -> Self {
        Token { parser }
    }
}

impl<P> Parser for Token<P>
where
    P: Parser<Input = Text>,
{
    type Input = Tokens;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Tokens>,
    ) -> TokenParseResult<'code, P::Output> {
        let Some(text) = cursor.current() else {
            return Err(Mismatch::new(cursor));
        };
        match self.parser.parse(text) {
            Ok((value, rest)) if rest.is_empty() => Ok((value, cursor.next())),
            _ => Err(Mismatch::new(cursor)),
        }
    }
}

pub fn token<P>(parser: P) -> Token<P>
where
    P: Parser<Input = Text>,
{
    Token::new(parser)
}

/// Extension trait to add .token() to character-level parsers
pub trait TokenExt: Parser<Input = Text> + Sized {
    fn token(self) -> Token<Self> {
        Token::new(self)
    }
}

impl<P> TokenExt for P where P: Parser<Input = Text> {}
