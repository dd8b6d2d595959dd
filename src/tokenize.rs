use crate::cursor::{Cursor, CursorOf};
use crate::cursors::{Text, TokenContext, Tokens};
use crate::error::Mismatch;
use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Splits source text into a list of token strings
///
/// Matches one token, then any number of `(ignored, token)` pairs, and
/// requires the whole source to be consumed. Text matched by `ignored` is
/// dropped. The source may not start or end with ignored text.
#[derive(Clone)]
pub struct Lexer<T, S> {
    token: T,
    ignored: S,
}

impl<T, S> Lexer<T, S> {
    pub fn new(token: T, ignored: S) -> Self {
        Lexer { token, ignored }
    }
}

impl<T, S> Parser for Lexer<T, S>
where
    T: Parser<Input = Text>,
    T::Output: Into<String>,
    S: Parser<Input = Text>,
{
    type Input = Text;
    type Output = Vec<String>;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, Vec<String>> {
        let (first, mut rest) = self
            .token
            .parse(cursor)
            .map_err(|_| Mismatch::new(cursor))?;
        let mut tokens = vec![first.into()];

        while !rest.eos() {
            let Ok((_, after_ignored)) = self.ignored.parse(rest) else {
                break;
            };
            let Ok((token, after_token)) = self.token.parse(after_ignored) else {
                break;
            };
            if after_token.len() == rest.len() {
                break;
            }
            tokens.push(token.into());
            rest = after_token;
        }

        if !rest.eos() {
            trace!(
                tokens = tokens.len(),
                unlexed = rest.len(),
                "lexer stopped before end of source"
            );
            return Err(Mismatch::new(cursor));
        }

        trace!(tokens = tokens.len(), "lexed source");
        Ok((tokens, rest))
    }
}

/// Convenience function to create a Lexer
pub fn lexer<T, S>(token: T, ignored: S) -> Lexer<T, S>
where
    T: Parser<Input = Text>,
    T::Output: Into<String>,
    S: Parser<Input = Text>,
{
    Lexer::new(token, ignored)
}

/// Lexes the source, then runs a token-level grammar over the tokens
///
/// The grammar must consume every token. On success the whole source is
/// consumed; on any failure the source is returned untouched.
#[derive(Clone)]
pub struct Tokenize<T, S, G> {
    lexer: Lexer<T, S>,
    grammar: G,
}

impl<T, S, G> Tokenize<T, S, G> {
    pub fn new(token: T, ignored: S, grammar: G) -> Self {
        Tokenize {
            lexer: Lexer::new(token, ignored),
            grammar,
        }
    }
}

impl<T, S, G> Parser for Tokenize<T, S, G>
where
    T: Parser<Input = Text>,
    T::Output: Into<String>,
    S: Parser<Input = Text>,
    G: Parser<Input = Tokens>,
{
    type Input = Text;
    type Output = G::Output;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, G::Output> {
        let (tokens, rest) = self.lexer.parse(cursor)?;
        let context = TokenContext::new(&tokens);

        match self.grammar.parse(context) {
            Ok((value, after)) if after.eos() => {
                trace!(tokens = tokens.len(), "token grammar matched");
                Ok((value, rest))
            }
            Ok((_, after)) => {
                trace!(
                    tokens = tokens.len(),
                    position = after.position(),
                    "token grammar left tokens unconsumed"
                );
                Err(Mismatch::new(cursor))
            }
            Err(_) => {
                trace!(tokens = tokens.len(), "token grammar did not match");
                Err(Mismatch::new(cursor))
            }
        }
    }
}

/// Build a parser that tokenizes the source and parses the tokens with `grammar`
pub fn tokenize<T, S, G>(token: T, ignored: S, grammar: G) -> Tokenize<T, S, G>
where
    T: Parser<Input = Text>,
    T::Output: Into<String>,
    S: Parser<Input = Text>,
    G: Parser<Input = Tokens>,
{
    Tokenize::new(token, ignored, grammar)
}
