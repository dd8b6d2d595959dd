use crate::cursor::CursorOf;
use crate::cursors::Text;
use crate::error::Mismatch;
use crate::not::not;
use crate::parser::{ParseResult, Parser};

/// Parser for bracketed spans such as comments
///
/// Matches `begin`, scans with [`not`] until `stop` matches, then matches
/// `stop`. The mapper receives the begin value, the scanned text and the stop
/// value. An unterminated span fails at the entry input.
#[derive(Clone)]
pub struct UntilParser<B, S, F> {
    begin: B,
    stop: S,
    mapper: F,
}

impl<B, S, F> UntilParser<B, S, F> {
    pub fn new(begin: B, stop: S, mapper: F) -> Self {
        Self {
            begin,
            stop,
            mapper,
        }
    }
}

impl<B, S, F, R> Parser for UntilParser<B, S, F>
where
    B: Parser<Input = Text>,
    S: Parser<Input = Text>,
    F: Fn(B::Output, String, S::Output) -> R,
{
    type Input = Text;
    type Output = R;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, R> {
        let (opening, rest) = self
            .begin
            .parse(cursor)
            .map_err(|_| Mismatch::new(cursor))?;
        let (scanned, rest) = not(&self.stop).parse(rest)?;
        let (closing, rest) = self
            .stop
            .parse(rest)
            .map_err(|_| Mismatch::new(cursor))?;
        Ok(((self.mapper)(opening, scanned, closing), rest))
    }
}

/// Convenience function to create an UntilParser
#[doc(alias = "scan_until")]
pub fn until<B, S, F, R>(begin: B, stop: S, mapper: F) -> UntilParser<B, S, F>
where
    B: Parser<Input = Text>,
    S: Parser<Input = Text>,
    F: Fn(B::Output, String, S::Output) -> R,
{
    UntilParser::new(begin, stop, mapper)
}
