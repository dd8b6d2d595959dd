use super::parser::Parser;
use crate::cursor::{Cursor, CursorOf};
use crate::cursors::Text;
use crate::parser::ParseResult;

/// Parser combinator that scans forward until the given parser would match
///
/// Consumes one character at a time while there is input left and `stop` does
/// not match at the current position. `stop` itself is never consumed. The scan
/// always succeeds, possibly with an empty string.
#[derive(Clone)]
pub struct Not<P> {
    stop: P,
}

impl<P> Not<P> {
    pub fn new(stop: P) -> Self {
        Not { stop }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser<Input = Text>,
{
    type Input = Text;
    type Output = String;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, String> {
        let mut rest = cursor;
        while !rest.eos() && self.stop.parse(rest).is_err() {
            rest = rest.next();
        }
        let scanned = &cursor[..cursor.len() - rest.len()];
        Ok((scanned.to_string(), rest))
    }
}

/// Convenience function to create a Not parser
#[doc(alias = "negated_scan")]
pub fn not<P>(stop: P) -> Not<P>
where
    P: Parser<Input = Text>,
{
    Not::new(stop)
}
