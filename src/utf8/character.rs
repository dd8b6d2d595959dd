use crate::cursor::{Cursor, CursorOf};
use crate::cursors::Text;
use crate::error::Mismatch;
use crate::parser::{ParseResult, Parser};

/// Parser that consumes and returns a single character
#[derive(Debug, Clone, Copy)]
pub struct CharParser;

impl Parser for CharParser {
    type Input = Text;
    type Output = char;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, char> {
        match cursor.value() {
            Some(c) => Ok((c, cursor.next())),
            None => Err(Mismatch::new(cursor)),
        }
    }
}

/// Convenience function to create a CharParser
pub fn char() -> CharParser {
    CharParser
}

/// Parser that matches a specific character
#[derive(Debug, Clone, Copy)]
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl Parser for IsCharParser {
    type Input = Text;
    type Output = char;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, char> {
        match cursor.value() {
            Some(c) if c == self.expected => Ok((c, cursor.next())),
            _ => Err(Mismatch::new(cursor)),
        }
    }
}

pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}

/// Parser that matches a single character accepted by a predicate
#[derive(Clone, Copy)]
pub struct SatisfiesParser<F> {
    predicate: F,
}

impl<F> SatisfiesParser<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F) -> Self {
        SatisfiesParser { predicate }
    }
}

impl<F> Parser for SatisfiesParser<F>
where
    F: Fn(char) -> bool,
{
    type Input = Text;
    type Output = char;

    fn parse<'code>(&self, cursor: CursorOf<'code, Text>) -> ParseResult<'code, char> {
        match cursor.value() {
            Some(c) if (self.predicate)(c) => Ok((c, cursor.next())),
            _ => Err(Mismatch::new(cursor)),
        }
    }
}

/// Convenience function to create a SatisfiesParser
pub fn satisfies<F>(predicate: F) -> SatisfiesParser<F>
where
    F: Fn(char) -> bool,
{
    SatisfiesParser::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", Ok(('a', "")))]
    #[case("abc", Ok(('a', "bc")))]
    #[case("1", Err(Mismatch::new("1")))]
    #[case("", Err(Mismatch::new("")))]
    fn test_is_char(#[case] input: &str, #[case] expected: ParseResult<'_, char>) {
        assert_eq!(is_char('a').parse(input), expected);
    }

    #[rstest]
    #[case("1", Ok(('1', "")))]
    #[case("a", Err(Mismatch::new("a")))]
    fn test_satisfies_digit(#[case] input: &str, #[case] expected: ParseResult<'_, char>) {
        let parser = satisfies(|c| c.is_ascii_digit());
        assert_eq!(parser.parse(input), expected);
    }

    #[test]
    fn test_char_multibyte() {
        let (c, rest) = char().parse("🦀rust").unwrap();
        assert_eq!(c, '🦀');
        assert_eq!(rest, "rust");
    }

    #[test]
    fn test_char_empty_input() {
        let error = char().parse("").unwrap_err();
        assert_eq!(error.remaining(), "");
    }

    #[test]
    fn test_is_char_unicode() {
        let (c, rest) = is_char('é').parse("été").unwrap();
        assert_eq!(c, 'é');
        assert_eq!(rest, "té");
    }
}
