use crate::cursor::CursorOf;
use crate::cursors::Text;
use crate::error::Mismatch;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string prefix
#[derive(Debug, Clone)]
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for IsStringParser {
    type Input = Text;
    type Output = Cow<'static, str>;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Text>,
    ) -> ParseResult<'code, Cow<'static, str>> {
        match cursor.strip_prefix(self.expected.as_ref()) {
            // Clone is cheap here - just copies the reference for &'static str
            Some(rest) => Ok((self.expected.clone(), rest)),
            None => Err(Mismatch::new(cursor)),
        }
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("parser", "")]
    #[case("parser combinator", " combinator")]
    fn test_match(#[case] input: &str, #[case] remaining: &str) {
        let (result, rest) = is_string("parser").parse(input).unwrap();
        assert_eq!(result, "parser");
        assert_eq!(rest, remaining);
    }

    #[rstest]
    #[case("combinator")]
    #[case("pars")]
    #[case("")]
    fn test_no_match(#[case] input: &str) {
        let error = is_string("parser").parse(input).unwrap_err();
        assert_eq!(error.remaining(), input);
    }

    #[test]
    fn test_unicode_string() {
        let (result, rest) = is_string("こんにちは").parse("こんにちは世界").unwrap();
        assert_eq!(result.as_ref(), "こんにちは");
        assert_eq!(rest, "世界");
    }

    #[test]
    fn test_owned_expected() {
        let expected = String::from("*/");
        let (result, rest) = is_string(expected).parse("*/ code").unwrap();
        assert_eq!(result, "*/");
        assert_eq!(rest, " code");
    }

    #[test]
    fn test_empty_expected_always_matches() {
        let (result, rest) = is_string("").parse("abc").unwrap();
        assert_eq!(result, "");
        assert_eq!(rest, "abc");
    }
}
