use crate::utf8::character::SatisfiesParser;

/// Matches one whitespace character
pub fn whitespace() -> SatisfiesParser<fn(char) -> bool> {
    SatisfiesParser::new(char::is_whitespace as fn(char) -> bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn test_whitespace_characters() {
        for input in [" ", "\t", "\n", "\r", "\u{00A0}"] {
            assert!(whitespace().parse(input).is_ok(), "Failed for: {:?}", input);
        }
    }

    #[test]
    fn test_consumes_single_character() {
        let (c, rest) = whitespace().parse("  x").unwrap();
        assert_eq!(c, ' ');
        assert_eq!(rest, " x");
    }
}
