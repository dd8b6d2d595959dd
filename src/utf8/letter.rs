use crate::utf8::character::SatisfiesParser;

/// Matches one alphabetic character
pub fn letter() -> SatisfiesParser<fn(char) -> bool> {
    SatisfiesParser::new(char::is_alphabetic as fn(char) -> bool)
}
