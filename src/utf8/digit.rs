use crate::utf8::character::SatisfiesParser;

/// Matches one ASCII digit `0`-`9`
///
/// ASCII only, so the matched text always parses with `str::parse`.
pub fn digit() -> SatisfiesParser<fn(char) -> bool> {
    let predicate: fn(char) -> bool = |c| c.is_ascii_digit();
    SatisfiesParser::new(predicate)
}
