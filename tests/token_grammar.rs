//! Integration tests for the two-phase pipeline
//!
//! Source text is lexed into tokens, then a grammar built from `.token()`
//! leaves and the ordinary combinators runs over the token list.

use lexicomb::utf8::{digit, is_char, letter, satisfies, whitespace};
use lexicomb::{
    BetweenExt, Cursor, FollowedByExt, InfixExt, Lazy, MapExt, OrExt, Parser, RepeatExt, Text,
    TokenContext, TokenExt, Tokens, choice, end_of_input, lazy, lexer, seq, tokenize, until,
};
use rstest::rstest;

fn integer() -> impl Parser<Input = Text, Output = String> + Clone + Send + Sync + 'static {
    digit()
        .many1()
        .map(|digits| digits.into_iter().collect::<String>())
}

fn symbol() -> impl Parser<Input = Text, Output = String> + Clone + Send + Sync + 'static {
    satisfies(|c| "+-*()".contains(c)).map(String::from)
}

fn ignored() -> impl Parser<Input = Text, Output = Vec<()>> + Clone {
    whitespace()
        .map(|_| ())
        .or(until(is_char('#'), is_char('\n'), |_, _, _| ()))
        .many()
}

fn value() -> impl Parser<Input = Tokens, Output = i64> + Clone + Send + Sync + 'static {
    integer()
        .map(|digits| digits.parse::<i64>().unwrap())
        .token()
}

fn expression() -> Lazy<Tokens, i64> {
    let expression: Lazy<Tokens, i64> = lazy();

    let atom = expression
        .reference()
        .between(is_char('(').token(), is_char(')').token())
        .or(value());
    let product = atom.infix_left(is_char('*').token(), |l, _, r| l * r);
    let sum = product.infix_left(is_char('+').token(), |l, _, r| l + r);
    let difference = sum.infix_left(is_char('-').token(), |l, _, r| l - r);

    expression.set(difference).unwrap();
    expression
}

#[test]
fn test_lexer_drops_comments() {
    let parser = lexer(integer().or(symbol()), ignored());

    let (tokens, rest) = parser.parse("12 + 3 # trailing note\n* 4").unwrap();
    assert_eq!(tokens, vec!["12", "+", "3", "*", "4"]);
    assert_eq!(rest, "");
}

#[rstest]
#[case("2 * (3 + 4)", 14)]
#[case("2*3+4", 10)]
#[case("100 - 1 - 1", 98)]
#[case("( ( 5 ) )", 5)]
#[case("1 + 2 # comment\n + 3", 6)]
fn test_token_expression(#[case] source: &str, #[case] expected: i64) {
    let grammar = expression();
    let parser = tokenize(integer().or(symbol()), ignored(), grammar.reference());

    assert_eq!(parser.parse(source), Ok((expected, "")));
}

#[rstest]
#[case("2 * (3 + 4")]
#[case("2 3")]
#[case("2 +")]
#[case(" 2")]
#[case("2 ?")]
fn test_token_expression_rejects(#[case] source: &str) {
    let grammar = expression();
    let parser = tokenize(integer().or(symbol()), ignored(), grammar.reference());

    let error = parser.parse(source).unwrap_err();
    assert_eq!(error.remaining(), source);
}

#[test]
fn test_single_token_then_end() {
    let grammar = value().followed_by(end_of_input());
    let parser = tokenize(integer().or(symbol()), ignored(), grammar);

    assert_eq!(parser.parse("42"), Ok((42, "")));
    assert!(parser.parse("42 43").is_err());
}

#[test]
fn test_repetition_over_tokens() {
    let grammar = value().many1().map(|values| values.into_iter().sum::<i64>());
    let parser = tokenize(integer(), ignored(), grammar);

    assert_eq!(parser.parse("1 2 3 4"), Ok((10, "")));
}

fn token_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_infix_right_over_tokens() {
    let tokens = token_list(&["a", "-", "b", "-", "c"]);
    let operand = letter().map(|c| c.to_string()).token();
    let parser = operand.infix_right(is_char('-').token(), |l, _, r| format!("({l}{r})"));

    let (value, rest) = parser.parse(TokenContext::new(&tokens)).unwrap();
    assert_eq!(value, "((cb)a)");
    assert!(rest.eos());
}

#[test]
fn test_choice_over_tokens_backtracks() {
    let tokens = token_list(&["1", "*", "2"]);
    let context = TokenContext::new(&tokens);
    let parser = choice((
        seq((value(), is_char('+').token(), value())).map(|(l, _, r)| l + r),
        seq((value(), is_char('*').token(), value())).map(|(l, _, r)| l * r),
    ));

    let (product, rest) = parser.parse(context).unwrap();
    assert_eq!(product, 2);
    assert_eq!(rest.position(), 3);

    let tokens = token_list(&["1", "-", "2"]);
    let context = TokenContext::new(&tokens);
    let error = parser.parse(context).unwrap_err();
    assert_eq!(error.remaining(), context);
}

#[rstest]
#[case(&["1", "2", "3"], Some(vec![1, 2]), 2)]
#[case(&["1"], None, 0)]
fn test_times_over_tokens(
    #[case] values: &[&str],
    #[case] expected: Option<Vec<i64>>,
    #[case] position: usize,
) {
    let tokens = token_list(values);
    let context = TokenContext::new(&tokens);

    match value().times(2).parse(context) {
        Ok((found, rest)) => {
            assert_eq!(Some(found), expected);
            assert_eq!(rest.position(), position);
        }
        Err(error) => {
            assert_eq!(expected, None);
            assert_eq!(error.remaining().position(), position);
        }
    }
}

#[test]
fn test_bounded_repeat_over_tokens() {
    let tokens = token_list(&["1", "2", "3", "4"]);
    let context = TokenContext::new(&tokens);

    let (found, rest) = value().repeat(1, 3).parse(context).unwrap();
    assert_eq!(found, vec![1, 2, 3]);
    assert_eq!(rest.current(), Some("4"));
}
