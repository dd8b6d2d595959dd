//! Integration tests for character-level expression grammars
//!
//! A recursive calculator built from `lazy`, `between` and stacked
//! `infix_left` layers, one layer per operator.

use lexicomb::utf8::{digit, is_char};
use lexicomb::{BetweenExt, InfixExt, Lazy, MapExt, OrExt, Parser, RepeatExt, Text, lazy};
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;

fn number() -> impl Parser<Input = Text, Output = i64> + Clone + Send + Sync + 'static {
    digit()
        .many1()
        .map(|digits| digits.into_iter().collect::<String>().parse().unwrap())
}

/// Operators bind tighter the earlier they are layered: `*`, `/`, `+`, `-`
fn calculator() -> Lazy<Text, i64> {
    let expression: Lazy<Text, i64> = lazy();

    let atom = expression
        .reference()
        .between(is_char('('), is_char(')'))
        .or(number());
    let product = atom.infix_left(is_char('*'), |l, _, r| l * r);
    let quotient = product.infix_left(is_char('/'), |l, _, r| l / r);
    let sum = quotient.infix_left(is_char('+'), |l, _, r| l + r);
    let difference = sum.infix_left(is_char('-'), |l, _, r| l - r);

    expression.set(difference).unwrap();
    expression
}

#[test]
fn test_nested_expression() {
    let parser = calculator();

    assert_eq!(
        parser.parse("((1+4/2)*123-9)*100"),
        Ok((((1 + 4 / 2) * 123 - 9) * 100, ""))
    );
}

#[rstest]
#[case("1+10*2", 21)]
#[case("(1+10)*2", 22)]
#[case("8/2/2", 2)]
#[case("10-2-3", 5)]
#[case("((((7))))", 7)]
fn test_expressions(#[case] source: &str, #[case] expected: i64) {
    assert_eq!(calculator().parse(source), Ok((expected, "")));
}

#[test]
fn test_unbalanced_parenthesis_fails_at_entry() {
    let error = calculator().parse("(1+2").unwrap_err();
    assert_eq!(error.remaining(), "(1+2");
}

#[test]
fn test_trailing_text_is_left() {
    assert_eq!(calculator().parse("1+2)"), Ok((3, ")")));
    assert_eq!(calculator().parse("4*"), Ok((4, "*")));
}

#[test]
fn test_grammar_shared_between_threads() {
    let parser = Arc::new(calculator());

    let handles: Vec<_> = (1..=4i64)
        .map(|n| {
            let parser = Arc::clone(&parser);
            std::thread::spawn(move || {
                let source = format!("({n}+1)*{n}");
                parser.parse(source.as_str()).map(|(value, _)| value).ok()
            })
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results, vec![Some(2), Some(6), Some(12), Some(20)]);
}

proptest! {
    #[test]
    fn precedence_matches_integer_arithmetic(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        let source = format!("{a}+{b}*{c}-{a}");
        prop_assert_eq!(calculator().parse(source.as_str()), Ok((a + b * c - a, "")));
    }

    #[test]
    fn failed_parse_returns_source(source in "[()+*0-9]{1,8}") {
        let result = calculator().parse(source.as_str());
        if let Err(error) = result {
            prop_assert_eq!(error.remaining(), source.as_str());
        }
    }
}
