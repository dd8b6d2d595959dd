use crate::cursor::{Cursor, CursorOf};
use crate::error::Mismatch;
use crate::parser::{Outcome, Parser};

/// Operand followed by zero or more `(operator, operand)` pairs
///
/// Each pair is matched as a unit: an operator with no operand after it is
/// left in the input. A pair that consumes nothing ends the chain.
fn operator_pairs<'code, P, O>(
    operand: &P,
    operator: &O,
    cursor: CursorOf<'code, P::Input>,
) -> Outcome<'code, P::Input, (P::Output, Vec<(O::Output, P::Output)>)>
where
    P: Parser,
    O: Parser<Input = P::Input>,
{
    let (head, mut rest) = operand.parse(cursor).map_err(|_| Mismatch::new(cursor))?;
    let mut pairs = Vec::new();

    loop {
        let Ok((op, after_op)) = operator.parse(rest) else {
            break;
        };
        let Ok((value, after_value)) = operand.parse(after_op) else {
            break;
        };
        if after_value.remaining_len() == rest.remaining_len() {
            break;
        }
        pairs.push((op, value));
        rest = after_value;
    }

    Ok(((head, pairs), rest))
}

/// Left-associative infix chain: `a op b op c` is `(a op b) op c`
#[derive(Clone)]
pub struct InfixLeft<P, O, F> {
    operand: P,
    operator: O,
    combine: F,
}

impl<P, O, F> InfixLeft<P, O, F> {
    pub fn new(operand: P, operator: O, combine: F) -> Self {
        InfixLeft {
            operand,
            operator,
            combine,
        }
    }
}

impl<P, O, F> Parser for InfixLeft<P, O, F>
where
    P: Parser,
    O: Parser<Input = P::Input>,
    F: Fn(P::Output, O::Output, P::Output) -> P::Output,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        let ((head, pairs), rest) = operator_pairs(&self.operand, &self.operator, cursor)?;
        let value = pairs
            .into_iter()
            .fold(head, |acc, (op, value)| (self.combine)(acc, op, value));
        Ok((value, rest))
    }
}

/// Right-folded infix chain
///
/// Parses like [`InfixLeft`] but reduces from the last operand backwards.
/// For `v0 op1 v1 op2 v2` the result is
/// `combine(combine(v2, op2, v1), op1, v0)`: the running value is always the
/// left argument, and each operator is paired with the operand before it.
#[derive(Clone)]
pub struct InfixRight<P, O, F> {
    operand: P,
    operator: O,
    combine: F,
}

impl<P, O, F> InfixRight<P, O, F> {
    pub fn new(operand: P, operator: O, combine: F) -> Self {
        InfixRight {
            operand,
            operator,
            combine,
        }
    }
}

impl<P, O, F> Parser for InfixRight<P, O, F>
where
    P: Parser,
    O: Parser<Input = P::Input>,
    F: Fn(P::Output, O::Output, P::Output) -> P::Output,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse<'code>(
        &self,
        cursor: CursorOf<'code, Self::Input>,
    ) -> Outcome<'code, Self::Input, Self::Output> {
        let ((head, pairs), rest) = operator_pairs(&self.operand, &self.operator, cursor)?;

        let mut pairs = pairs.into_iter().rev();
        let Some((mut op, mut acc)) = pairs.next() else {
            return Ok((head, rest));
        };
        for (previous_op, value) in pairs {
            acc = (self.combine)(acc, op, value);
            op = previous_op;
        }
        Ok(((self.combine)(acc, op, head), rest))
    }
}

/// Build a left-associative chain of `operand` separated by `operator`
pub fn infix_left<P, O, F>(operand: P, operator: O, combine: F) -> InfixLeft<P, O, F>
where
    P: Parser,
    O: Parser<Input = P::Input>,
    F: Fn(P::Output, O::Output, P::Output) -> P::Output,
{
    InfixLeft::new(operand, operator, combine)
}

/// Build a right-folded chain of `operand` separated by `operator`
pub fn infix_right<P, O, F>(operand: P, operator: O, combine: F) -> InfixRight<P, O, F>
where
    P: Parser,
    O: Parser<Input = P::Input>,
    F: Fn(P::Output, O::Output, P::Output) -> P::Output,
{
    InfixRight::new(operand, operator, combine)
}

/// Extension trait to treat a parser as the operand of an infix chain
pub trait InfixExt: Parser + Sized {
    fn infix_left<O, F>(self, operator: O, combine: F) -> InfixLeft<Self, O, F>
    where
        O: Parser<Input = Self::Input>,
        F: Fn(Self::Output, O::Output, Self::Output) -> Self::Output,
    {
        InfixLeft::new(self, operator, combine)
    }

    fn infix_right<O, F>(self, operator: O, combine: F) -> InfixRight<Self, O, F>
    where
        O: Parser<Input = Self::Input>,
        F: Fn(Self::Output, O::Output, Self::Output) -> Self::Output,
    {
        InfixRight::new(self, operator, combine)
    }
}

impl<P> InfixExt for P where P: Parser {}
