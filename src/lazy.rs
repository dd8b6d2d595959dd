use crate::cursor::{CursorOf, Input};
use crate::error::GrammarError;
use crate::parser::{Outcome, Parser};
use std::sync::{Arc, OnceLock};
use tracing::debug;

type Target<I, T> = Box<dyn Parser<Input = I, Output = T> + Send + Sync>;

/// A deferred parser for building recursive grammars
///
/// Create the handle first, hand out [`Lazy::reference`] parsers wherever the
/// grammar needs to refer to itself, then bind the finished grammar with
/// [`Lazy::set`]. The cell is written once during construction and only read
/// while parsing, so a finished grammar can be shared between threads.
///
/// A grammar that contains a reference to its own cell keeps itself alive and
/// is never freed.
///
/// ```
/// use lexicomb::{BetweenExt, Lazy, MapExt, OrExt, Parser, Text, utf8::is_char};
///
/// // nested = "(" nested ")" | "x", counting the depth
/// let nested: Lazy<Text, usize> = Lazy::new();
/// let parser = nested
///     .reference()
///     .between(is_char('('), is_char(')'))
///     .map(|depth| depth + 1)
///     .or(is_char('x').map(|_| 0));
/// nested.set(parser).unwrap();
///
/// assert_eq!(nested.parse("((x))"), Ok((2, "")));
/// ```
pub struct Lazy<I: Input, T> {
    cell: Arc<OnceLock<Target<I, T>>>,
}

impl<I: Input + 'static, T: 'static> Lazy<I, T> {
    pub fn new() -> Self {
        Lazy {
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// A parser that forwards to whatever target is eventually set
    pub fn reference(&self) -> LazyRef<I, T> {
        LazyRef {
            cell: Arc::clone(&self.cell),
        }
    }

    /// Bind the target parser
    ///
    /// A target can only be set once; later calls return
    /// [`GrammarError::AlreadyBound`] and leave the first target in place.
    pub fn set<P>(&self, parser: P) -> Result<(), GrammarError>
    where
        P: Parser<Input = I, Output = T> + Send + Sync + 'static,
    {
        match self.cell.set(Box::new(parser)) {
            Ok(()) => {
                debug!("lazy parser bound");
                Ok(())
            }
            Err(_) => {
                debug!("lazy parser already bound, keeping first target");
                Err(GrammarError::AlreadyBound)
            }
        }
    }

    pub fn is_set(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<I: Input + 'static, T: 'static> Default for Lazy<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Input + 'static, T: 'static> Parser for Lazy<I, T> {
    type Input = I;
    type Output = T;

    fn parse<'code>(&self, cursor: CursorOf<'code, I>) -> Outcome<'code, I, T> {
        forward(&self.cell, cursor)
    }
}

/// Forwarding parser handed out by [`Lazy::reference`]
pub struct LazyRef<I: Input, T> {
    cell: Arc<OnceLock<Target<I, T>>>,
}

impl<I: Input, T> Clone for LazyRef<I, T> {
    fn clone(&self) -> Self {
        LazyRef {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<I: Input + 'static, T: 'static> Parser for LazyRef<I, T> {
    type Input = I;
    type Output = T;

    fn parse<'code>(&self, cursor: CursorOf<'code, I>) -> Outcome<'code, I, T> {
        forward(&self.cell, cursor)
    }
}

/// Create an unbound lazy parser
pub fn lazy<I: Input + 'static, T: 'static>() -> Lazy<I, T> {
    Lazy::new()
}

// An unbound cell is a wiring bug in the grammar, not input that fails to match
fn forward<'code, I: Input + 'static, T: 'static>(
    cell: &OnceLock<Target<I, T>>,
    cursor: CursorOf<'code, I>,
) -> Outcome<'code, I, T> {
    match cell.get() {
        Some(parser) => parser.parse(cursor),
        None => panic!("{}", GrammarError::Unbound),
    }
}
