use thiserror::Error;

/// A parser did not match
///
/// Carries the cursor the failing parser was entered with. There is no
/// positional diagnostic: a mismatch only says "this parser, given this input,
/// did not match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input did not match")]
pub struct Mismatch<C> {
    remaining: C,
}

impl<C: Copy> Mismatch<C> {
    pub fn new(remaining: C) -> Self {
        Self { remaining }
    }

    /// The input left untouched by the failed parse
    pub fn remaining(&self) -> C {
        self.remaining
    }
}

/// Errors in how a grammar was assembled, as opposed to input that does not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("lazy parser used before a target was set")]
    Unbound,

    #[error("lazy parser already has a target")]
    AlreadyBound,
}
