use crate::cursor::{Cursor, Input};

/// Token-level input: the cursor walks an ordered list of token strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokens {}

impl Input for Tokens {
    type Cursor<'code> = TokenContext<'code>;
}

/// An immutable position in a token list
///
/// `current()` is the token under the cursor; `rest()` the tokens after it.
/// Advancing returns a new context.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenContext<'code> {
    Valid {
        tokens: &'code [String],
        position: usize,
    },
    EndOfFile {
        tokens: &'code [String],
    },
}

impl<'code> TokenContext<'code> {
    pub fn new(tokens: &'code [String]) -> Self {
        if tokens.is_empty() {
            return TokenContext::EndOfFile { tokens };
        }
        TokenContext::Valid {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor
    pub fn current(&self) -> Option<&'code str> {
        match self {
            TokenContext::Valid { tokens, position } => Some(tokens[*position].as_str()),
            TokenContext::EndOfFile { .. } => None,
        }
    }

    /// The tokens following the current one
    pub fn rest(&self) -> &'code [String] {
        match self {
            TokenContext::Valid { tokens, position } => &tokens[position + 1..],
            TokenContext::EndOfFile { .. } => &[],
        }
    }

    pub fn position(&self) -> usize {
        match self {
            TokenContext::Valid { position, .. } => *position,
            TokenContext::EndOfFile { tokens } => tokens.len(),
        }
    }
}

impl<'code> Cursor<'code> for TokenContext<'code> {
    type Element = &'code str;

    fn value(&self) -> Option<Self::Element> {
        self.current()
    }

    fn next(self) -> Self {
        match self {
            TokenContext::Valid { tokens, position } => {
                if position + 1 >= tokens.len() {
                    TokenContext::EndOfFile { tokens }
                } else {
                    TokenContext::Valid {
                        tokens,
                        position: position + 1,
                    }
                }
            }
            TokenContext::EndOfFile { tokens } => TokenContext::EndOfFile { tokens },
        }
    }

    fn remaining_len(&self) -> usize {
        match self {
            TokenContext::Valid { tokens, position } => tokens.len() - position,
            TokenContext::EndOfFile { .. } => 0,
        }
    }
}
