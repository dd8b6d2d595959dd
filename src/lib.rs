//! # LexiComb - Parser Combinator Library
//!
//! LexiComb builds parsers out of small composable pieces and runs the same
//! combinators at two levels: directly over characters, and over a list of
//! tokens produced by a lexer.
//!
//! - **Backtracking**: a parser that fails hands back the input it was given,
//!   so alternatives always restart from the same place
//! - **Recursive grammars**: [`Lazy`] lets a grammar refer to itself before it
//!   is finished
//! - **Expressions**: [`infix_left`] and [`infix_right`] build operator chains;
//!   nesting them gives precedence levels
//! - **Two-phase parsing**: [`tokenize`] lexes the source and runs a
//!   token-level grammar over the result
//!
//! ```
//! use lexicomb::{InfixExt, MapExt, Parser, RepeatExt, utf8::{digit, is_char}};
//!
//! let number = digit()
//!     .many1()
//!     .map(|digits| digits.into_iter().collect::<String>().parse::<i64>().unwrap_or(0));
//! let product = number.infix_left(is_char('*'), |l, _, r| l * r);
//! let sum = product.infix_left(is_char('+'), |l, _, r| l + r);
//!
//! assert_eq!(sum.parse("1+10*2"), Ok((21, "")));
//! ```

pub mod and;
pub mod between;
pub mod cursor;
pub mod cursors;
pub mod default;
pub mod error;
pub mod followed_by;
pub mod infix;
pub mod lazy;
pub mod map;
pub mod not;
pub mod or;
pub mod parser;
pub mod repeat;
pub mod token;
pub mod tokenize;
pub mod until;
pub mod utf8;

pub use and::{And, AndExt, Sequence, and, seq, sequence};
pub use between::{Between, BetweenExt, between, surrounded};
pub use cursor::{Cursor, CursorOf, Input};
pub use cursors::{Text, TokenContext, Tokens};
pub use default::{constant, end_of_input};
pub use error::{GrammarError, Mismatch};
pub use followed_by::{FollowedBy, FollowedByExt, followed_by};
pub use infix::{InfixExt, InfixLeft, InfixRight, infix_left, infix_right};
pub use lazy::{Lazy, LazyRef, lazy};
pub use map::{Map, MapExt, map};
pub use not::not;
pub use or::{Choice, Or, OrExt, choice, or};
pub use parser::{Outcome, ParseResult, Parser, TokenParseResult};
pub use repeat::{Repeat, RepeatExt, many, many1, repeat, times};
pub use token::{Token, TokenExt, token};
pub use tokenize::{Lexer, Tokenize, lexer, tokenize};
pub use until::until;
