use crate::cursor::{Cursor, Input};

/// Character-level input: the cursor is the remaining suffix of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {}

impl Input for Text {
    type Cursor<'code> = &'code str;
}

impl<'code> Cursor<'code> for &'code str {
    type Element = char;

    fn value(&self) -> Option<char> {
        self.chars().next()
    }

    fn next(self) -> Self {
        match self.chars().next() {
            Some(c) => &self[c.len_utf8()..],
            None => self,
        }
    }

    fn remaining_len(&self) -> usize {
        self.len()
    }
}
