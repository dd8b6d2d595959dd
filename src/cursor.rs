use std::fmt::Debug;

/// Generic cursor trait for parser combinators
///
/// A cursor represents a position in a sequence of elements that can be advanced
/// and queried. This abstraction allows parsers to work with different underlying
/// data types (characters, tokens) while maintaining the same combinator interface.
///
/// Cursors are immutable values: advancing returns a new cursor and every saved
/// copy stays valid. Combinators rely on this to hand back the exact cursor they
/// were entered with when they fail.
pub trait Cursor<'code>: Copy + Debug {
    /// The type of elements this cursor iterates over
    type Element;

    /// Get the element at the current cursor position, `None` at the end
    fn value(&self) -> Option<Self::Element>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Number of units left to read
    ///
    /// Only compared between cursors over the same input, to tell whether a
    /// parser made progress.
    fn remaining_len(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.remaining_len() == 0
    }
}

/// Selects the kind of input a parser reads
///
/// Implemented by uninhabited marker types. The cursor is a generic associated
/// type so a single parser value can run over inputs of any lifetime.
pub trait Input {
    type Cursor<'code>: Cursor<'code>;
}

/// The cursor a parser over input `I` reads from
pub type CursorOf<'code, I> = <I as Input>::Cursor<'code>;
