//! Byte ranges into Haplo source.
//!
//! Tokens and parse errors carry a [`Span`] so diagnostics can point back
//! at the text; the tree itself does not.

use std::fmt;

/// Half-open byte range `start..end` into the source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`, used for end of input.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// `true` when `next` starts exactly where this span ends, with no
    /// whitespace between. A quote binds only to a name it touches.
    #[inline]
    pub const fn precedes(self, next: Span) -> bool {
        self.end == next.start
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
