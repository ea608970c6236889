//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte by byte and keeps the 0-based line and column
//! of its position. Columns count bytes, not characters. EOF is reached when
//! the offset equals the source length, where the sentinel `0x00` sits.

use std::borrow::Cow;

/// A location in the source: byte offset plus 0-based line and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Start of the source.
    pub const START: Position = Position {
        offset: 0,
        line: 0,
        column: 0,
    };
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so saving and restoring state is free.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and `position.offset <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    source_len: u32,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32, position: Position) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        let mut position = position;
        position.offset = position.offset.min(source_len);
        Self {
            buf,
            source_len,
            position,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.position.offset as usize]
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position.offset >= self.source_len
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.position.offset
    }

    /// Current offset, line and column.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Advance past the current byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        self.position.offset += 1;
    }

    /// Advance while `pred` holds for the current byte, stopping at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Skip spaces, tabs, carriage returns and newlines.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    }

    /// Advance to the next occurrence of `byte`.
    ///
    /// Returns `true` with the cursor on `byte`, or `false` with the cursor
    /// at EOF when the byte does not occur. Newlines crossed on the way
    /// update line and column.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "skipped.len() <= source_len which fits in u32"
    )]
    pub fn advance_to(&mut self, byte: u8) -> bool {
        let remaining = self.remaining();
        let (skip, found) = match memchr::memchr(byte, remaining) {
            Some(offset) => (offset, true),
            None => (remaining.len(), false),
        };
        let skipped = &remaining[..skip];

        match memchr::memrchr(b'\n', skipped) {
            Some(last_newline) => {
                self.position.line += memchr::memchr_iter(b'\n', skipped).count() as u32;
                self.position.column = (skip - last_newline - 1) as u32;
            }
            None => self.position.column += skip as u32,
        }
        self.position.offset += skip as u32;
        found
    }

    /// Advance to the next `\n` (left unconsumed) or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.advance_to(b'\n');
    }

    /// Source text between two offsets.
    ///
    /// Token boundaries always fall on ASCII delimiters, so the slice is
    /// valid UTF-8 and borrowed; a slice that would split a character is
    /// repaired rather than rejected.
    pub fn slice(&self, start: u32, end: u32) -> Cow<'a, str> {
        debug_assert!(start <= end && end <= self.source_len);
        String::from_utf8_lossy(&self.buf[start as usize..end as usize])
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> Cow<'a, str> {
        self.slice(start, self.position.offset)
    }

    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.position.offset as usize..self.source_len as usize]
    }
}
