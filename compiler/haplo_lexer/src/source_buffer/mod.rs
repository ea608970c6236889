//! Sentinel-terminated source buffer.
//!
//! The buffer stores a `0x00` sentinel byte after the source content so the
//! cursor can read its current byte at end of input without a bounds check
//! failing.

use crate::{Cursor, Position};

/// Owned copy of the source with a trailing sentinel.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes the sentinel).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes are truncated to that length;
    /// spans are 32-bit.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let content = &bytes[..source_len as usize];

        let mut buf = Vec::with_capacity(content.len() + 1);
        buf.extend_from_slice(content);
        buf.push(0);

        Self { buf, source_len }
    }

    /// A cursor at the start of the source.
    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at(Position::START)
    }

    /// Line and column of a byte offset, by counting the newlines before it.
    ///
    /// Only used on error paths, so the scan is not cached.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "prefix.len() <= source_len which fits in u32"
    )]
    pub fn locate(&self, offset: u32) -> Position {
        let offset = offset.min(self.source_len);
        let prefix = &self.buf[..offset as usize];
        let line = memchr::memchr_iter(b'\n', prefix).count() as u32;
        let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);
        Position {
            offset,
            line,
            column: (prefix.len() - line_start) as u32,
        }
    }

    /// A cursor resuming at a previously saved position.
    ///
    /// Positions past the end are clamped to end of input.
    pub fn cursor_at(&self, position: Position) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len, position)
    }
}
