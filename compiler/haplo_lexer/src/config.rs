//! Lexer configuration.

/// Default upper bound on the byte length of a single atom.
pub const DEFAULT_MAX_ATOM_LEN: usize = 1024;

/// Punctuation bytes and limits used by the [`Lexer`](crate::Lexer).
///
/// The four punctuation bytes must be ASCII and distinct from each other,
/// from whitespace and from `"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Opens a list. Default `(`.
    pub open: u8,
    /// Closes a list. Default `)`.
    pub close: u8,
    /// Starts a comment running to the end of the line. Default `#`.
    pub comment: u8,
    /// Marks a quoted name when directly followed by a symbol. Default `'`.
    pub quote: u8,
    /// Longest accepted atom in bytes, string quotes included.
    pub max_atom_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            open: b'(',
            close: b')',
            comment: b'#',
            quote: b'\'',
            max_atom_len: DEFAULT_MAX_ATOM_LEN,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_comment(mut self, comment: u8) -> Self {
        self.comment = comment;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_max_atom_len(mut self, max_atom_len: usize) -> Self {
        self.max_atom_len = max_atom_len;
        self
    }

    /// Bytes that end an unquoted atom.
    #[inline]
    pub fn is_delimiter(&self, byte: u8) -> bool {
        matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
            || byte == self.open
            || byte == self.close
            || byte == self.comment
    }
}
