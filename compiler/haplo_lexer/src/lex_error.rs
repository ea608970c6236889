//! Lexer errors.
//!
//! A [`LexError`] records what went wrong and where: the span of the
//! offending text plus the 0-based line and column where it starts.

use std::fmt;

use haplo_diagnostic::ErrorCode;
use haplo_ir::Span;

use crate::Position;

/// Lexical error with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A token was required but the input ended.
    UnexpectedEndOfInput,
    /// Missing closing `"`.
    UnterminatedString,
    /// Atom longer than [`LexerConfig::max_atom_len`](crate::LexerConfig).
    AtomTooLong { len: usize, max: usize },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, at: Position) -> Self {
        LexError {
            span,
            kind,
            line: at.line,
            column: at.column,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedEndOfInput => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::AtomTooLong { .. } => ErrorCode::E0003,
        }
    }

    /// One-line description without location.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnexpectedEndOfInput | LexErrorKind::UnterminatedString => {
                self.code().description().to_string()
            }
            LexErrorKind::AtomTooLong { len, max } => {
                format!("atom of {len} bytes exceeds the limit of {max}")
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at line {}, column {}",
            self.code(),
            self.message(),
            self.line,
            self.column
        )
    }
}

impl std::error::Error for LexError {}
