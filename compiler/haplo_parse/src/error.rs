//! Parse errors.

use std::fmt;

use haplo_diagnostic::ErrorCode;
use haplo_ir::Span;
use haplo_lexer::{LexError, Position, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lexer failed.
    Lex(LexError),
    /// A token that cannot start a form, such as a stray `)`.
    UnrecognizedToken,
    /// A list was not closed before end of input or a comment.
    MalformedParenthesis,
    /// The quote was not directly followed by a symbol.
    UnexpectedAfterQuote,
    /// `()` used as a list element.
    EmptyList,
}

/// A parse error with its location and the token that triggered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// 0-based line of `span.start`.
    pub line: u32,
    /// 0-based byte column of `span.start`.
    pub column: u32,
    /// Name of the offending token, `NONE` when the lexer failed.
    pub last_token: &'static str,
}

impl ParseError {
    pub(crate) fn at_token(kind: ParseErrorKind, span: Span, at: Position, token: &TokenKind) -> Self {
        ParseError {
            kind,
            span,
            line: at.line,
            column: at.column,
            last_token: token.name(),
        }
    }

    /// Diagnostic code. Lexer failures keep the lexer's code.
    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.code(),
            ParseErrorKind::UnrecognizedToken => ErrorCode::E1001,
            ParseErrorKind::MalformedParenthesis => ErrorCode::E1002,
            ParseErrorKind::UnexpectedAfterQuote => ErrorCode::E1003,
            ParseErrorKind::EmptyList => ErrorCode::E1004,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.message(),
            _ => self.code().description().to_string(),
        }
    }

    /// Single-line state dump for diagnostics.
    ///
    /// ```text
    /// error: E1002 malformed parenthesis, pos: 10, line: 0, column: 10, last_token: EOF
    /// ```
    pub fn dump(&self) -> String {
        format!(
            "error: {} {}, pos: {}, line: {}, column: {}, last_token: {}",
            self.code(),
            self.message(),
            self.span.start,
            self.line,
            self.column,
            self.last_token
        )
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            span: err.span,
            line: err.line,
            column: err.column,
            last_token: "NONE",
            kind: ParseErrorKind::Lex(err),
        }
    }
}

impl fmt::Display for ParseError {
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

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Lex(err) => Some(err),
            _ => None,
        }
    }
}
