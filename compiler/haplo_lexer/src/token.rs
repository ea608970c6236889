//! Tokens produced by the lexer.

use std::fmt;

use haplo_ir::{Atom, Span};

/// What a token is.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Open,
    Close,
    Comment,
    Quote,
    Atom(Atom),
    EndOfInput,
}

impl TokenKind {
    /// Upper-case name used in parser dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Open => "OPEN",
            TokenKind::Close => "CLOSE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Quote => "QUOTE",
            TokenKind::Atom(_) => "ATOM",
            TokenKind::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token and the source bytes it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
