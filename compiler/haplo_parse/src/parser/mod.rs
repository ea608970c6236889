//! Stateful parser over one source buffer.

use haplo_ir::{Atom, Expr, Span};
use haplo_lexer::{Lexer, LexerConfig, Token, TokenKind};
use haplo_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{ParseError, ParseErrorKind};

/// Parses successive top-level forms from a source buffer.
#[derive(Clone, Debug)]
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Parser {
            lexer: Lexer::new(source),
        }
    }

    pub fn with_config(source: &str, config: LexerConfig) -> Self {
        Parser {
            lexer: Lexer::with_config(source, config),
        }
    }

    /// Returns `true` when only whitespace remains.
    pub fn is_at_end(&self) -> bool {
        self.lexer.is_at_end()
    }

    /// Parse the next top-level form.
    ///
    /// Returns `Ok(None)` at end of input, for a comment line, and for a
    /// top-level `()`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_next(&mut self) -> Result<Option<Expr>, ParseError> {
        let token = self.lexer.peek()?;
        let result = match token.kind {
            TokenKind::EndOfInput => Ok(None),
            TokenKind::Comment => {
                self.advance()?;
                self.lexer.skip_line();
                Ok(None)
            }
            TokenKind::Open => {
                self.advance()?;
                self.parse_list()
            }
            TokenKind::Close => {
                let token = self.advance()?;
                Err(self.error(ParseErrorKind::UnrecognizedToken, &token))
            }
            TokenKind::Quote | TokenKind::Atom(_) => self.parse_implicit_list(),
        };
        match &result {
            Ok(Some(expr)) => debug!(%expr, "parsed form"),
            Ok(None) => trace!("no form"),
            Err(err) => debug!(error = %err.dump(), "parse failed"),
        }
        result
    }

    /// Parse every remaining form, skipping comments and empty forms.
    ///
    /// Stops at the first error.
    pub fn parse_all(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut forms = Vec::new();
        while !self.is_at_end() {
            if let Some(expr) = self.parse_next()? {
                forms.push(expr);
            }
        }
        Ok(forms)
    }

    /// Elements after an already consumed `(` up to its matching `)`.
    ///
    /// `()` yields `None`; callers decide whether that is allowed.
    fn parse_list(&mut self) -> Result<Option<Expr>, ParseError> {
        let mut elements = Vec::new();
        loop {
            let token = self.advance()?;
            match token.kind {
                TokenKind::Close => return Ok(Expr::list(elements)),
                TokenKind::EndOfInput | TokenKind::Comment => {
                    return Err(self.error(ParseErrorKind::MalformedParenthesis, &token));
                }
                _ => elements.push(self.parse_element(token)?),
            }
        }
    }

    /// Elements up to end of input, a `)` or a comment, which stay unconsumed.
    fn parse_implicit_list(&mut self) -> Result<Option<Expr>, ParseError> {
        let mut elements = Vec::new();
        loop {
            let token = self.lexer.peek()?;
            if matches!(
                token.kind,
                TokenKind::EndOfInput | TokenKind::Close | TokenKind::Comment
            ) {
                return Ok(Expr::list(elements));
            }
            let token = self.advance()?;
            elements.push(self.parse_element(token)?);
        }
    }

    /// One list element starting at `token`, which has been consumed.
    fn parse_element(&mut self, token: Token) -> Result<Expr, ParseError> {
        match token.kind {
            TokenKind::Atom(atom) => Ok(Expr::atom(atom)),
            TokenKind::Quote => self.parse_quoted(&token),
            TokenKind::Open => match ensure_sufficient_stack(|| self.parse_list())? {
                Some(nested) => Ok(nested),
                None => {
                    let close_end = self.lexer.position().offset;
                    let span = token.span.merge(Span::point(close_end));
                    Err(self.error_spanning(ParseErrorKind::EmptyList, span, &TokenKind::Close))
                }
            },
            TokenKind::Close | TokenKind::Comment | TokenKind::EndOfInput => {
                Err(self.error(ParseErrorKind::UnrecognizedToken, &token))
            }
        }
    }

    /// The symbol directly after a consumed quote token. A quote at the end
    /// of input is the lexer's end-of-input error.
    fn parse_quoted(&mut self, quote: &Token) -> Result<Expr, ParseError> {
        let token = self.advance_required()?;
        match token.kind {
            TokenKind::Atom(Atom::Symbol(name)) if quote.span.precedes(token.span) => {
                Ok(Expr::atom(Atom::Quote(name)))
            }
            _ => Err(self.error(ParseErrorKind::UnexpectedAfterQuote, &token)),
        }
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        Ok(traced(self.lexer.next()?))
    }

    fn advance_required(&mut self) -> Result<Token, ParseError> {
        Ok(traced(self.lexer.expect_token()?))
    }

    fn error(&self, kind: ParseErrorKind, token: &Token) -> ParseError {
        self.error_spanning(kind, token.span, &token.kind)
    }

    fn error_spanning(&self, kind: ParseErrorKind, span: Span, token: &TokenKind) -> ParseError {
        let at = self.lexer.locate(span.start);
        ParseError::at_token(kind, span, at, token)
    }
}

fn traced(token: Token) -> Token {
    trace!(
        kind = token.kind.name(),
        span_start = token.span.start,
        span_end = token.span.end,
        "advance"
    );
    token
}
