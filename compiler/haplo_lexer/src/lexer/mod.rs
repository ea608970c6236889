//! Token scanner.
//!
//! The lexer owns a [`SourceBuffer`] and a saved [`Position`]. Each call to
//! [`Lexer::next`] builds a cursor at that position, skips whitespace,
//! scans one token and stores the position after it. [`Lexer::peek`] scans
//! the same token without storing the new position.
//!
//! # Atom classification
//!
//! An atom is the longest run of non-delimiter bytes, or a `"`-delimited
//! string. The run is classified in order:
//!
//! 1. `"..."` is a [`Atom::String`] with the quotes stripped. No escape
//!    sequences are processed.
//! 2. `true` / `false` is a [`Atom::Bool`].
//! 3. A run that parses as a base-10 `i64` is an [`Atom::Integer`].
//! 4. A run containing a digit that parses as `f64` is an [`Atom::Float`].
//! 5. Anything else is an [`Atom::Symbol`].

use haplo_ir::{Atom, Span};

use crate::{Cursor, LexError, LexErrorKind, LexerConfig, Position, SourceBuffer, Token, TokenKind};

/// On-demand tokenizer over an owned source buffer.
#[derive(Clone, Debug)]
pub struct Lexer {
    buffer: SourceBuffer,
    position: Position,
    config: LexerConfig,
}

impl Lexer {
    /// Lexer with the default punctuation and atom limit.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &str, config: LexerConfig) -> Self {
        Lexer {
            buffer: SourceBuffer::new(source),
            position: Position::START,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Position after the last consumed token.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Line and column of a byte offset in this lexer's source.
    pub fn locate(&self, offset: u32) -> Position {
        self.buffer.locate(offset)
    }

    /// Returns `true` when only whitespace remains.
    pub fn is_at_end(&self) -> bool {
        let mut cursor = self.buffer.cursor_at(self.position);
        cursor.eat_whitespace();
        cursor.is_eof()
    }

    /// The token that the next call to [`next`](Self::next) returns.
    pub fn peek(&self) -> Result<Token, LexError> {
        self.scan().map(|(token, _)| token)
    }

    /// Consume and return the next token.
    ///
    /// At end of input this keeps returning [`TokenKind::EndOfInput`]. On
    /// error the position is left unchanged.
    #[allow(
        clippy::should_implement_trait,
        reason = "errors do not end the stream, so Iterator semantics do not fit"
    )]
    pub fn next(&mut self) -> Result<Token, LexError> {
        let (token, after) = self.scan()?;
        self.position = after;
        Ok(token)
    }

    /// Like [`next`](Self::next), but end of input is an error.
    pub fn expect_token(&mut self) -> Result<Token, LexError> {
        let token = self.next()?;
        if token.is_eof() {
            return Err(LexError::new(
                LexErrorKind::UnexpectedEndOfInput,
                token.span,
                self.position,
            ));
        }
        Ok(token)
    }

    /// Discard the rest of the current line, including its newline.
    ///
    /// Called after a comment token; the comment body is never tokenized.
    pub fn skip_line(&mut self) {
        let mut cursor = self.buffer.cursor_at(self.position);
        cursor.eat_until_newline_or_eof();
        cursor.advance();
        self.position = cursor.position();
    }

    fn scan(&self) -> Result<(Token, Position), LexError> {
        let mut cursor = self.buffer.cursor_at(self.position);
        cursor.eat_whitespace();
        let start = cursor.pos();

        if cursor.is_eof() {
            let token = Token::new(TokenKind::EndOfInput, Span::point(start));
            return Ok((token, cursor.position()));
        }

        let byte = cursor.current();
        let kind = if byte == self.config.open {
            cursor.advance();
            TokenKind::Open
        } else if byte == self.config.close {
            cursor.advance();
            TokenKind::Close
        } else if byte == self.config.comment {
            cursor.advance();
            TokenKind::Comment
        } else if byte == self.config.quote {
            cursor.advance();
            TokenKind::Quote
        } else {
            TokenKind::Atom(self.scan_atom(&mut cursor)?)
        };

        let token = Token::new(kind, Span::new(start, cursor.pos()));
        Ok((token, cursor.position()))
    }

    fn scan_atom(&self, cursor: &mut Cursor<'_>) -> Result<Atom, LexError> {
        let start = cursor.position();

        if cursor.current() == b'"' {
            cursor.advance();
            if !cursor.advance_to(b'"') {
                return Err(LexError::new(
                    LexErrorKind::UnterminatedString,
                    Span::new(start.offset, cursor.pos()),
                    start,
                ));
            }
            cursor.advance();
            self.check_len(start, cursor)?;
            let contents = cursor.slice(start.offset + 1, cursor.pos() - 1);
            return Ok(Atom::String(contents.into_owned()));
        }

        let config = self.config;
        cursor.eat_while(|b| !config.is_delimiter(b));
        self.check_len(start, cursor)?;
        Ok(classify_atom(&cursor.slice_from(start.offset)))
    }

    fn check_len(&self, start: Position, cursor: &Cursor<'_>) -> Result<(), LexError> {
        let len = (cursor.pos() - start.offset) as usize;
        if len > self.config.max_atom_len {
            return Err(LexError::new(
                LexErrorKind::AtomTooLong {
                    len,
                    max: self.config.max_atom_len,
                },
                Span::new(start.offset, cursor.pos()),
                start,
            ));
        }
        Ok(())
    }
}

/// Classify an unquoted atom run.
///
/// Floats must contain a digit, so `inf`, `nan` and `infinity` stay symbols.
/// Integer runs outside the `i64` range fall through to the float rule.
pub fn classify_atom(text: &str) -> Atom {
    match text {
        "true" => return Atom::Bool(true),
        "false" => return Atom::Bool(false),
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return Atom::Integer(n);
    }
    if text.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(x) = text.parse::<f64>() {
            return Atom::Float(x);
        }
    }
    Atom::Symbol(text.to_owned())
}
