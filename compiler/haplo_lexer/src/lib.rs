//! Haplo lexer.
//!
//! Turns source text into a stream of [`Token`]s: the four single-byte
//! punctuation tokens (open, close, comment, quote), literal atoms, and an
//! end-of-input marker.
//!
//! # Architecture
//!
//! - [`SourceBuffer`] copies the source into a sentinel-terminated buffer.
//! - [`Cursor`] walks that buffer, tracking line and column for diagnostics.
//! - [`Lexer`] classifies runs of bytes into tokens on demand. It keeps no
//!   token buffer, so `peek` rescans from the saved position.
//!
//! End of input between tokens is not an error: the lexer keeps returning
//! [`TokenKind::EndOfInput`].

mod config;
mod cursor;
mod lex_error;
mod lexer;
mod source_buffer;
mod token;

pub use config::{LexerConfig, DEFAULT_MAX_ATOM_LEN};
pub use cursor::{Cursor, Position};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{classify_atom, Lexer};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
