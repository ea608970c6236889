//! Haplo parser.
//!
//! Builds cons-cell [`Expr`] trees from source text, one top-level form at a
//! time.
//!
//! # Grammar
//!
//! ```text
//! form    = comment | "(" element* ")" | element+      (implicit list)
//! element = atom | "'" symbol | "(" element+ ")"
//! ```
//!
//! - A form that does not start with `(` is an implicit list running to
//!   end of input, a `)` or a comment: `print "hi"` parses like
//!   `(print "hi")`.
//! - A form starting with `(` is exactly one balanced list; whatever follows
//!   its `)` is left for the next form.
//! - A comment skips the rest of its line and yields no expression.
//! - The quote must touch its symbol: `'a` is a quoted name, `' a` is an
//!   error.
//!
//! The first error abandons the whole form. Partially built subtrees are
//! dropped as the error propagates.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;

use haplo_ir::Expr;

/// Result of parsing the first form of a source buffer.
///
/// Either side may be empty: a comment or blank source gives neither an
/// expression nor an error.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub expr: Option<Expr>,
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_result(self) -> Result<Option<Expr>, ParseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.expr),
        }
    }
}

/// Parse the first top-level form of `source`.
///
/// Tokens after the first form are ignored; use [`Parser::parse_all`] to
/// read every form.
pub fn parse(source: &str) -> ParseOutput {
    match Parser::new(source).parse_next() {
        Ok(expr) => ParseOutput { expr, error: None },
        Err(error) => ParseOutput {
            expr: None,
            error: Some(error),
        },
    }
}
