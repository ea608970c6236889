//! Lexical literals.
//!
//! An [`Atom`] is the leaf payload of the syntax tree. Text-carrying
//! variants own their text, so a parsed tree never borrows from the source
//! buffer and can outlive it.

use std::fmt;

/// A literal produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Atom {
    /// Base-10 integer literal: `69`, `-420`.
    Integer(i64),
    /// Floating-point literal: `69.420`.
    Float(f64),
    /// `true` or `false`.
    Bool(bool),
    /// Double-quoted string literal, quotes stripped: `"Hello"`.
    String(String),
    /// Any other unreserved text: `print`, `+`.
    Symbol(String),
    /// Quoted name, `'name`. A literal reference that is never resolved.
    Quote(String),
}

impl Atom {
    /// Human-readable name of the atom kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Atom::Integer(_) => "integer",
            Atom::Float(_) => "float",
            Atom::Bool(_) => "bool",
            Atom::String(_) => "string",
            Atom::Symbol(_) => "symbol",
            Atom::Quote(_) => "quote",
        }
    }

    /// The symbol name, if this is a `Symbol` atom.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Atom::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The quoted name, if this is a `Quote` atom.
    pub fn as_quote(&self) -> Option<&str> {
        match self {
            Atom::Quote(name) => Some(name),
            _ => None,
        }
    }
}

/// Literal text of the atom: strings quoted, floats with six decimals,
/// quotes prefixed with `'`.
impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Integer(n) => write!(f, "{n}"),
            Atom::Float(x) => write!(f, "{x:.6}"),
            Atom::Bool(b) => write!(f, "{b}"),
            Atom::String(s) => write!(f, "\"{s}\""),
            Atom::Symbol(s) => f.write_str(s),
            Atom::Quote(s) => write!(f, "'{s}"),
        }
    }
}

#[cfg(test)]
mod tests;
