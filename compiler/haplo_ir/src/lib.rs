//! Haplo IR - syntax tree types shared by every phase.
//!
//! This crate contains the data produced by the front end and consumed by
//! the evaluator:
//! - [`Span`] for source locations
//! - [`Atom`] for lexical literals
//! - [`Expr`], the cons-cell syntax tree
//!
//! # Design
//!
//! - **Owned payloads**: atoms own their text, pairs own their children.
//!   Deep copy is `Clone`.
//! - **Cons cells**: an n-ary list `(a b c)` is a right-leaning chain of
//!   pairs, mirroring the language's own list semantics.

mod atom;
mod expr;
mod span;

pub use atom::Atom;
pub use expr::{Expr, ExprIter};
pub use span::Span;
