//! What a name in the symbol table refers to.

use std::fmt;
use std::sync::Arc;

use haplo_ir::Expr;

use crate::{Interpreter, Value, ValueList};

/// Signature of every standard-library function.
///
/// Arguments arrive already evaluated, front to back. Failures are returned
/// as [`Value::Error`].
pub type NativeFn = fn(&mut Interpreter, ValueList) -> Value;

/// A symbol table entry.
#[derive(Clone)]
pub enum Symbol {
    NativeFunction(NativeFn),
    /// Body of a `defunc`. Arguments are not bound when it runs.
    ///
    /// Shared, so looking a function up for a call does not copy its body.
    InterpretedFunction(Arc<Expr>),
    Variable(Value),
}

impl Symbol {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Symbol::NativeFunction(_) => "native function",
            Symbol::InterpretedFunction(_) => "interpreted function",
            Symbol::Variable(_) => "variable",
        }
    }

    #[inline]
    pub fn as_variable(&self) -> Option<&Value> {
        match self {
            Symbol::Variable(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::NativeFunction(_) => f.write_str("NativeFunction(..)"),
            Symbol::InterpretedFunction(body) => {
                f.debug_tuple("InterpretedFunction").field(body).finish()
            }
            Symbol::Variable(value) => f.debug_tuple("Variable").field(value).finish(),
        }
    }
}
