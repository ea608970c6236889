//! Tree-walking interpreter.
//!
//! # Evaluation
//!
//! - An atom leaf evaluates to its literal [`Value`]. Symbol atoms stay
//!   unresolved [`Value::Symbol`]s until they reach call position or an
//!   argument slot.
//! - A pair evaluates its head to find the function. A bare `if`, `while`
//!   or `defunc` dispatches to the special form with the unevaluated
//!   operands. Anything else evaluates each operand left to right and
//!   [`call`](Interpreter::call)s the head with the results.
//!
//! # Calls
//!
//! Calling a non-symbol returns a copy of it, so `(5)` is `5`. A symbol is
//! looked up: native functions receive the evaluated arguments, interpreted
//! functions run their shared body with no argument binding, and
//! variables return a copy of their value.

mod builder;
mod special_forms;

pub use builder::InterpreterBuilder;

use haplo_diagnostic::ErrorCode;
use haplo_ir::Expr;
use haplo_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{EvalLimits, SharedPrintHandler, Symbol, SymbolTable, Value, ValueList};
use special_forms::SpecialForm;

/// Evaluates Haplo expressions against its own symbol table.
pub struct Interpreter {
    symbols: SymbolTable,
    print_handler: SharedPrintHandler,
    limits: EvalLimits,
    /// Nesting of interpreted function calls in progress.
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter over a fresh copy of the standard table, printing to
    /// stdout, with no limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[inline]
    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    #[inline]
    pub fn limits(&self) -> EvalLimits {
        self.limits
    }

    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Evaluate a parsed form. An absent form evaluates to [`Value::Empty`].
    pub fn interpret(&mut self, expr: Option<&Expr>) -> Value {
        match expr {
            Some(expr) => self.eval(expr),
            None => Value::Empty,
        }
    }

    /// Evaluate one expression.
    pub fn eval(&mut self, expr: &Expr) -> Value {
        ensure_sufficient_stack(|| match expr {
            Expr::Atom(atom) => Value::from_atom(atom),
            Expr::Pair { head, tail } => self.eval_application(head, tail.as_deref()),
        })
    }

    /// Evaluate an operand, resolving a bare symbol through [`call`](Self::call).
    pub(crate) fn eval_operand(&mut self, expr: &Expr) -> Value {
        match self.eval(expr) {
            Value::Symbol(name) => self.call_symbol(&name, ValueList::new()),
            value => value,
        }
    }

    fn eval_application(&mut self, head: &Expr, tail: Option<&Expr>) -> Value {
        let function = self.eval(head);
        if let Value::Symbol(name) = &function {
            if let Some(form) = SpecialForm::from_name(name) {
                debug!(form = form.name(), "special form");
                return self.eval_special_form(form, tail);
            }
        }
        let args: ValueList = tail
            .into_iter()
            .flat_map(Expr::iter)
            .map(|operand| self.eval_operand(operand))
            .collect();
        self.call(&function, args)
    }

    /// Apply `function` to already evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn call(&mut self, function: &Value, args: ValueList) -> Value {
        match function {
            Value::Symbol(name) => self.call_symbol(name, args),
            literal => literal.clone(),
        }
    }

    fn call_symbol(&mut self, name: &str, args: ValueList) -> Value {
        let symbol = match self.symbols.lookup(name).cloned() {
            Ok(symbol) => symbol,
            Err(ErrorCode::E7002) => {
                debug!(name, "unknown symbol");
                return Value::Error(ErrorCode::E6001);
            }
            Err(code) => return Value::Error(code),
        };
        match symbol {
            Symbol::NativeFunction(function) => {
                debug!(name, argc = args.len(), "native call");
                function(self, args)
            }
            Symbol::InterpretedFunction(body) => self.call_interpreted(name, &body),
            Symbol::Variable(value) => value,
        }
    }

    fn call_interpreted(&mut self, name: &str, body: &Expr) -> Value {
        let depth = self.call_depth + 1;
        if self.limits.call_depth_exceeded(depth) {
            debug!(name, depth, "call depth limit exceeded");
            return Value::Error(ErrorCode::E6005);
        }
        debug!(name, depth, "interpreted call");
        self.call_depth = depth;
        let result = self.eval(body);
        self.call_depth -= 1;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
