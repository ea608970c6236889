//! Forms that receive their operands unevaluated.

use std::sync::Arc;

use haplo_diagnostic::ErrorCode;
use haplo_ir::{Atom, Expr};
use tracing::debug;

use super::Interpreter;
use crate::{Symbol, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum SpecialForm {
    /// `(if COND THEN ELSE)`
    If,
    /// `(while COND BODY...)`
    While,
    /// `(defunc 'NAME BODY)`
    Defunc,
}

impl SpecialForm {
    pub(super) fn from_name(name: &str) -> Option<Self> {
        match name {
            "if" => Some(Self::If),
            "while" => Some(Self::While),
            "defunc" => Some(Self::Defunc),
            _ => None,
        }
    }

    pub(super) fn name(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::While => "while",
            Self::Defunc => "defunc",
        }
    }
}

/// Outcome of evaluating a condition.
enum Condition {
    Holds(bool),
    Fails(Value),
}

impl Interpreter {
    pub(super) fn eval_special_form(&mut self, form: SpecialForm, tail: Option<&Expr>) -> Value {
        let operands: Vec<&Expr> = tail.map(|tail| tail.iter().collect()).unwrap_or_default();
        match form {
            SpecialForm::If => self.eval_if(&operands),
            SpecialForm::While => self.eval_while(&operands),
            SpecialForm::Defunc => self.eval_defunc(&operands),
        }
    }

    /// Only the selected branch is evaluated.
    fn eval_if(&mut self, operands: &[&Expr]) -> Value {
        let [condition, then_branch, else_branch] = operands else {
            return Value::Error(ErrorCode::E6003);
        };
        match self.eval_condition(condition) {
            Condition::Holds(true) => self.eval_operand(then_branch),
            Condition::Holds(false) => self.eval_operand(else_branch),
            Condition::Fails(error) => error,
        }
    }

    /// Runs the body while the condition holds, re-evaluating it before
    /// every iteration. Body results are discarded.
    fn eval_while(&mut self, operands: &[&Expr]) -> Value {
        let [condition, body @ ..] = operands else {
            return Value::Error(ErrorCode::E6003);
        };
        if body.is_empty() {
            return Value::Error(ErrorCode::E6003);
        }

        let mut iterations: u64 = 0;
        loop {
            match self.eval_condition(condition) {
                Condition::Holds(true) => {}
                Condition::Holds(false) => break,
                Condition::Fails(error) => return error,
            }
            iterations += 1;
            if self.limits.loop_iterations_exceeded(iterations) {
                debug!(iterations, "loop iteration limit exceeded");
                return Value::Error(ErrorCode::E6006);
            }
            for expr in body {
                self.eval_operand(expr);
            }
        }
        debug!(iterations, "while finished");
        Value::Empty
    }

    /// Stores a copy of the body; it is not evaluated until called.
    fn eval_defunc(&mut self, operands: &[&Expr]) -> Value {
        let [name, body] = operands else {
            return Value::Error(ErrorCode::E6003);
        };
        let Some(Atom::Quote(name)) = name.as_atom() else {
            return Value::Error(ErrorCode::E6002);
        };
        let function = Symbol::InterpretedFunction(Arc::new(Expr::clone(body)));
        match self.symbols.update(name.as_str(), function) {
            Ok(outcome) => {
                debug!(name = name.as_str(), ?outcome, "function defined");
                Value::Empty
            }
            Err(code) => Value::Error(code),
        }
    }

    /// A condition must be a bool. An error is passed through unchanged.
    fn eval_condition(&mut self, condition: &Expr) -> Condition {
        match self.eval_operand(condition) {
            Value::Bool(b) => Condition::Holds(b),
            error @ Value::Error(_) => Condition::Fails(error),
            _ => Condition::Fails(Value::Error(ErrorCode::E6002)),
        }
    }
}
