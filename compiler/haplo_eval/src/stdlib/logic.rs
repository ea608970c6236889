//! Boolean connectives. Every operand must be a bool.

use haplo_diagnostic::ErrorCode;

use crate::{Interpreter, Value, ValueList};

/// Fold at least two bool operands left to right.
fn fold(args: ValueList, init: bool, op: fn(bool, bool) -> bool) -> Value {
    if args.len() < 2 {
        return Value::Error(ErrorCode::E6003);
    }
    let mut result = init;
    for arg in &args {
        match arg {
            Value::Bool(b) => result = op(result, *b),
            _ => return Value::Error(ErrorCode::E6002),
        }
    }
    Value::Bool(result)
}

/// `(and BOOL BOOL...)`
pub(super) fn and(_: &mut Interpreter, args: ValueList) -> Value {
    fold(args, true, |a, b| a && b)
}

/// `(or BOOL BOOL...)`
pub(super) fn or(_: &mut Interpreter, args: ValueList) -> Value {
    fold(args, false, |a, b| a || b)
}

/// `(not BOOL)`. An error operand is passed through.
pub(super) fn not(_: &mut Interpreter, args: ValueList) -> Value {
    match super::exactly::<1>(args) {
        Ok([Value::Bool(b)]) => Value::Bool(!b),
        Ok([error @ Value::Error(_)]) => error,
        Ok(_) => Value::Error(ErrorCode::E6002),
        Err(error) => error,
    }
}
