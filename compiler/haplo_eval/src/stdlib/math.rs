//! Arithmetic and comparison on two operands of the same numeric kind.
//!
//! Integer arithmetic wraps. With mismatched kinds an error operand is
//! returned, right operand first; otherwise the result is an invalid-type
//! error.

use std::cmp::Ordering;

use haplo_diagnostic::ErrorCode;

use super::exactly;
use crate::{Interpreter, Value, ValueList};

enum Operands {
    Integers(i64, i64),
    Floats(f64, f64),
}

fn operands(args: ValueList) -> Result<Operands, Value> {
    let [left, right] = exactly::<2>(args)?;
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Operands::Integers(a, b)),
        (Value::Float(a), Value::Float(b)) => Ok(Operands::Floats(a, b)),
        (_, error @ Value::Error(_)) | (error @ Value::Error(_), _) => Err(error),
        _ => Err(Value::Error(ErrorCode::E6002)),
    }
}

fn arithmetic(
    args: ValueList,
    integer: fn(i64, i64) -> Value,
    float: fn(f64, f64) -> f64,
) -> Value {
    match operands(args) {
        Ok(Operands::Integers(a, b)) => integer(a, b),
        Ok(Operands::Floats(a, b)) => Value::Float(float(a, b)),
        Err(error) => error,
    }
}

/// Floats compare with `partial_cmp`; any comparison with NaN is false.
fn comparison(args: ValueList, holds: fn(Ordering) -> bool) -> Value {
    match operands(args) {
        Ok(Operands::Integers(a, b)) => Value::Bool(holds(a.cmp(&b))),
        Ok(Operands::Floats(a, b)) => Value::Bool(a.partial_cmp(&b).is_some_and(holds)),
        Err(error) => error,
    }
}

pub(super) fn add(_: &mut Interpreter, args: ValueList) -> Value {
    arithmetic(args, |a, b| Value::Integer(a.wrapping_add(b)), |a, b| a + b)
}

pub(super) fn subtract(_: &mut Interpreter, args: ValueList) -> Value {
    arithmetic(args, |a, b| Value::Integer(a.wrapping_sub(b)), |a, b| a - b)
}

pub(super) fn multiply(_: &mut Interpreter, args: ValueList) -> Value {
    arithmetic(args, |a, b| Value::Integer(a.wrapping_mul(b)), |a, b| a * b)
}

/// Integer division by zero is an error; float division follows IEEE 754.
pub(super) fn divide(_: &mut Interpreter, args: ValueList) -> Value {
    arithmetic(
        args,
        |a, b| {
            if b == 0 {
                Value::Error(ErrorCode::E6007)
            } else {
                Value::Integer(a.wrapping_div(b))
            }
        },
        |a, b| a / b,
    )
}

pub(super) fn greater(_: &mut Interpreter, args: ValueList) -> Value {
    comparison(args, Ordering::is_gt)
}

pub(super) fn less(_: &mut Interpreter, args: ValueList) -> Value {
    comparison(args, Ordering::is_lt)
}

pub(super) fn equal(_: &mut Interpreter, args: ValueList) -> Value {
    comparison(args, Ordering::is_eq)
}

pub(super) fn greater_or_equal(_: &mut Interpreter, args: ValueList) -> Value {
    comparison(args, Ordering::is_ge)
}

pub(super) fn less_or_equal(_: &mut Interpreter, args: ValueList) -> Value {
    comparison(args, Ordering::is_le)
}
