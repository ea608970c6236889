//! List construction and access.
//!
//! Every function works on its own copy of the arguments, so the lists it
//! returns never share nodes with a bound variable.

use haplo_diagnostic::ErrorCode;

use super::exactly;
use crate::{Interpreter, Value, ValueList};

/// `(list VALUE...)`: the arguments, in order.
pub(super) fn list(_: &mut Interpreter, args: ValueList) -> Value {
    Value::List(args)
}

/// `(append VALUE LIST)`: `LIST` with `VALUE` in front.
///
/// `VALUE` must not itself be a list.
pub(super) fn append(_: &mut Interpreter, args: ValueList) -> Value {
    let [value, list] = match exactly::<2>(args) {
        Ok(args) => args,
        Err(error) => return error,
    };
    match (value, list) {
        (_, error @ Value::Error(_)) | (error @ Value::Error(_), _) => error,
        (Value::List(_), _) => Value::Error(ErrorCode::E6002),
        (value, Value::List(mut list)) => {
            list.push_front(value);
            Value::List(list)
        }
        _ => Value::Error(ErrorCode::E6002),
    }
}

/// `(head LIST)`: the first element, or `empty` for an empty list.
pub(super) fn head(_: &mut Interpreter, args: ValueList) -> Value {
    match single_list(args) {
        Ok(mut list) => list.pop_front().unwrap_or(Value::Empty),
        Err(error) => error,
    }
}

/// `(tail LIST)`: every element after the first.
pub(super) fn tail(_: &mut Interpreter, args: ValueList) -> Value {
    match single_list(args) {
        Ok(mut list) => {
            list.pop_front();
            Value::List(list)
        }
        Err(error) => error,
    }
}

fn single_list(args: ValueList) -> Result<ValueList, Value> {
    match exactly::<1>(args)? {
        [Value::List(list)] => Ok(list),
        [error @ Value::Error(_)] => Err(error),
        _ => Err(Value::Error(ErrorCode::E6002)),
    }
}
