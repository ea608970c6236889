//! Variable binding.

use haplo_diagnostic::ErrorCode;

use super::exactly;
use crate::{Interpreter, Symbol, Value, ValueList};

/// `(setq 'NAME VALUE)`: bind a copy of `VALUE` and return it.
///
/// Any value except an unresolved symbol can be bound, errors included.
pub(super) fn setq(interpreter: &mut Interpreter, args: ValueList) -> Value {
    let [name, value] = match exactly::<2>(args) {
        Ok(args) => args,
        Err(error) => return error,
    };
    match (name, value) {
        (Value::Quote(name), value) if !matches!(value, Value::Symbol(_)) => {
            match interpreter
                .symbols_mut()
                .update(name, Symbol::Variable(value.clone()))
            {
                Ok(_) => value,
                Err(code) => Value::Error(code),
            }
        }
        _ => Value::Error(ErrorCode::E6002),
    }
}
