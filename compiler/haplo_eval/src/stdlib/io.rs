//! Output through the interpreter's print handler.

use super::exactly;
use crate::{Interpreter, Value, ValueList};

/// `(print VALUE)`: write the value's text and a newline.
pub(super) fn print(interpreter: &mut Interpreter, args: ValueList) -> Value {
    match exactly::<1>(args) {
        Ok([value]) => {
            interpreter.print_handler().print_value(&value);
            Value::Empty
        }
        Err(error) => error,
    }
}
