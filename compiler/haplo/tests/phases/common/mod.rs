//! Shared helpers for phase tests.

use haplo::{buffer_handler, silent_handler, EvalLimits, Interpreter, Value};

/// Run `source` with output discarded, returning the value of each form.
pub fn run(source: &str) -> Vec<Value> {
    let mut interpreter = Interpreter::builder()
        .print_handler(silent_handler())
        .build();
    haplo::eval_source(&mut interpreter, source).expect("source should parse")
}

/// Value of the last form of `source`.
pub fn run_last(source: &str) -> Value {
    run(source).pop().expect("source should have a form")
}

/// Run `source` and return everything it printed.
pub fn run_captured(source: &str) -> String {
    run_captured_with(source, EvalLimits::default()).1
}

/// Run `source` under `limits`, returning the values and printed output.
pub fn run_captured_with(source: &str, limits: EvalLimits) -> (Vec<Value>, String) {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .limits(limits)
        .build();
    let values = haplo::eval_source(&mut interpreter, source).expect("source should parse");
    (values, handler.get_output())
}
