//! Whole programs through `haplo::eval_source`.

use haplo::{ErrorCode, EvalLimits, Value};
use pretty_assertions::assert_eq;

use crate::common::{run, run_captured, run_captured_with, run_last};

// === Arithmetic ===

#[test]
fn arithmetic() {
    assert_eq!(run_last("( + 1 2 )"), Value::Integer(3));
    assert_eq!(run_last("( * 4 ( + 1 2 ) )"), Value::Integer(12));
    assert_eq!(run_last("( * ( + 1 2 ) 3 )"), Value::Integer(9));
    assert_eq!(run_last("(- 10.5 0.5)"), Value::Float(10.0));
}

#[test]
fn trailing_close_is_a_separate_form() {
    // `( + 4 ( * 2 3 ) )` evaluates; the stray `)` then fails to parse.
    let err = haplo::eval_str("( + 4 ( * 2 3 ) ) ) )").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1001);
    let first = haplo::parse("( + 4 ( * 2 3 ) ) ) )").expr.unwrap();
    let mut interpreter = haplo::Interpreter::new();
    assert_eq!(interpreter.interpret(Some(&first)), Value::Integer(10));
}

// === Variables and functions ===

#[test]
fn setq_returns_value() {
    assert_eq!(run("( setq 'test 123 )"), vec![Value::Integer(123)]);
}

#[test]
fn defunc_then_call() {
    assert_eq!(
        run("( defunc 'test ( + 2 3 ) )\n( test )"),
        vec![Value::Empty, Value::Integer(5)]
    );
}

#[test]
fn one_interpreter_keeps_state_across_calls() {
    let mut interpreter = haplo::Interpreter::builder()
        .print_handler(haplo::silent_handler())
        .build();
    haplo::eval_source(&mut interpreter, "(setq 'x 2)").unwrap();
    let values = haplo::eval_source(&mut interpreter, "(* x x)").unwrap();
    assert_eq!(values, vec![Value::Integer(4)]);
}

#[test]
fn eval_str_starts_fresh() {
    haplo::eval_str("(setq 'fresh 1)").unwrap();
    assert_eq!(
        haplo::eval_str("(fresh)").unwrap(),
        vec![Value::Error(ErrorCode::E6001)]
    );
}

// === Control flow ===

#[test]
fn if_short_circuits() {
    assert_eq!(run_captured("( if true (print 1) (print 2) )"), "1\n");
    assert_eq!(run_captured("( if false (print 1) (print 2) )"), "2\n");
}

#[test]
fn while_with_counter() {
    let source = "\
        # count to three\n\
        (setq 'i 0)\n\
        (while (< i 3)\n\
          (print i)\n\
          (setq 'i (+ i 1)))\n";
    assert_eq!(run_captured(source), "0\n1\n2\n");
}

#[test]
fn factorial_by_loop() {
    let source = "(setq 'n 10)\n(setq 'acc 1)\n\
                  (while (> n 0) (setq 'acc (* acc n)) (setq 'n (- n 1)))\n\
                  (acc)";
    assert_eq!(run_last(source), Value::Integer(3_628_800));
}

// === Output ===

#[test]
fn hello_world() {
    assert_eq!(
        run_captured("print \"Hello, World!\""),
        "\"Hello, World!\"\n"
    );
}

#[test]
fn print_lists_and_errors() {
    let output = run_captured("(print (list 1 2.5 \"s\" 'q))\n(print (/ 1 0))");
    assert_eq!(
        output,
        "( 1 2.500000 \"s\" 'q )\nE6007 division by zero\n"
    );
}

// === Limits ===

#[test]
fn runaway_loop_is_stopped() {
    let limits = EvalLimits::default().with_max_loop_iterations(1_000);
    let (values, _) = run_captured_with("(while true (+ 1 1))", limits);
    assert_eq!(values, vec![Value::Error(ErrorCode::E6006)]);
}

#[test]
fn runaway_recursion_is_stopped() {
    let limits = EvalLimits::default().with_max_call_depth(100);
    let (values, output) =
        run_captured_with("(defunc 'f (f))\n(f)\n(print \"after\")", limits);
    assert_eq!(values[1], Value::Error(ErrorCode::E6005));
    assert_eq!(output, "\"after\"\n");
}

// === Errors as values ===

#[test]
fn runtime_errors_do_not_stop_the_program() {
    let values = run("(nope)\n(+ 1 \"a\")\n(+ 1 1)");
    assert_eq!(
        values,
        vec![
            Value::Error(ErrorCode::E6001),
            Value::Error(ErrorCode::E6002),
            Value::Integer(2),
        ]
    );
}
