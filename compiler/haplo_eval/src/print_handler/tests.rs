#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ValueList;
use haplo_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn buffer_writes_one_line_per_value() {
    let handler = buffer_handler();
    handler.print_value(&Value::Integer(3));
    handler.print_value(&Value::String("hi".into()));
    assert_eq!(handler.get_output(), "3\n\"hi\"\n");
}

#[test]
fn buffer_uses_display_text() {
    let handler = buffer_handler();
    let list: ValueList = [Value::Integer(1), Value::Quote("q".into())]
        .into_iter()
        .collect();
    handler.print_value(&Value::List(list));
    handler.print_value(&Value::Empty);
    handler.print_value(&Value::Error(ErrorCode::E6007));
    assert_eq!(
        handler.get_output(),
        "( 1 'q )\nempty\nE6007 division by zero\n"
    );
}

#[test]
fn stdout_does_not_capture() {
    let handler = stdout_handler();
    handler.print_value(&Value::Bool(true));
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_discards() {
    let handler = silent_handler();
    handler.print_value(&Value::Integer(1));
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_clones_see_the_same_buffer() {
    let handler = buffer_handler();
    let reader = Arc::clone(&handler);
    handler.print_value(&Value::Symbol("shared".into()));
    assert_eq!(reader.get_output(), "shared\n");
}

#[test]
fn buffer_is_thread_safe() {
    let handler = buffer_handler();
    let writer = Arc::clone(&handler);

    let thread = std::thread::spawn(move || {
        for n in 0..100 {
            writer.print_value(&Value::Integer(n));
        }
    });
    for n in 0..100 {
        handler.print_value(&Value::Integer(-n));
    }
    thread.join().unwrap();

    assert_eq!(handler.get_output().lines().count(), 200);
}
