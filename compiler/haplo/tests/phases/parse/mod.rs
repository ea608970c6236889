//! Parser behavior as seen through the facade.

use haplo::{parse, ErrorCode, Parser};
use pretty_assertions::assert_eq;

fn printed(source: &str) -> String {
    parse(source).expr.expect("expected an expression").to_string()
}

#[test]
fn canonical_forms() {
    assert_eq!(printed("( c ( a ( b ) ) )"), "( c ( ( a ( ( b ) ) ) ) )");
    assert_eq!(printed("(a b c)"), "( a ( b ( c ) ) )");
    assert_eq!(printed("( + 2 3 )"), "( + ( 2 ( 3 ) ) )");
    assert_eq!(printed("123"), "( 123 )");
    assert_eq!(printed("'a"), "( 'a )");
    assert_eq!(
        printed("(defunc 'test (+ 2 3) )"),
        "( defunc ( 'test ( ( + ( 2 ( 3 ) ) ) ) ) )"
    );
}

#[test]
fn malformed_parenthesis_yields_no_tree() {
    let output = parse("(( 1 2 3 )");
    assert!(output.expr.is_none());
    assert_eq!(output.error.unwrap().code(), ErrorCode::E1002);
}

#[test]
fn unterminated_string() {
    let output = parse("( print \"Hello )");
    assert_eq!(output.error.unwrap().code(), ErrorCode::E0002);
}

#[test]
fn eval_source_reports_parse_errors_before_evaluating() {
    let handler = haplo::buffer_handler();
    let mut interpreter = haplo::Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let err = haplo::eval_source(&mut interpreter, "(print 1)\n(print 2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(handler.get_output(), "");
}

#[test]
fn eval_str_reports_parse_errors() {
    let err = haplo::eval_str("(a ' b)").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.to_string(), "E1003: unexpected token after quote at line 0, column 5");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let forms = Parser::new("# header\n\n(a)\n# between\n(b)\n").parse_all().unwrap();
    assert_eq!(forms.len(), 2);
}
