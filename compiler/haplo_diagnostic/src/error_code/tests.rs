use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    assert_eq!(ErrorCode::E6001.as_str(), "E6001");
    assert_eq!(ErrorCode::E7002.as_str(), "E7002");
}

#[test]
fn test_descriptions() {
    assert_eq!(ErrorCode::E0002.description(), "unterminated string literal");
    assert_eq!(ErrorCode::E1002.description(), "malformed parenthesis");
    assert_eq!(ErrorCode::E6002.description(), "invalid type");
    assert_eq!(ErrorCode::E7001.description(), "symbol table not initialised");
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let flags = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_eval_error(),
            code.is_symbol_table_error(),
        ];
        let true_count = flags.iter().filter(|&&f| f).count();
        assert_eq!(
            true_count, 1,
            "expected exactly 1 predicate true for {code}, got {true_count}"
        );
    }
}

#[test]
fn test_phase_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = code.as_str().as_bytes()[1];
        let expected = match digit {
            b'0' => code.is_lexer_error(),
            b'1' => code.is_parser_error(),
            b'6' => code.is_eval_error(),
            b'7' => code.is_symbol_table_error(),
            _ => false,
        };
        assert!(expected, "{code} is in the wrong phase");
    }
}

#[test]
fn test_from_str_round_trips_all_codes() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e6003".parse::<ErrorCode>(), Ok(ErrorCode::E6003));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(ErrorCode::E6004);
    assert_eq!(err.to_string(), "E6004");
}
