use super::*;
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> ValueList {
    values.iter().copied().map(Value::Integer).collect()
}

// === Conversion ===

#[test]
fn atoms_convert_without_resolution() {
    assert_eq!(Value::from_atom(&Atom::Integer(7)), Value::Integer(7));
    assert_eq!(
        Value::from_atom(&Atom::Symbol("x".into())),
        Value::Symbol("x".into())
    );
    assert_eq!(Value::from(Atom::Quote("x".into())), Value::Quote("x".into()));
    assert_eq!(Value::from(ErrorCode::E6002), Value::Error(ErrorCode::E6002));
}

#[test]
fn kind_names() {
    assert_eq!(Value::Empty.kind_name(), "empty");
    assert_eq!(Value::List(ValueList::new()).kind_name(), "list");
    assert!(Value::Error(ErrorCode::E6001).is_error());
    assert!(!Value::Bool(true).is_error());
}

// === Display ===

#[test]
fn display_scalars() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::Float(1.5).to_string(), "1.500000");
    assert_eq!(Value::String("hi".into()).to_string(), "\"hi\"");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Symbol("f".into()).to_string(), "f");
    assert_eq!(Value::Quote("f".into()).to_string(), "'f");
    assert_eq!(Value::Empty.to_string(), "empty");
}

#[test]
fn display_error_has_code_and_description() {
    assert_eq!(
        Value::Error(ErrorCode::E6002).to_string(),
        "E6002 invalid type"
    );
}

#[test]
fn display_lists() {
    assert_eq!(Value::List(ints(&[1, 2, 3])).to_string(), "( 1 2 3 )");
    assert_eq!(Value::List(ValueList::new()).to_string(), "( )");

    let nested: ValueList = [Value::Integer(1), Value::List(ints(&[2, 3]))]
        .into_iter()
        .collect();
    assert_eq!(Value::List(nested).to_string(), "( 1 ( 2 3 ) )");
}

// === ValueList ===

#[test]
fn collect_preserves_order() {
    let list = ints(&[1, 2, 3]);
    let seen: Vec<&Value> = list.iter().collect();
    assert_eq!(
        seen,
        vec![&Value::Integer(1), &Value::Integer(2), &Value::Integer(3)]
    );
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&Value::Integer(1)));
}

#[test]
fn push_and_pop_front() {
    let mut list = ValueList::new();
    assert!(list.is_empty());
    list.push_front(Value::Integer(2));
    list.push_front(Value::Integer(1));
    assert_eq!(list, ints(&[1, 2]));
    assert_eq!(list.pop_front(), Some(Value::Integer(1)));
    assert_eq!(list.pop_front(), Some(Value::Integer(2)));
    assert_eq!(list.pop_front(), None);
}

#[test]
fn owning_iteration() {
    let values: Vec<Value> = ints(&[4, 5]).into_iter().collect();
    assert_eq!(values, vec![Value::Integer(4), Value::Integer(5)]);
}

#[test]
fn clone_is_independent() {
    let original = ints(&[1, 2]);
    let mut copy = original.clone();
    copy.push_front(Value::Integer(0));
    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 3);
}

#[test]
fn equality_compares_elements() {
    assert_eq!(ints(&[1, 2]), ints(&[1, 2]));
    assert_ne!(ints(&[1, 2]), ints(&[1]));
    assert_ne!(ints(&[1, 2]), ints(&[2, 1]));
}

#[test]
fn long_list_drops_and_clones() {
    let list: ValueList = (0..200_000).map(Value::Integer).collect();
    let copy = list.clone();
    assert_eq!(copy.len(), 200_000);
    drop(list);
    assert_eq!(copy.front(), Some(&Value::Integer(0)));
}

#[test]
fn debug_lists_elements() {
    assert_eq!(format!("{:?}", ints(&[1])), "[Integer(1)]");
}

#[test]
fn deeply_nested_list_drops() {
    let mut value = Value::List(ValueList::new());
    for _ in 0..100_000 {
        let mut list = ValueList::new();
        list.push_front(value);
        value = Value::List(list);
    }
    drop(value);
}
