use super::*;

#[test]
fn display_matches_literal_text() {
    assert_eq!(Atom::Integer(-420).to_string(), "-420");
    assert_eq!(Atom::Float(69.42).to_string(), "69.420000");
    assert_eq!(Atom::Bool(true).to_string(), "true");
    assert_eq!(Atom::String("Hello!".into()).to_string(), "\"Hello!\"");
    assert_eq!(Atom::Symbol("print".into()).to_string(), "print");
    assert_eq!(Atom::Quote("test".into()).to_string(), "'test");
}

#[test]
fn clone_owns_text() {
    let original = Atom::String("owned".into());
    let copy = original.clone();
    drop(original);
    assert_eq!(copy, Atom::String("owned".into()));
}

#[test]
fn accessors() {
    assert_eq!(Atom::Symbol("x".into()).as_symbol(), Some("x"));
    assert_eq!(Atom::Quote("x".into()).as_symbol(), None);
    assert_eq!(Atom::Quote("x".into()).as_quote(), Some("x"));
    assert_eq!(Atom::Integer(1).kind_name(), "integer");
}
