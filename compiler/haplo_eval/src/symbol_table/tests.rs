#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::Value;
use pretty_assertions::assert_eq;

fn var(n: i64) -> Symbol {
    Symbol::Variable(Value::Integer(n))
}

fn variable(table: &SymbolTable, key: &str) -> Value {
    table
        .lookup(key)
        .unwrap()
        .as_variable()
        .expect("expected a variable")
        .clone()
}

// === djb2 ===

#[test]
fn djb2_known_values() {
    assert_eq!(djb2(b""), 5381);
    assert_eq!(djb2(b"a"), 5381 * 33 + 97);
    assert_eq!(djb2(b"ab"), (5381 * 33 + 97) * 33 + 98);
}

#[test]
fn djb2_wraps() {
    let long = "z".repeat(64);
    let expected = long
        .bytes()
        .fold(5381u32, |h, b| h.wrapping_mul(33).wrapping_add(u32::from(b)));
    assert_eq!(djb2(long.as_bytes()), expected);
}

// === Update / lookup ===

#[test]
fn insert_then_lookup() {
    let mut table = SymbolTable::new(16);
    assert_eq!(table.update("x", var(1)), Ok(UpdateOutcome::Inserted));
    assert_eq!(variable(&table, "x"), Value::Integer(1));
    assert_eq!(table.len(), 1);
}

#[test]
fn update_replaces_existing() {
    let mut table = SymbolTable::new(16);
    table.update("x", var(1)).unwrap();
    assert_eq!(table.update("x", var(2)), Ok(UpdateOutcome::Updated));
    assert_eq!(variable(&table, "x"), Value::Integer(2));
    assert_eq!(table.len(), 1);
}

#[test]
fn missing_key_is_not_found() {
    let table = SymbolTable::new(16);
    assert_eq!(table.lookup("nope").unwrap_err(), ErrorCode::E7002);
}

#[test]
fn lookup_mut_edits_in_place() {
    let mut table = SymbolTable::new(4);
    table.update("x", var(1)).unwrap();
    *table.lookup_mut("x").unwrap() = var(9);
    assert_eq!(variable(&table, "x"), Value::Integer(9));
}

#[test]
fn colliding_keys_share_a_chain() {
    // With one bucket every key collides.
    let mut table = SymbolTable::new(1);
    for (i, key) in ["a", "b", "c"].iter().enumerate() {
        table.update(*key, var(i as i64)).unwrap();
    }
    assert_eq!(variable(&table, "a"), Value::Integer(0));
    assert_eq!(variable(&table, "c"), Value::Integer(2));
    let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

// === Delete ===

#[test]
fn delete_then_lookup_is_not_found() {
    let mut table = SymbolTable::new(8);
    table.update("x", var(1)).unwrap();
    table.delete("x").unwrap();
    assert_eq!(table.lookup("x").unwrap_err(), ErrorCode::E7002);
    assert!(table.is_empty());
}

#[test]
fn delete_missing_key_succeeds() {
    let mut table = SymbolTable::new(8);
    assert_eq!(table.delete("ghost"), Ok(()));
}

#[test]
fn delete_middle_of_chain_keeps_the_rest() {
    let mut table = SymbolTable::new(1);
    table.update("a", var(1)).unwrap();
    table.update("b", var(2)).unwrap();
    table.update("c", var(3)).unwrap();
    table.delete("b").unwrap();
    let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "c"]);
}

// === Uninitialised ===

#[test]
fn zero_capacity_table_rejects_everything() {
    let mut table = SymbolTable::new(0);
    assert!(!table.is_initialised());
    assert_eq!(table.lookup("x").unwrap_err(), ErrorCode::E7001);
    assert_eq!(table.lookup_mut("x").unwrap_err(), ErrorCode::E7001);
    assert_eq!(table.update("x", var(1)), Err(ErrorCode::E7001));
    assert_eq!(table.delete("x"), Err(ErrorCode::E7001));
}

// === Deep copy ===

#[test]
fn clone_is_independently_mutable() {
    let mut original = SymbolTable::new(8);
    original.update("x", var(1)).unwrap();

    let mut copy = original.clone();
    copy.update("x", var(2)).unwrap();
    copy.update("y", var(3)).unwrap();

    assert_eq!(variable(&original, "x"), Value::Integer(1));
    assert!(original.lookup("y").is_err());
    assert_eq!(variable(&copy, "x"), Value::Integer(2));
    assert_eq!(copy.capacity(), 8);
}

#[test]
fn default_capacity() {
    assert_eq!(SymbolTable::default().capacity(), DEFAULT_CAPACITY);
}

mod proptest_table {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[derive(Clone, Debug)]
    enum Op {
        Update(String, i64),
        Delete(String),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        let key = "[a-d]{1,2}";
        prop_oneof![
            (key, any::<i64>()).prop_map(|(k, v)| Op::Update(k, v)),
            key.prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn behaves_like_a_map(
            capacity in 1usize..8,
            ops in prop::collection::vec(arb_op(), 0..64),
        ) {
            let mut table = SymbolTable::new(capacity);
            let mut model: HashMap<String, i64> = HashMap::new();
            for op in ops {
                match op {
                    Op::Update(key, n) => {
                        let expected = if model.insert(key.clone(), n).is_some() {
                            UpdateOutcome::Updated
                        } else {
                            UpdateOutcome::Inserted
                        };
                        prop_assert_eq!(table.update(key, var(n)), Ok(expected));
                    }
                    Op::Delete(key) => {
                        model.remove(&key);
                        prop_assert_eq!(table.delete(&key), Ok(()));
                    }
                }
            }
            prop_assert_eq!(table.len(), model.len());
            for (key, n) in &model {
                prop_assert_eq!(variable(&table, key), Value::Integer(*n));
            }
        }

        #[test]
        fn keys_hash_into_range(key in ".{0,16}", capacity in 1usize..64) {
            let mut table = SymbolTable::new(capacity);
            table.update(key.clone(), var(0)).unwrap();
            prop_assert!(table.lookup(&key).is_ok());
        }
    }
}
