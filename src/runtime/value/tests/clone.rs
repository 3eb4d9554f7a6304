//! clone() and shallow_copy() tests

use crate::runtime::value::{DictKey, Value};
use proptest::prelude::*;

#[test]
fn test_clone_aliases_list() {
    let original = Value::list(vec![Value::Int(1)]);
    let alias = original.clone();
    assert!(original.ptr_eq(&alias));

    if let Value::List(items) = &alias {
        items.write().push(Value::Int(2));
    }
    assert_eq!(original.element_count(), Some(2));
}

#[test]
fn test_shallow_copy_list_is_independent() {
    let original = Value::list(vec![Value::Int(1), Value::Int(2)]);
    let copy = original.shallow_copy();
    assert!(!original.ptr_eq(&copy));
    assert_eq!(original, copy);

    if let Value::List(items) = &copy {
        items.write().push(Value::Int(3));
    }
    assert_eq!(original.element_count(), Some(2));
    assert_eq!(copy.element_count(), Some(3));
}

#[test]
fn test_shallow_copy_shares_nested_containers() {
    let inner = Value::list(vec![]);
    let original = Value::list(vec![inner.clone()]);
    let copy = original.shallow_copy();

    if let Value::List(items) = &copy {
        assert!(items.read()[0].ptr_eq(&inner));
    } else {
        panic!("Expected List");
    }
}

#[test]
fn test_shallow_copy_dict_is_independent() {
    let original = Value::dict([(DictKey::from("a"), Value::Int(1))]);
    let copy = original.shallow_copy();

    if let Value::Dict(entries) = &copy {
        entries.write().insert(DictKey::from("b"), Value::Int(2));
        entries.write().shift_remove(&DictKey::from("a"));
    }
    assert_eq!(original.element_count(), Some(1));
    if let Value::Dict(entries) = &original {
        assert_eq!(entries.read().get(&DictKey::from("a")), Some(&Value::Int(1)));
    }
}

#[test]
fn test_shallow_copy_scalars_are_equal() {
    for value in [
        Value::Null,
        Value::Bool(false),
        Value::Int(-7),
        Value::Float(2.5),
        Value::string("text"),
    ] {
        assert_eq!(value.shallow_copy(), value);
        assert!(!value.shallow_copy().ptr_eq(&value));
    }
}

proptest! {
    #[test]
    fn prop_list_copies_never_share_storage(items in prop::collection::vec(any::<i64>(), 0..16)) {
        let original = Value::list(items.iter().copied().map(Value::Int).collect());
        let first = original.shallow_copy();
        let second = original.shallow_copy();

        if let Value::List(storage) = &first {
            storage.write().clear();
        }
        prop_assert_eq!(second.element_count(), Some(items.len()));
        prop_assert_eq!(original.element_count(), Some(items.len()));
    }
}
