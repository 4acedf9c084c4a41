//! Data tree integration tests
//!
//! Tests for Value, Doc and Path as seen from outside the crate: JSON loading,
//! path resolution rules and canonical JSON rendering.

use insights::doc::{Doc, Path, Value};

#[test]
fn test_value_from_json_numbers_are_floats() {
    let value: Value = serde_json::from_str(r#"{"int": 123, "neg": -4, "big": 1e300}"#).unwrap();
    assert_eq!(value.get_path("int"), Some(&Value::Number(123.0)));
    assert_eq!(value.get_path("neg"), Some(&Value::Number(-4.0)));
    assert_eq!(value.get_path("big"), Some(&Value::Number(1e300)));
}

#[test]
fn test_value_accessors() {
    let value: Value = serde_json::from_str(r#"{"list": [1, "two", false, null]}"#).unwrap();
    let list = value.get_path("list").and_then(Value::as_list).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0].as_number(), Some(1.0));
    assert_eq!(list[1].as_text(), Some("two"));
    assert_eq!(list[2].as_bool(), Some(false));
    assert!(list[3].is_null());
    assert!(value.as_doc().is_some());
    assert!(value.is_branch());
    assert!(list[0].is_leaf());
}

#[test]
fn test_resolution_does_not_mutate_tree() {
    let value: Value = serde_json::from_str(r#"{"a": {"b": [1, 2]}}"#).unwrap();
    let before = value.clone();
    for path in ["a", "a.b", "a.b.1", "a.b.5", "a.c", "x.y.z", ""] {
        let _ = value.get_path(path);
    }
    assert_eq!(value, before);
}

#[test]
fn test_path_segments_and_indices() {
    let path = Path::new("list.007.x");
    let segments: Vec<_> = path.segments().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].as_index(), Some(7));
    assert_eq!(segments[2].as_index(), None);
}

#[test]
fn test_leading_zero_index_resolves() {
    let value: Value = serde_json::from_str(r#"{"list": ["a", "b"]}"#).unwrap();
    assert_eq!(value.get_path("list.01"), Some(&Value::from("b")));
}

#[test]
fn test_numeric_key_on_doc_is_a_key() {
    let value: Value = serde_json::from_str(r#"{"map": {"0": "zero"}}"#).unwrap();
    assert_eq!(value.get_path("map.0"), Some(&Value::from("zero")));
}

#[test]
fn test_to_json_string_is_insertion_order_independent() {
    let mut first = Doc::new();
    first.set("b", 2);
    first.set("a", 1);
    first.set("c", vec!["z", "y"]);

    let mut second = Doc::new();
    second.set("c", vec!["z", "y"]);
    second.set("a", 1);
    second.set("b", 2);

    assert_eq!(first.to_json_string(), r#"{"a":1,"b":2,"c":["z","y"]}"#);
    assert_eq!(first.to_json_string(), second.to_json_string());
}

#[test]
fn test_display() {
    assert_eq!(Value::from(1.5).to_string(), "1.5");
    assert_eq!(Value::from(2).to_string(), "2");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
}
