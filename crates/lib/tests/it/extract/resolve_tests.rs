use insights::{Record, doc::Value, extract};

use crate::helpers::*;

#[test]
fn test_extract_leaf_values() {
    let record = sample_record();
    let cases: &[(&str, Value)] = &[
        ("value", Value::from("string")),
        ("nested.value", Value::from("nested string value")),
        ("nested.super.value", Value::from("Super Nested String Value")),
        ("int", Value::Number(123.0)),
        ("list.0", Value::from("abc")),
        ("list.1", Value::from("DEF")),
        ("list.2", Value::from("geh")),
        ("emptyString", Value::from("")),
    ];

    for (path, expected) in cases {
        assert_eq!(extract(Some(&record), *path), Some(expected), "path {path}");
    }
}

#[test]
fn test_extract_composite_values() {
    let record = sample_record();

    let nested = extract(Some(&record), "nested").unwrap();
    let expected: Value = serde_json::from_str(
        r#"{"value": "nested string value", "super": {"value": "Super Nested String Value"}}"#,
    )
    .unwrap();
    assert_eq!(nested, &expected);

    let list = extract(Some(&record), "list").unwrap();
    assert_eq!(list, &Value::from(vec!["abc", "DEF", "geh"]));
}

#[test]
fn test_extract_present_null() {
    let record = sample_record();
    assert_eq!(extract(Some(&record), "nullValue"), Some(&Value::Null));
    assert_eq!(extract(Some(&record), "nullValue.below"), None);
}

#[test]
fn test_extract_missing_paths() {
    let record = sample_record();
    for path in [
        "nonexistent",
        "non.existent",
        "nested.nonexistent",
        "nested.value.nonexistent",
        "int.nonexistent",
        "list.a",
        "list.4",
        "list.3",
        "list.-1",
        "list.+1",
        "list. 1",
        "list.1x",
        "nested..value",
    ] {
        assert_eq!(extract(Some(&record), path), None, "path {path}");
    }
}

#[test]
fn test_extract_without_record_or_data() {
    assert_eq!(extract(None, "value"), None);
    assert_eq!(extract(Some(&Record::empty("empty")), "value"), None);
    assert_eq!(extract(Some(&Record::empty("empty")), ""), None);
}

#[test]
fn test_extract_empty_path_returns_root() {
    let record = sample_record();
    assert_eq!(extract(Some(&record), ""), record.data());
}
