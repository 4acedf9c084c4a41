use insights::{Error, Record, extract::ExtractError, extract_number};

use crate::helpers::*;

#[test]
fn test_extract_number_values() {
    let record = sample_record();
    assert_eq!(extract_number(Some(&record), "int").unwrap(), Some(123.0));
    assert_eq!(extract_number(Some(&record), "float").unwrap(), Some(123.4));
    assert_eq!(extract_number(Some(&record), "numericText").unwrap(), Some(123.0));
    assert_eq!(extract_number(Some(&record), "exponent").unwrap(), Some(1000.0));
}

#[test]
fn test_extract_number_absent_is_not_error() {
    let record = sample_record();
    for path in ["nullValue", "nonexistent", "list.9", "nested.value.deeper"] {
        assert_eq!(extract_number(Some(&record), path).unwrap(), None, "path {path}");
    }
    assert_eq!(extract_number(None, "int").unwrap(), None);
    assert_eq!(extract_number(Some(&Record::empty("e")), "int").unwrap(), None);
}

#[test]
fn test_extract_number_rejects_non_numeric() {
    let record = sample_record();
    for path in ["value", "nested", "list", "bool", "emptyString", "list.0"] {
        let err = extract_number(Some(&record), path).unwrap_err();
        assert!(err.is_not_numeric(), "path {path}");
        assert_eq!(err.path(), Some(path));
        assert_eq!(err.module(), "extract");
    }
}

#[test]
fn test_nested_numeric_text() {
    let record = record_from_json("n", r#"{"nested": {"value": "123"}}"#);
    assert_eq!(extract_number(Some(&record), "nested.value").unwrap(), Some(123.0));

    match extract_number(Some(&record), "nested") {
        Err(Error::Extract(ExtractError::NotNumeric { path, actual })) => {
            assert_eq!(path, "nested");
            assert_eq!(actual, "doc");
        }
        other => panic!("Expected NotNumeric error, got {other:?}"),
    }
}

#[test]
fn test_numeric_text_forms() {
    let record = record_from_json(
        "n",
        r#"{"a": "-1.5", "b": "2E-2", "c": ".5", "d": "12abc", "e": "0x10"}"#,
    );
    assert_eq!(extract_number(Some(&record), "a").unwrap(), Some(-1.5));
    assert_eq!(extract_number(Some(&record), "b").unwrap(), Some(0.02));
    assert_eq!(extract_number(Some(&record), "c").unwrap(), Some(0.5));
    assert!(extract_number(Some(&record), "d").is_err());
    assert!(extract_number(Some(&record), "e").is_err());
}

#[test]
fn test_non_finite_text_is_not_numeric() {
    let record = record_from_json(
        "n",
        r#"{"big": "1e400", "nan": "NaN", "inf": "infinity", "small": "1e-400"}"#,
    );
    for path in ["big", "nan", "inf"] {
        let err = extract_number(Some(&record), path).unwrap_err();
        assert!(err.is_not_numeric(), "path {path}");
    }
    // Underflow rounds to zero and stays finite
    assert_eq!(extract_number(Some(&record), "small").unwrap(), Some(0.0));
}
