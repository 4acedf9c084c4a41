//! Record integration tests

use insights::{Record, doc::Value};

#[test]
fn test_records_load_from_json_array() {
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"id": "a", "data": {"age": 30}},
            {"id": "b", "data": null},
            {"id": "c"}
        ]"#,
    )
    .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id(), "a");
    assert_eq!(
        records[0].data().and_then(|d| d.get_path("age")),
        Some(&Value::Number(30.0))
    );
    assert!(records[1].data().is_none());
    assert!(records[2].data().is_none());
}

#[test]
fn test_record_serializes_back_to_json() {
    let record = Record::new("r1", serde_json::json!({"n": 1, "s": "x"}));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({"id": "r1", "data": {"n": 1, "s": "x"}}));

    let empty = serde_json::to_value(Record::empty("r2")).unwrap();
    assert_eq!(empty, serde_json::json!({"id": "r2"}));
}
