use insights::Record;

/// Data used by the extraction tests, covering every kind of value.
pub const SAMPLE_JSON: &str = r#"
{
    "value": "string",
    "nested": {
        "value": "nested string value",
        "super": {
            "value": "Super Nested String Value"
        }
    },
    "int": 123,
    "float": 123.4,
    "bool": true,
    "list": [
        "abc",
        "DEF",
        "geh"
    ],
    "nullValue": null,
    "emptyString": "",
    "numericText": "123",
    "exponent": "1e3"
}
"#;

/// Creates a record from a JSON document string.
pub fn record_from_json(id: &str, json: &str) -> Record {
    let data: serde_json::Value = serde_json::from_str(json).expect("Invalid test JSON");
    Record::new(id, data)
}

/// Creates the standard sample record.
pub fn sample_record() -> Record {
    record_from_json("some-id", SAMPLE_JSON)
}

/// Creates one record per value, each holding its value under `key`.
pub fn records_with_values(key: &str, values: &[serde_json::Value]) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let mut data = serde_json::Map::new();
            data.insert(key.to_string(), value.clone());
            Record::new(format!("record-{i}"), serde_json::Value::Object(data))
        })
        .collect()
}

/// Creates one record per number, each holding its number under `key`.
pub fn numeric_records(key: &str, numbers: &[f64]) -> Vec<Record> {
    let values: Vec<_> = numbers.iter().map(|n| serde_json::json!(n)).collect();
    records_with_values(key, &values)
}

/// Asserts two floats are equal within a small tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
