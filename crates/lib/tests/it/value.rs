//! Scalar value integration tests

use fieldpath::{KeyFields, PathElement, Value};

#[test]
fn test_value_total_order_is_consistent_with_equality() {
    let values = vec![
        Value::Text("b".to_string()),
        Value::Float(2.5),
        Value::Null,
        Value::Int(2),
        Value::Bool(true),
        Value::Text("a".to_string()),
        Value::Bool(false),
        Value::Int(-7),
    ];

    let mut sorted = values.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        vec![
            Value::Null,
            Value::Bool(false),
            Value::Bool(true),
            Value::Int(-7),
            Value::Int(2),
            Value::Float(2.5),
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
        ]
    );

    for a in &values {
        for b in &values {
            assert_eq!(a == b, a.compare(b).is_eq(), "{a} vs {b}");
            assert_eq!(a.compare(b), b.compare(a).reverse(), "{a} vs {b}");
        }
    }
}

#[test]
fn test_value_elements_use_comparator() {
    assert_eq!(
        PathElement::value(Value::Int(3)),
        PathElement::value(Value::Float(3.0))
    );
    assert_ne!(PathElement::value(Value::Int(3)), PathElement::value("3"));
}

#[test]
fn test_keys_from_json_values() {
    let name: Value = serde_json::json!("first").try_into().unwrap();
    let port: Value = serde_json::json!(8080).try_into().unwrap();
    let key = KeyFields::new([("name", name), ("port", port)]).unwrap();

    assert_eq!(key.get("name"), Some(&Value::from("first")));
    assert_eq!(key.get("port"), Some(&Value::Int(8080)));
    assert_eq!(key.to_string(), "name=\"first\",port=8080");
}

#[test]
fn test_value_serde_is_plain_json() {
    let value = Value::from("web");
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"web\"");
    let parsed: Value = serde_json::from_str("42").unwrap();
    assert_eq!(parsed, Value::Int(42));
    let parsed: Value = serde_json::from_str("null").unwrap();
    assert!(parsed.is_null());
}
