//! End-to-end rendering through the default registry

use serde_json::json;
use strata_components::{
    create_default_registry, number_component, render, ComponentOutput, ComponentRegistry,
};
use strata_core::{RenderContext, Result, Size, Value};

#[test]
fn test_object_record_tree() {
    let data = Value::from(json!({ "k1": "a", "k2": 2 }));
    let output = render(&data, Size::new(400.0, 300.0), None, None).unwrap().unwrap();

    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "type": "object",
            "props": { "keys": ["k1", "k2"] },
            "children": [
                {
                    "type": "key-value",
                    "props": { "key": "k1" },
                    "children": [{ "type": "string", "props": { "value": "a" } }]
                },
                {
                    "type": "key-value",
                    "props": { "key": "k2" },
                    "children": [{ "type": "number", "props": { "value": 2 } }]
                }
            ]
        })
    );
}

#[test]
fn test_number_wire_form() {
    let data = Value::from(json!({ "whole": 2, "half": 2.5 }));
    let output = render(&data, Size::new(400.0, 300.0), None, None).unwrap().unwrap();
    let wire = serde_json::to_string(&output).unwrap();

    assert!(wire.contains(r#"{"type":"number","props":{"value":2}}"#), "{}", wire);
    assert!(wire.contains(r#"{"type":"number","props":{"value":2.5}}"#), "{}", wire);
}

#[test]
fn test_render_is_idempotent() {
    let data = Value::from(json!({
        "list": [1, "two", { "three": [3, null] }],
        "flag": true,
        "nothing": null
    }));
    let size = Size::new(640.0, 480.0);

    let first = render(&data, size, None, None).unwrap();
    let second = render(&data, size, None, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_top_level_type_matches_registered_component() {
    let size = Size::new(100.0, 100.0);
    let cases = [
        (Value::Null, "null"),
        (Value::Undefined, "undefined"),
        (Value::from("s"), "string"),
        (Value::from(1.5), "number"),
        (Value::from(true), "boolean"),
        (Value::from(json!([])), "array"),
        (Value::from(json!({})), "object"),
        (Value::tagged("custom", 1), "number"),
    ];

    for (data, expected) in cases {
        let output = render(&data, size, None, None).unwrap().unwrap();
        assert_eq!(output.kind, expected, "for {:?}", data);
    }

    let empty = ComponentRegistry::new();
    let output = render(&Value::from(1), size, None, Some(&empty)).unwrap().unwrap();
    assert_eq!(output.kind, "__unknown__");
}

#[test]
fn test_array_record_matches_length_and_order() {
    let items: Vec<Value> = (0..7).map(Value::from).collect();
    let output = render(&Value::Array(items), Size::new(300.0, 300.0), None, None)
        .unwrap()
        .unwrap();

    let values: Vec<f64> = output
        .children()
        .iter()
        .map(|child| child.prop("value").and_then(|v| v.as_f64()).unwrap())
        .collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let layout = output.prop("layout").and_then(|l| l.as_array()).unwrap();
    assert_eq!(layout.len(), 7);
    let ys: Vec<f64> = layout
        .iter()
        .map(|item| item["position"]["y"].as_f64().unwrap())
        .collect();
    assert!(ys.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_path_reaches_nested_element() {
    fn path_probe(ctx: &RenderContext<'_, ComponentOutput>) -> Result<ComponentOutput> {
        Ok(number_component(ctx)?.with_key(ctx.path.clone()))
    }

    let mut registry = create_default_registry();
    registry.register("number", path_probe);

    let data = Value::from(json!({ "a": [1, 2] }));
    let output = render(&data, Size::new(200.0, 200.0), Some("$"), Some(&registry))
        .unwrap()
        .unwrap();

    let array = &output.children()[0].children()[0];
    let keys: Vec<Option<&str>> = array.children().iter().map(|c| c.key.as_deref()).collect();
    assert_eq!(keys, vec![Some("$.a[0]"), Some("$.a[1]")]);
}

#[test]
fn test_records_cross_a_json_boundary() {
    let data = Value::from(json!({ "when": "2024-01-01T00:00:00Z", "n": [1.5] }));
    let output = render(&data, Size::new(320.0, 200.0), None, None).unwrap().unwrap();

    let wire = serde_json::to_string(&output).unwrap();
    let back: ComponentOutput = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, output);
}
