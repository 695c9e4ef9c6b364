//! Primitive components
//!
//! Producers that return serializable [`ComponentOutput`] records. Scalar
//! producers return a leaf record; `array` and `object` recurse through
//! [`RenderContext::render`] and return one child per element or entry.

use serde_json::Value as JsonValue;
use strata_core::{
    array_path, format_date, grid_layout, infer_type, list_layout, number_to_json, object_path,
    tags, RenderContext, Result, StrataError, Value,
};
use tracing::warn;

use crate::ComponentOutput;

/// Tag of the wrapper record around each object entry
pub const KEY_VALUE: &str = "key-value";

/// Gap between array grid cells
pub const GRID_GAP: f64 = 2.0;
/// Minimum height of an array grid cell
pub const MIN_CELL_HEIGHT: f64 = 40.0;
/// Height of one object entry row
pub const ROW_HEIGHT: f64 = 30.0;
/// Share of an object row given to the value (the key label takes the rest)
pub const VALUE_WIDTH_RATIO: f64 = 0.7;

/// Signature shared by all primitive components
pub type ComponentFn = fn(&RenderContext<'_, ComponentOutput>) -> Result<ComponentOutput>;

type Ctx<'a> = RenderContext<'a, ComponentOutput>;

fn wrong_shape(ctx: &Ctx<'_>, tag: &str, expected: &str) -> StrataError {
    StrataError::contract(
        tag,
        &ctx.path,
        format!("expected {}, got {}", expected, infer_type(ctx.data.untagged())),
    )
}

// =============================================================================
// Scalar components
// =============================================================================

pub fn null_component(_ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    Ok(ComponentOutput::new(tags::NULL))
}

pub fn undefined_component(_ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    Ok(ComponentOutput::new(tags::UNDEFINED))
}

/// Any scalar is accepted and stringified; only strings keep their raw text.
pub fn string_component(ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    let text = match ctx.data.untagged() {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Date(d) => format_date(d),
        _ => return Err(wrong_shape(ctx, tags::STRING, "a scalar")),
    };
    Ok(ComponentOutput::new(tags::STRING).with_prop("value", text))
}

pub fn number_component(ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    let Value::Number(n) = ctx.data.untagged() else {
        return Err(wrong_shape(ctx, tags::NUMBER, "a number"));
    };
    Ok(ComponentOutput::new(tags::NUMBER).with_prop("value", number_to_json(*n)))
}

pub fn boolean_component(ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    let Value::Bool(b) = ctx.data.untagged() else {
        return Err(wrong_shape(ctx, tags::BOOLEAN, "a boolean"));
    };
    Ok(ComponentOutput::new(tags::BOOLEAN).with_prop("value", *b))
}

pub fn date_component(ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    let Value::Date(d) = ctx.data.untagged() else {
        return Err(wrong_shape(ctx, tags::DATE, "a date"));
    };
    Ok(ComponentOutput::new(tags::DATE).with_prop("value", format_date(d)))
}

// =============================================================================
// Recursive components
// =============================================================================

/// One child per element, placed on a grid.
pub fn array_component(ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    let Value::Array(items) = ctx.data.untagged() else {
        return Err(wrong_shape(ctx, tags::ARRAY, "an array"));
    };

    let layout = grid_layout(ctx.size, items.len(), GRID_GAP, MIN_CELL_HEIGHT);

    let children = layout
        .iter()
        .map(|item| -> Result<ComponentOutput> {
            match items.get(item.index) {
                Some(element) => Ok(ctx
                    .render(element, item.size, array_path(&ctx.path, item.index))?
                    .unwrap_or_else(ComponentOutput::null)),
                None => Ok(ComponentOutput::null()),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComponentOutput::new(tags::ARRAY)
        .with_prop("layout", serde_json::to_value(&layout)?)
        .with_children(children))
}

/// One `key-value` row per entry, in entry order.
pub fn object_component(ctx: &Ctx<'_>) -> Result<ComponentOutput> {
    let Value::Object(entries) = ctx.data.untagged() else {
        return Err(wrong_shape(ctx, tags::OBJECT, "an object"));
    };

    let layout = list_layout(ctx.size, entries.len(), ROW_HEIGHT);

    let children = layout
        .iter()
        .map(|item| -> Result<ComponentOutput> {
            let Some((key, value)) = entries.get(item.index) else {
                warn!(path = %ctx.path, index = item.index, "object layout slot without entry");
                return Ok(ComponentOutput::null());
            };

            let child_size = item.size.with_width_ratio(VALUE_WIDTH_RATIO);
            let child = ctx
                .render(value, child_size, object_path(&ctx.path, key))?
                .unwrap_or_else(ComponentOutput::null);

            Ok(ComponentOutput::new(KEY_VALUE)
                .with_prop("key", key.as_str())
                .with_children(vec![child]))
        })
        .collect::<Result<Vec<_>>>()?;

    let keys: Vec<JsonValue> = entries
        .iter()
        .map(|(key, _)| JsonValue::String(key.clone()))
        .collect();

    Ok(ComponentOutput::new(tags::OBJECT)
        .with_prop("keys", keys)
        .with_children(children))
}

// =============================================================================
// Registry helpers
// =============================================================================

/// All primitive components with their tags, in registration order.
pub fn primitive_components() -> [(&'static str, ComponentFn); 8] {
    [
        (tags::NULL, null_component),
        (tags::UNDEFINED, undefined_component),
        (tags::STRING, string_component),
        (tags::NUMBER, number_component),
        (tags::BOOLEAN, boolean_component),
        (tags::DATE, date_component),
        (tags::ARRAY, array_component),
        (tags::OBJECT, object_component),
    ]
}

/// Register all primitive components to a registry.
pub fn register_components(registry: &mut crate::ComponentRegistry) {
    for (tag, component) in primitive_components() {
        registry.register(tag, component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentRegistry;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use strata_core::{dispatch, DispatchConfig, Size};

    fn produce(data: &Value, size: Size) -> Result<ComponentOutput> {
        let mut registry = ComponentRegistry::new();
        register_components(&mut registry);
        Ok(dispatch(data, size, "$", DispatchConfig::new(&registry))?.unwrap())
    }

    fn to_json(output: &ComponentOutput) -> JsonValue {
        serde_json::to_value(output).unwrap()
    }

    #[test]
    fn test_scalars() {
        let size = Size::new(100.0, 40.0);
        assert_eq!(to_json(&produce(&Value::Null, size).unwrap()), json!({ "type": "null", "props": {} }));
        assert_eq!(
            to_json(&produce(&Value::Undefined, size).unwrap()),
            json!({ "type": "undefined", "props": {} })
        );
        assert_eq!(
            to_json(&produce(&Value::from("hi"), size).unwrap()),
            json!({ "type": "string", "props": { "value": "hi" } })
        );
        assert_eq!(
            to_json(&produce(&Value::from(2.5), size).unwrap()),
            json!({ "type": "number", "props": { "value": 2.5 } })
        );
        assert_eq!(
            to_json(&produce(&Value::from(false), size).unwrap()),
            json!({ "type": "boolean", "props": { "value": false } })
        );
    }

    #[test]
    fn test_date_is_iso_8601() {
        let date = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 1).unwrap();
        let output = produce(&Value::Date(date), Size::default()).unwrap();
        assert_eq!(output.prop("value"), Some(&json!("2024-06-30T23:59:01.000Z")));
    }

    #[test]
    fn test_date_component_on_string_is_contract_violation() {
        let mut registry = ComponentRegistry::new();
        registry.register(tags::STRING, date_component as ComponentFn);

        let err = dispatch(&Value::from("soon"), Size::default(), "$", DispatchConfig::new(&registry))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Contract violation in 'date' producer at $: expected a date, got string"
        );
    }

    #[test]
    fn test_string_component_stringifies_scalars() {
        let mut registry = ComponentRegistry::new();
        registry.register("money", string_component as ComponentFn);

        let output = dispatch(&Value::tagged("money", 12.5), Size::default(), "$", DispatchConfig::new(&registry))
            .unwrap()
            .unwrap();
        assert_eq!(output.kind, "string");
        assert_eq!(output.prop("value"), Some(&json!("12.5")));
    }

    #[test]
    fn test_array_children_and_layout() {
        let data = Value::from(json!(["a", 1, true, null, "e"]));
        let output = produce(&data, Size::new(302.0, 202.0)).unwrap();

        assert_eq!(output.kind, "array");
        let kinds: Vec<&str> = output.children().iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["string", "number", "boolean", "null", "string"]);

        let layout = output.prop("layout").and_then(JsonValue::as_array).unwrap();
        assert_eq!(layout.len(), 5);
        let ys: Vec<f64> = layout
            .iter()
            .map(|item| item["position"]["y"].as_f64().unwrap())
            .collect();
        assert!(ys.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(layout[4]["index"], json!(4));
    }

    #[test]
    fn test_empty_array() {
        let output = produce(&Value::Array(vec![]), Size::new(100.0, 100.0)).unwrap();
        assert_eq!(to_json(&output), json!({ "type": "array", "props": { "layout": [] }, "children": [] }));
    }

    #[test]
    fn test_object_rows_use_value_width() {
        let data = Value::object([("nested", Value::from(json!({ "x": 1 })))]);
        let output = produce(&data, Size::new(200.0, 100.0)).unwrap();

        let row = &output.children()[0];
        assert_eq!(row.kind, KEY_VALUE);
        assert_eq!(row.prop("key"), Some(&json!("nested")));
        assert_eq!(row.children().len(), 1);
        assert_eq!(row.children()[0].kind, "object");
        assert_eq!(row.children()[0].prop("keys"), Some(&json!(["x"])));
    }

    #[test]
    fn test_primitive_components_cover_all_tags() {
        let registered: Vec<&str> = primitive_components().iter().map(|(tag, _)| *tag).collect();
        assert_eq!(registered, tags::ALL.to_vec());
    }
}
