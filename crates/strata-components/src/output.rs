//! Descriptive record produced by components

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use strata_core::tags;

/// Serializable, type-tagged description of how to render a value
///
/// Serialized as `{"type": .., "props": {..}, "children": [..], "key": ..}`;
/// `children` and `key` are omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOutput {
    /// Type tag selecting the hydration renderer
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub props: Map<String, JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentOutput>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ComponentOutput {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Map::new(),
            children: None,
            key: None,
        }
    }

    /// The `null` record used wherever an expected entry is missing
    pub fn null() -> Self {
        Self::new(tags::NULL)
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentOutput>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn prop(&self, name: &str) -> Option<&JsonValue> {
        self.props.get(name)
    }

    /// Children in generation order (empty when absent)
    pub fn children(&self) -> &[ComponentOutput] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of records in this tree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_omits_absent_fields() {
        let output = ComponentOutput::new("string").with_prop("value", "a");
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({ "type": "string", "props": { "value": "a" } })
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let output: ComponentOutput = serde_json::from_value(json!({
            "type": "key-value",
            "props": { "key": "k" },
            "children": [{ "type": "null" }],
            "key": "row-1"
        }))
        .unwrap();

        assert_eq!(output.kind, "key-value");
        assert_eq!(output.key.as_deref(), Some("row-1"));
        assert_eq!(output.children(), &[ComponentOutput::null()]);
        assert_eq!(output.node_count(), 2);
    }

    #[test]
    fn test_children_empty_when_absent() {
        assert!(ComponentOutput::null().children().is_empty());
        assert!(ComponentOutput::null().prop("value").is_none());
    }
}
