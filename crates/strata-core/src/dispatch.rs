//! Type dispatch: classify a value, find its producer, recurse through the context

use tracing::{debug, trace};

use crate::{infer_type, path_depth, Registry, Result, Size, Value};

/// Called with the inferred tag and the raw value when no producer matches
pub type Fallback<T> = dyn Fn(&str, &Value) -> T + Send + Sync;

/// Registry and fallback in effect for one dispatch pass
pub struct DispatchConfig<'a, T> {
    pub registry: &'a Registry<T>,
    pub fallback: Option<&'a Fallback<T>>,
}

impl<'a, T> DispatchConfig<'a, T> {
    /// Dispatch against a registry with no fallback
    pub fn new(registry: &'a Registry<T>) -> Self {
        Self {
            registry,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: &'a Fallback<T>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn dispatch_at(&self, data: &Value, size: Size, path: String, depth: usize) -> Result<Option<T>> {
        match self.registry.resolve(data) {
            Some(resolved) => {
                trace!(path = %path, tag = resolved.tag, depth, "dispatch");
                let ctx = RenderContext {
                    data: resolved.data,
                    size,
                    path,
                    depth,
                    config: DispatchConfig {
                        registry: self.registry,
                        fallback: self.fallback,
                    },
                };
                resolved.producer.produce(&ctx).map(Some)
            }
            None => {
                let tag = infer_type(data);
                match self.fallback {
                    Some(fallback) => {
                        debug!(path = %path, tag, "no producer registered, using fallback");
                        Ok(Some(fallback(tag, data)))
                    }
                    None => {
                        debug!(path = %path, tag, "no producer registered and no fallback");
                        Ok(None)
                    }
                }
            }
        }
    }
}

impl<T> Clone for DispatchConfig<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DispatchConfig<'_, T> {}

/// Everything a producer sees for one node of the tree
pub struct RenderContext<'a, T> {
    /// Value being rendered
    pub data: &'a Value,
    /// Space available to this node
    pub size: Size,
    /// Position of this node in the tree, e.g. `$.foo[2].bar`
    pub path: String,
    /// Number of path segments below the root
    pub depth: usize,
    config: DispatchConfig<'a, T>,
}

impl<'a, T> RenderContext<'a, T> {
    /// Render a child value through the same registry and fallback.
    ///
    /// Returns `None` only when nothing matches and no fallback is configured.
    pub fn render(&self, data: &Value, size: Size, path: impl Into<String>) -> Result<Option<T>> {
        self.config.dispatch_at(data, size, path.into(), self.depth + 1)
    }

    /// Registry in effect for this pass
    pub fn registry(&self) -> &'a Registry<T> {
        self.config.registry
    }
}

/// Classify `data`, look up its producer and invoke it.
///
/// Unmatched values go to `config.fallback` with their inferred tag; without a
/// fallback the result is `None`. Errors only come from producers.
pub fn dispatch<T>(data: &Value, size: Size, path: &str, config: DispatchConfig<'_, T>) -> Result<Option<T>> {
    config.dispatch_at(data, size, path.to_string(), path_depth(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array_path, object_path, StrataError};
    use serde_json::json;

    /// Records `path@depth` for every node, recursing into arrays and objects
    fn trace_registry() -> Registry<Vec<String>> {
        fn leaf(ctx: &RenderContext<'_, Vec<String>>) -> Result<Vec<String>> {
            Ok(vec![format!("{}@{}", ctx.path, ctx.depth)])
        }

        fn array(ctx: &RenderContext<'_, Vec<String>>) -> Result<Vec<String>> {
            let mut out = leaf(ctx)?;
            if let Value::Array(items) = ctx.data {
                for (i, item) in items.iter().enumerate() {
                    if let Some(child) = ctx.render(item, ctx.size, array_path(&ctx.path, i))? {
                        out.extend(child);
                    }
                }
            }
            Ok(out)
        }

        fn object(ctx: &RenderContext<'_, Vec<String>>) -> Result<Vec<String>> {
            let mut out = leaf(ctx)?;
            if let Value::Object(entries) = ctx.data {
                for (key, value) in entries {
                    if let Some(child) = ctx.render(value, ctx.size, object_path(&ctx.path, key))? {
                        out.extend(child);
                    }
                }
            }
            Ok(out)
        }

        let mut registry = Registry::new();
        registry
            .register("number", leaf)
            .register("array", array)
            .register("object", object);
        registry
    }

    #[test]
    fn test_path_propagation() {
        let registry = trace_registry();
        let data = Value::from(json!({ "a": [1, 2] }));

        let out = dispatch(&data, Size::new(100.0, 100.0), "$", DispatchConfig::new(&registry))
            .unwrap()
            .unwrap();
        assert_eq!(out, vec!["$@0", "$.a@1", "$.a[0]@2", "$.a[1]@2"]);
    }

    #[test]
    fn test_root_depth_follows_path() {
        let registry = trace_registry();
        let out = dispatch(&Value::from(1), Size::default(), "$.x[3]", DispatchConfig::new(&registry))
            .unwrap()
            .unwrap();
        assert_eq!(out, vec!["$.x[3]@2"]);
    }

    #[test]
    fn test_unmatched_without_fallback_is_none() {
        let registry = trace_registry();
        let out = dispatch(&Value::from("text"), Size::default(), "$", DispatchConfig::new(&registry)).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_fallback_receives_inferred_tag() {
        let registry = trace_registry();
        let fallback = |tag: &str, data: &Value| vec![format!("unknown {} {:?}", tag, data)];
        let config = DispatchConfig::new(&registry).with_fallback(&fallback);

        let out = dispatch(&Value::from(json!([true])), Size::default(), "$", config)
            .unwrap()
            .unwrap();
        assert_eq!(out, vec!["$@0".to_string(), "unknown boolean Bool(true)".to_string()]);

        let out = dispatch(&Value::tagged("money", "x"), Size::default(), "$", config)
            .unwrap()
            .unwrap();
        assert_eq!(out, vec![r#"unknown money Tagged { tag: "money", value: String("x") }"#.to_string()]);
    }

    #[test]
    fn test_producer_errors_propagate() {
        let mut registry = trace_registry();
        registry.register("string", |ctx: &RenderContext<'_, Vec<String>>| -> Result<Vec<String>> {
            Err(StrataError::contract("string", &ctx.path, "refused"))
        });

        let data = Value::from(json!({ "ok": 1, "bad": "x" }));
        let err = dispatch(&data, Size::default(), "$", DispatchConfig::new(&registry)).unwrap_err();
        assert!(matches!(err, StrataError::ContractViolation { ref path, .. } if path == "$.bad"));
    }

    #[test]
    fn test_context_exposes_registry() {
        let mut registry = Registry::<usize>::new();
        registry.register("null", |ctx: &RenderContext<'_, usize>| -> Result<usize> {
            Ok(ctx.registry().len())
        });
        let out = dispatch(&Value::Null, Size::default(), "$", DispatchConfig::new(&registry)).unwrap();
        assert_eq!(out, Some(1));
    }
}
