//! Type tag to producer registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{infer_type, RenderContext, Result, Value};

/// Produces an output of type `T` for the value in a [`RenderContext`].
///
/// Implemented for any `Fn(&RenderContext<'_, T>) -> Result<T>`, so plain
/// functions and closures register directly.
pub trait Producer<T>: Send + Sync {
    fn produce(&self, ctx: &RenderContext<'_, T>) -> Result<T>;
}

impl<T, F> Producer<T> for F
where
    F: Fn(&RenderContext<'_, T>) -> Result<T> + Send + Sync,
{
    fn produce(&self, ctx: &RenderContext<'_, T>) -> Result<T> {
        self(ctx)
    }
}

/// Registry of producers keyed by type tag.
///
/// Registering a tag twice replaces the earlier producer.
pub struct Registry<T> {
    producers: HashMap<String, Arc<dyn Producer<T>>>,
}

/// A producer matched for a value by [`Registry::resolve`]
pub struct Resolved<'r, 'v, T> {
    /// Tag the producer is registered under
    pub tag: &'v str,
    pub producer: &'r Arc<dyn Producer<T>>,
    /// The value the producer should see (the wrapped value when a tag was unwrapped)
    pub data: &'v Value,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            producers: HashMap::new(),
        }
    }

    /// Register a producer for a tag, replacing any previous one.
    pub fn register<P>(&mut self, tag: impl Into<String>, producer: P) -> &mut Self
    where
        P: Producer<T> + 'static,
    {
        self.producers.insert(tag.into(), Arc::new(producer));
        self
    }

    /// Register a shared producer.
    pub fn register_arc(&mut self, tag: impl Into<String>, producer: Arc<dyn Producer<T>>) -> &mut Self {
        self.producers.insert(tag.into(), producer);
        self
    }

    /// Look up the producer registered for a tag.
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Producer<T>>> {
        self.producers.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.producers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.producers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Find the most specific producer for a value.
    ///
    /// A tagged value is matched by its explicit tag first; if that tag has no
    /// producer, the wrapped value is tried in turn.
    pub fn resolve<'r, 'v>(&'r self, data: &'v Value) -> Option<Resolved<'r, 'v, T>> {
        let mut current = data;
        loop {
            let tag = infer_type(current);
            if let Some(producer) = self.producers.get(tag) {
                return Some(Resolved {
                    tag,
                    producer,
                    data: current,
                });
            }
            match current {
                Value::Tagged { value, .. } => current = value,
                _ => return None,
            }
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("tags", &self.tags()).finish()
    }
}
