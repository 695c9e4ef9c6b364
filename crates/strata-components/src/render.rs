//! Render data to component records without hydration
//!
//! This is the server half of a render/hydrate split: the returned
//! [`ComponentOutput`] tree serializes to plain JSON.

use std::sync::OnceLock;

use strata_core::{dispatch, DispatchConfig, Registry, Result, Size, Value, ROOT_PATH};
use tracing::debug;

use crate::{register_components, ComponentOutput};

/// Registry that outputs ComponentOutput
pub type ComponentRegistry = Registry<ComponentOutput>;

/// Tag of the record produced for values no component is registered for
pub const UNKNOWN: &str = "__unknown__";

static DEFAULT_REGISTRY: OnceLock<ComponentRegistry> = OnceLock::new();

/// Create a registry with all primitive components
pub fn create_default_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    register_components(&mut registry);
    registry
}

/// Process-wide registry with all primitive components.
///
/// Built on first use; every call returns the same instance.
pub fn default_registry() -> &'static ComponentRegistry {
    DEFAULT_REGISTRY.get_or_init(|| {
        debug!("building default component registry");
        create_default_registry()
    })
}

/// Fallback record for unregistered types, carrying the tag and the raw data
pub fn unknown_component(original_type: &str, data: &Value) -> ComponentOutput {
    ComponentOutput::new(UNKNOWN)
        .with_prop("originalType", original_type)
        .with_prop("data", data.to_json())
}

/// Render data to a [`ComponentOutput`] tree.
///
/// `path` defaults to `$`, `registry` to [`default_registry`]. Unregistered
/// types become [`UNKNOWN`] records, so this only returns `None` when the
/// registry produced nothing at all, and only fails when a component is
/// handed a value it cannot render.
pub fn render(
    data: &Value,
    size: Size,
    path: Option<&str>,
    registry: Option<&ComponentRegistry>,
) -> Result<Option<ComponentOutput>> {
    // `default_registry` returns `&'static`, which `unwrap_or_else` cannot
    // unify with the caller's shorter lifetime
    let registry = match registry {
        Some(registry) => registry,
        None => default_registry(),
    };
    let path = path.unwrap_or(ROOT_PATH);

    dispatch(
        data,
        size,
        path,
        DispatchConfig::new(registry).with_fallback(&unknown_component),
    )
}
