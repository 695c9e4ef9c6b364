//! One-call render and hydrate

use strata_components::{render, ComponentRegistry};
use strata_core::{Result, Size, Value, ROOT_PATH};
use strata_hydrate::{create_hydrate, default_hydrate, Element, HydrationMap};
use tracing::debug;

/// Renders a value and hydrates the result.
///
/// Without a registry the process-wide default is used; without a hydration
/// map the default hydrate is used. A custom map replaces the default one
/// entirely; use [`strata_hydrate::extend_hydration_map`] to build on it.
#[derive(Debug, Clone)]
pub struct Viewer<'a> {
    data: &'a Value,
    size: Size,
    path: String,
    registry: Option<&'a ComponentRegistry>,
    hydration_map: Option<HydrationMap>,
}

impl<'a> Viewer<'a> {
    pub fn new(data: &'a Value, size: Size) -> Self {
        Self {
            data,
            size,
            path: ROOT_PATH.to_string(),
            registry: None,
            hydration_map: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn registry(mut self, registry: &'a ComponentRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn hydration_map(mut self, map: HydrationMap) -> Self {
        self.hydration_map = Some(map);
        self
    }

    /// Run the pipeline.
    ///
    /// Returns `None` when dispatch produced no record.
    pub fn view(&self) -> Result<Option<Element>> {
        let Some(output) = render(self.data, self.size, Some(&self.path), self.registry)? else {
            debug!(path = %self.path, "no record produced");
            return Ok(None);
        };

        let element = match &self.hydration_map {
            Some(map) => create_hydrate(map.clone(), None).hydrate(&output),
            None => default_hydrate().hydrate(&output),
        };
        Ok(Some(element))
    }
}
