//! Record hydration
//!
//! [`Hydrate`] walks a [`ComponentOutput`] tree depth-first, hydrating each
//! record's children before handing them to the record's [`Renderer`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use strata_components::ComponentOutput;
use tracing::{debug, trace};

use crate::{default_hydration_map, Element};

/// Turns one record and its already hydrated children into an element
pub trait Renderer: Send + Sync {
    fn render(&self, output: &ComponentOutput, children: Vec<Element>) -> Element;
}

impl<F> Renderer for F
where
    F: Fn(&ComponentOutput, Vec<Element>) -> Element + Send + Sync,
{
    fn render(&self, output: &ComponentOutput, children: Vec<Element>) -> Element {
        self(output, children)
    }
}

/// Map from record type to renderer
#[derive(Clone, Default)]
pub struct HydrationMap {
    renderers: HashMap<String, Arc<dyn Renderer>>,
}

impl HydrationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer, replacing any previous one for `tag`
    pub fn insert<R>(&mut self, tag: impl Into<String>, renderer: R) -> &mut Self
    where
        R: Renderer + 'static,
    {
        self.insert_arc(tag, Arc::new(renderer))
    }

    pub fn insert_arc(&mut self, tag: impl Into<String>, renderer: Arc<dyn Renderer>) -> &mut Self {
        self.renderers.insert(tag.into(), renderer);
        self
    }

    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Renderer>> {
        self.renderers.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Overlay every entry of `other`; entries from `other` win
    pub fn merge(&mut self, other: &HydrationMap) -> &mut Self {
        for (tag, renderer) in &other.renderers {
            self.renderers.insert(tag.clone(), Arc::clone(renderer));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Debug for HydrationMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HydrationMap")
            .field("tags", &self.tags())
            .finish()
    }
}

/// A hydration map plus an optional renderer for unmapped types
#[derive(Clone, Default)]
pub struct Hydrate {
    map: HydrationMap,
    fallback: Option<Arc<dyn Renderer>>,
}

impl Hydrate {
    pub fn map(&self) -> &HydrationMap {
        &self.map
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Hydrate a record tree. Never fails: records with no renderer and no
    /// fallback become placeholders.
    pub fn hydrate(&self, output: &ComponentOutput) -> Element {
        trace!(kind = %output.kind, children = output.children().len(), "hydrate");

        let renderer = match self.map.get(&output.kind) {
            Some(renderer) => renderer,
            None => match &self.fallback {
                Some(fallback) => {
                    debug!(kind = %output.kind, "no renderer registered, using fallback");
                    fallback
                }
                None => {
                    debug!(kind = %output.kind, "no renderer registered, using placeholder");
                    return Element::Placeholder(format!(
                        "Unknown component type: {}",
                        output.kind
                    ));
                }
            },
        };

        let children = output
            .children()
            .iter()
            .map(|child| self.hydrate(child))
            .collect();

        renderer.render(output, children)
    }
}

impl fmt::Debug for Hydrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hydrate")
            .field("map", &self.map)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

static DEFAULT_HYDRATE: OnceLock<Hydrate> = OnceLock::new();

/// Build a hydrate function over `map`, with an optional fallback renderer
pub fn create_hydrate(map: HydrationMap, fallback: Option<Arc<dyn Renderer>>) -> Hydrate {
    Hydrate { map, fallback }
}

/// Process-wide hydrate over [`default_hydration_map`], built on first use
pub fn default_hydrate() -> &'static Hydrate {
    DEFAULT_HYDRATE.get_or_init(|| {
        debug!("building default hydrate");
        create_hydrate(default_hydration_map(), None)
    })
}

/// Hydrate a record tree with [`default_hydrate`]
pub fn hydrate(output: &ComponentOutput) -> Element {
    default_hydrate().hydrate(output)
}
