//! # strata-hydrate
//!
//! Hydration layer for Strata: converts [`ComponentOutput`] records into an
//! [`Element`] tree that draws into a Ratatui buffer.
//!
//! ```text
//! ComponentOutput ──hydrate(HydrationMap)──▶ Element ──ElementView──▶ Buffer
//! ```
//!
//! Hydration owns all recursion: children are hydrated depth-first before the
//! parent's [`Renderer`] sees them, so renderers only arrange what they get.
//! Unknown record types never fail; they hydrate to the fallback renderer or
//! to a visibly marked placeholder.

mod draw;
mod element;
mod hydrate;
mod renderers;

pub use draw::{to_plain_text, ElementView};
pub use element::{Element, Positioned, Scale};
pub use hydrate::{create_hydrate, default_hydrate, hydrate, Hydrate, HydrationMap, Renderer};
pub use renderers::{
    array_renderer, boolean_renderer, date_renderer, default_hydration_map, extend_hydration_map,
    key_value_renderer, null_renderer, number_renderer, object_renderer, string_renderer,
    undefined_renderer, unknown_renderer,
};

pub use strata_components::ComponentOutput;
