//! # strata-core
//!
//! Value model, type inference, registry dispatch and layout primitives for Strata.
//!
//! Strata renders arbitrary data in two stages:
//!
//! ```text
//! Value ──dispatch(Registry<T>)──▶ T (e.g. ComponentOutput) ──hydrate──▶ Element
//! ```
//!
//! This crate owns the first half of that contract:
//!
//! - [`Value`] - the runtime data being rendered (ordered objects, dates, tagged values)
//! - [`infer_type`] - pure classification of a value to a type tag
//! - [`Registry`] - tag to [`Producer`] table, last registration wins
//! - [`dispatch`] - classify, look up, invoke, recurse through [`RenderContext::render`]
//! - [`grid_layout`] / [`list_layout`] - geometry shared by producers
//! - [`StrataConfig`] - `.strata/config.toml`

pub mod config;
mod dispatch;
mod error;
mod geometry;
mod layout;
mod path;
mod registry;
mod value;

pub use config::{ScaleConfig, StrataConfig, ViewerConfig};
pub use dispatch::{dispatch, DispatchConfig, Fallback, RenderContext};
pub use error::{Result, StrataError};
pub use geometry::{LayoutItem, Position, Size};
pub use layout::{grid_layout, list_layout};
pub use path::{array_path, check_root_path, object_path, path_depth, ROOT_PATH};
pub use registry::{Producer, Registry, Resolved};
pub use value::{format_date, infer_type, number_to_json, tags, Value, TYPE_KEY};
