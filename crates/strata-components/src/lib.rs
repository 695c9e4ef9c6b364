//! # strata-components
//!
//! Primitive output producers for Strata.
//!
//! Producers turn a value into a serializable [`ComponentOutput`] record. The
//! record tree is independent of any display technology and can be sent to a
//! separate hydration step (see `strata-hydrate`).
//!
//! ```
//! use strata_components::render;
//! use strata_core::{Size, Value};
//!
//! let data = Value::object([("name", Value::from("Ada")), ("age", Value::from(36))]);
//! let output = render(&data, Size::new(400.0, 300.0), None, None).unwrap().unwrap();
//! assert_eq!(output.kind, "object");
//! assert_eq!(output.children().len(), 2);
//! ```

mod components;
mod output;
mod render;

pub use components::{
    array_component, boolean_component, date_component, null_component, number_component,
    object_component, primitive_components, register_components, string_component,
    undefined_component, ComponentFn, GRID_GAP, KEY_VALUE, MIN_CELL_HEIGHT, ROW_HEIGHT,
    VALUE_WIDTH_RATIO,
};
pub use output::ComponentOutput;
pub use render::{
    create_default_registry, default_registry, render, unknown_component, ComponentRegistry,
    UNKNOWN,
};

pub use strata_core::{Result, StrataError};
