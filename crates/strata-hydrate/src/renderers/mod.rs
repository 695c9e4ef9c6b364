//! Built-in renderers
//!
//! One renderer per record type produced by the primitive components, plus
//! `key-value` rows and the `__unknown__` fallback record.

use ratatui::style::{Color, Modifier, Style};
use strata_components::{KEY_VALUE, UNKNOWN};
use strata_core::tags;

mod layout;
mod scalar;

pub use layout::{array_renderer, key_value_renderer, object_renderer, unknown_renderer};
pub use scalar::{
    boolean_renderer, date_renderer, null_renderer, number_renderer, string_renderer,
    undefined_renderer,
};

use crate::HydrationMap;

fn dim() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Map with a renderer for every built-in record type
pub fn default_hydration_map() -> HydrationMap {
    let mut map = HydrationMap::new();
    map.insert(tags::NULL, null_renderer)
        .insert(tags::UNDEFINED, undefined_renderer)
        .insert(tags::STRING, string_renderer)
        .insert(tags::NUMBER, number_renderer)
        .insert(tags::BOOLEAN, boolean_renderer)
        .insert(tags::DATE, date_renderer)
        .insert(tags::ARRAY, array_renderer)
        .insert(tags::OBJECT, object_renderer)
        .insert(KEY_VALUE, key_value_renderer)
        .insert(UNKNOWN, unknown_renderer);
    map
}

/// The default map overlaid with `custom`. Entries in `custom` win.
pub fn extend_hydration_map(custom: &HydrationMap) -> HydrationMap {
    let mut map = default_hydration_map();
    map.merge(custom);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_hydrate, ComponentOutput, Element};

    #[test]
    fn test_default_map_covers_builtin_types() {
        let map = default_hydration_map();
        for tag in tags::ALL {
            assert!(map.contains(tag), "missing renderer for {}", tag);
        }
        assert!(map.contains(KEY_VALUE));
        assert!(map.contains(UNKNOWN));
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn test_extend_overrides_without_touching_default() {
        let mut custom = HydrationMap::new();
        custom.insert(tags::STRING, |_: &ComponentOutput, _: Vec<Element>| {
            Element::text("custom", Style::default())
        });
        custom.insert("money", |_: &ComponentOutput, _: Vec<Element>| Element::Empty);

        let extended = extend_hydration_map(&custom);
        assert_eq!(extended.len(), 11);

        let record = ComponentOutput::new(tags::STRING).with_prop("value", "a");
        assert_eq!(
            create_hydrate(extended, None).hydrate(&record),
            Element::text("custom", Style::default())
        );
        assert_ne!(
            create_hydrate(default_hydration_map(), None).hydrate(&record),
            Element::text("custom", Style::default())
        );
        assert!(!default_hydration_map().contains("money"));
    }
}
