//! Container renderers

use ratatui::style::{Color, Modifier, Style};
use strata_core::LayoutItem;
use tracing::debug;

use crate::{ComponentOutput, Element, Positioned};

/// Width percentage of the key column in a key-value row
const KEY_COLUMN: u16 = 30;

/// Places each child at its `props.layout` slot.
///
/// The element is as tall as the bottom of the last slot.
pub fn array_renderer(output: &ComponentOutput, children: Vec<Element>) -> Element {
    let layout: Vec<LayoutItem> = match output.prop("layout") {
        Some(layout) => match serde_json::from_value(layout.clone()) {
            Ok(layout) => layout,
            Err(e) => {
                debug!(error = %e, "unreadable array layout");
                return Element::text("[empty array]", Style::default());
            }
        },
        None => return Element::text("[empty array]", Style::default()),
    };

    let height = layout.last().map(LayoutItem::bottom).unwrap_or(0.0);

    let mut children: Vec<Option<Element>> = children.into_iter().map(Some).collect();
    let positioned = layout
        .iter()
        .map(|item| Positioned {
            position: item.position,
            size: item.size,
            element: children
                .get_mut(item.index)
                .and_then(Option::take)
                .unwrap_or(Element::Empty),
        })
        .collect();

    Element::Absolute {
        height,
        children: positioned,
    }
}

/// Stacks the key-value rows of an object
pub fn object_renderer(output: &ComponentOutput, children: Vec<Element>) -> Element {
    if output.prop("keys").is_none() {
        return Element::text("{}", Style::default());
    }
    Element::Stack(children)
}

/// `key:` label beside the hydrated value
pub fn key_value_renderer(output: &ComponentOutput, children: Vec<Element>) -> Element {
    let key = output
        .prop("key")
        .and_then(|k| k.as_str())
        .unwrap_or_default();
    let label = Element::text(
        format!("{}:", key),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    );
    let value = children.into_iter().next().unwrap_or(Element::Empty);

    Element::Row(vec![(KEY_COLUMN, label), (100 - KEY_COLUMN, value)])
}

/// Marks a value no component was registered for
pub fn unknown_renderer(output: &ComponentOutput, _children: Vec<Element>) -> Element {
    let original = output
        .prop("originalType")
        .and_then(|t| t.as_str())
        .unwrap_or("?");
    Element::Placeholder(format!("No component for type: {}", original))
}
