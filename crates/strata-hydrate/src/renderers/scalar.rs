//! Leaf renderers

use ratatui::style::{Color, Style};
use serde_json::Value as JsonValue;

use super::dim;
use crate::{ComponentOutput, Element};

/// Text of the `value` prop, without JSON quoting for strings
fn value_text(output: &ComponentOutput) -> String {
    match output.prop("value") {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => match n.as_f64() {
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}

pub fn null_renderer(_output: &ComponentOutput, _children: Vec<Element>) -> Element {
    Element::text("null", dim())
}

pub fn undefined_renderer(_output: &ComponentOutput, _children: Vec<Element>) -> Element {
    Element::text("undefined", dim())
}

pub fn string_renderer(output: &ComponentOutput, _children: Vec<Element>) -> Element {
    Element::text(
        format!("\"{}\"", value_text(output)),
        Style::default().fg(Color::Red),
    )
}

pub fn number_renderer(output: &ComponentOutput, _children: Vec<Element>) -> Element {
    Element::text(value_text(output), Style::default().fg(Color::Green))
}

pub fn boolean_renderer(output: &ComponentOutput, _children: Vec<Element>) -> Element {
    Element::text(value_text(output), Style::default().fg(Color::Blue))
}

pub fn date_renderer(output: &ComponentOutput, _children: Vec<Element>) -> Element {
    Element::text(value_text(output), Style::default().fg(Color::Green))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, value: impl Into<JsonValue>) -> ComponentOutput {
        ComponentOutput::new(kind).with_prop("value", value)
    }

    #[test]
    fn test_string_is_quoted() {
        assert_eq!(
            string_renderer(&record("string", "hi"), vec![]),
            Element::text("\"hi\"", Style::default().fg(Color::Red))
        );
    }

    #[test]
    fn test_number_formatting() {
        let render = |v: JsonValue| number_renderer(&record("number", v), vec![]);
        assert_eq!(render(JsonValue::from(2.0)), Element::text("2", Style::default().fg(Color::Green)));
        assert_eq!(render(JsonValue::from(-1.5)), Element::text("-1.5", Style::default().fg(Color::Green)));
        // non-finite numbers arrive as null
        assert_eq!(render(JsonValue::Null), Element::text("null", Style::default().fg(Color::Green)));
    }

    #[test]
    fn test_boolean_and_date() {
        assert_eq!(
            boolean_renderer(&record("boolean", false), vec![]),
            Element::text("false", Style::default().fg(Color::Blue))
        );
        assert_eq!(
            date_renderer(&record("date", "2024-01-01T00:00:00.000Z"), vec![]),
            Element::text("2024-01-01T00:00:00.000Z", Style::default().fg(Color::Green))
        );
    }

    #[test]
    fn test_null_and_undefined_are_dim() {
        assert_eq!(
            null_renderer(&ComponentOutput::null(), vec![]),
            Element::text("null", dim())
        );
        assert_eq!(
            undefined_renderer(&ComponentOutput::new("undefined"), vec![]),
            Element::text("undefined", dim())
        );
    }
}
