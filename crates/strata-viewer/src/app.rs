//! Viewer state and key handling

use crossterm::event::KeyEvent;
use std::time::Duration;
use strata_core::StrataConfig;
use strata_hydrate::{Element, Scale};

use crate::event::{
    is_end_event, is_home_event, is_page_down_event, is_page_up_event, is_quit_event,
    is_scroll_down_event, is_scroll_up_event,
};

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    /// Hydrated element being shown
    pub element: Element,
    /// Header title
    pub title: String,
    /// Logical units per terminal cell
    pub scale: Scale,
    /// First visible content row
    pub scroll: u16,
    /// Rows per arrow key press
    pub scroll_step: u16,
    /// Content rows visible at once, updated on every draw
    pub viewport_height: u16,
    /// Event poll interval
    pub tick: Duration,
    /// Signal to exit the application
    pub should_quit: bool,
}

impl App {
    pub fn new(element: Element, title: impl Into<String>, config: &StrataConfig) -> Self {
        Self {
            element,
            title: title.into(),
            scale: config.scale.into(),
            scroll: 0,
            scroll_step: config.viewer.scroll_step.max(1),
            viewport_height: 0,
            tick: Duration::from_millis(config.viewer.tick_ms),
            should_quit: false,
        }
    }

    /// Total rows of content
    pub fn content_rows(&self) -> u16 {
        self.element.rows(self.scale)
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self) -> u16 {
        self.content_rows().saturating_sub(self.viewport_height)
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let page = self.viewport_height.max(1);
        if is_quit_event(key) {
            self.should_quit = true;
        } else if is_scroll_down_event(key) {
            self.scroll_down(self.scroll_step);
        } else if is_scroll_up_event(key) {
            self.scroll_up(self.scroll_step);
        } else if is_page_down_event(key) {
            self.scroll_down(page);
        } else if is_page_up_event(key) {
            self.scroll_up(page);
        } else if is_home_event(key) {
            self.scroll = 0;
        } else if is_end_event(key) {
            self.scroll = self.max_scroll();
        }
    }

    /// Status text for the header, e.g. `rows 1-20 of 54`
    pub fn position_label(&self) -> String {
        let total = self.content_rows();
        if total == 0 {
            return "empty".to_string();
        }
        let first = self.scroll.saturating_add(1).min(total);
        let last = self.scroll.saturating_add(self.viewport_height).min(total);
        format!("rows {}-{} of {}", first, last, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Style;

    fn app_with_rows(rows: usize) -> App {
        let lines = (0..rows)
            .map(|i| Element::text(i.to_string(), Style::default()))
            .collect();
        let mut app = App::new(Element::Stack(lines), "test", &StrataConfig::default());
        app.set_viewport_height(10);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_app_creation() {
        let app = app_with_rows(3);
        assert!(!app.should_quit);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.tick, Duration::from_millis(100));
        assert_eq!(app.max_scroll(), 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app_with_rows(25);
        assert_eq!(app.max_scroll(), 15);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 11);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 15);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 14);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll, 15);

        // growing the viewport pulls the offset back
        app.set_viewport_height(20);
        assert_eq!(app.scroll, 5);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with_rows(1);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_position_label() {
        let mut app = app_with_rows(25);
        assert_eq!(app.position_label(), "rows 1-10 of 25");
        app.scroll_down(100);
        assert_eq!(app.position_label(), "rows 16-25 of 25");
        assert_eq!(app_with_rows(0).position_label(), "empty");
    }
}
