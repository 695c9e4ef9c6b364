//! Event handling for crossterm terminal events
//!
//! Polls for keyboard, resize, and tick events.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use strata_core::Result;

/// Viewer events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Key press event
    Key(KeyEvent),
    /// Poll timeout
    Tick,
    /// Terminal resize event
    Resize(u16, u16),
}

/// Poll for the next event with timeout
pub fn poll_event(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            // Windows reports releases too
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Resize(width, height) => Ok(Some(AppEvent::Resize(width, height))),
            _ => Ok(Some(AppEvent::Tick)),
        }
    } else {
        Ok(Some(AppEvent::Tick))
    }
}

/// Check if a key event is a quit command (q, Esc or Ctrl+C)
pub fn is_quit_event(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Down arrow or j
pub fn is_scroll_down_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

/// Up arrow or k
pub fn is_scroll_up_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_page_down_event(key: KeyEvent) -> bool {
    key.code == KeyCode::PageDown
}

pub fn is_page_up_event(key: KeyEvent) -> bool {
    key.code == KeyCode::PageUp
}

pub fn is_home_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Home | KeyCode::Char('g'))
}

pub fn is_end_event(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::End | KeyCode::Char('G'))
}
