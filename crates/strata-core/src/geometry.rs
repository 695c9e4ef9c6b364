//! Geometry types shared by layout, producers and hydration

use serde::{Deserialize, Serialize};

/// Available size in logical units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale only the width, keeping the height
    pub fn with_width_ratio(self, ratio: f64) -> Self {
        Self {
            width: self.width * ratio,
            height: self.height,
        }
    }
}

/// Top-left position in logical units, relative to the parent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of one element slot produced by a layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub position: Position,
    pub size: Size,
    pub index: usize,
}

impl LayoutItem {
    /// Bottom edge of the slot (`position.y + size.height`)
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}
