//! Displayable element tree

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use strata_core::{Position, ScaleConfig, Size};

/// A hydrated, displayable node
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Nothing to draw
    Empty,
    /// One styled line of text
    Text(Line<'static>),
    /// Visibly marked stand-in for something that could not be hydrated
    Placeholder(String),
    /// Children top to bottom
    Stack(Vec<Element>),
    /// Cells left to right, each with a width percentage
    Row(Vec<(u16, Element)>),
    /// Children at absolute positions in logical units
    Absolute {
        height: f64,
        children: Vec<Positioned>,
    },
}

/// A child of [`Element::Absolute`]
#[derive(Debug, Clone, PartialEq)]
pub struct Positioned {
    pub position: Position,
    pub size: Size,
    pub element: Element,
}

/// Logical units covered by one terminal cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Scale {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Column nearest to a horizontal offset
    pub fn column(&self, x: f64) -> u16 {
        (x / self.cell_width).round() as u16
    }

    /// Row nearest to a vertical offset
    pub fn row(&self, y: f64) -> u16 {
        (y / self.cell_height).round() as u16
    }

    /// Rows needed to show `height` in full
    pub fn rows_for(&self, height: f64) -> u16 {
        (height / self.cell_height).ceil() as u16
    }
}

impl Default for Scale {
    fn default() -> Self {
        ScaleConfig::default().into()
    }
}

impl From<ScaleConfig> for Scale {
    fn from(config: ScaleConfig) -> Self {
        Self::new(config.cell_width, config.cell_height)
    }
}

impl Element {
    /// Single line of text
    pub fn text(content: impl Into<String>, style: Style) -> Self {
        Self::Text(Line::styled(content.into(), style))
    }

    /// Style used to mark placeholders
    pub fn placeholder_style() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Rows this element occupies when drawn at `scale`
    pub fn rows(&self, scale: Scale) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Text(_) | Self::Placeholder(_) => 1,
            Self::Stack(children) => children
                .iter()
                .fold(0u16, |acc, child| acc.saturating_add(child.rows(scale))),
            Self::Row(cells) => cells
                .iter()
                .map(|(_, cell)| cell.rows(scale))
                .max()
                .unwrap_or(0),
            Self::Absolute { height, .. } => scale.rows_for(*height),
        }
    }

    /// Number of nodes in this tree, including this one
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::Empty | Self::Text(_) | Self::Placeholder(_) => 0,
            Self::Stack(children) => children.iter().map(Self::node_count).sum(),
            Self::Row(cells) => cells.iter().map(|(_, cell)| cell.node_count()).sum(),
            Self::Absolute { children, .. } => {
                children.iter().map(|child| child.element.node_count()).sum()
            }
        }
    }

    /// True if any node in this tree is a placeholder
    pub fn has_placeholder(&self) -> bool {
        match self {
            Self::Placeholder(_) => true,
            Self::Empty | Self::Text(_) => false,
            Self::Stack(children) => children.iter().any(Self::has_placeholder),
            Self::Row(cells) => cells.iter().any(|(_, cell)| cell.has_placeholder()),
            Self::Absolute { children, .. } => {
                children.iter().any(|child| child.element.has_placeholder())
            }
        }
    }
}
