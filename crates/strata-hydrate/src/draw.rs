//! Drawing elements into a Ratatui buffer

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::{Element, Scale};

/// Widget showing an element, scrolled down by `scroll` rows
#[derive(Debug, Clone, Copy)]
pub struct ElementView<'a> {
    element: &'a Element,
    scale: Scale,
    scroll: u16,
}

impl<'a> ElementView<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self {
            element,
            scale: Scale::default(),
            scroll: 0,
        }
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for ElementView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Draw the whole tree off screen, then copy the visible window
        let total_rows = self.element.rows(self.scale).max(1);
        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, total_rows));
        draw(self.element, canvas.area, &mut canvas, self.scale);

        let visible = area.intersection(buf.area);
        for dy in 0..visible.height {
            let src_y = self.scroll.saturating_add(dy);
            if src_y >= canvas.area.height {
                break;
            }
            for dx in 0..visible.width.min(canvas.area.width) {
                buf[(visible.x + dx, visible.y + dy)] = canvas[(dx, src_y)].clone();
            }
        }
    }
}

impl Widget for &Element {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ElementView::new(self).render(area, buf);
    }
}

/// Draw `element` into `area`, clipped to the buffer
fn draw(element: &Element, area: Rect, buf: &mut Buffer, scale: Scale) {
    let area = area.intersection(buf.area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    match element {
        Element::Empty => {}
        Element::Text(line) => {
            buf.set_line(area.x, area.y, line, area.width);
        }
        Element::Placeholder(message) => {
            buf.set_stringn(
                area.x,
                area.y,
                format!("[!] {}", message),
                area.width as usize,
                Element::placeholder_style(),
            );
        }
        Element::Stack(children) => {
            let mut y = area.y;
            let bottom = area.y.saturating_add(area.height);
            for child in children {
                if y >= bottom {
                    break;
                }
                let rows = child.rows(scale).min(bottom - y);
                draw(child, Rect::new(area.x, y, area.width, rows), buf, scale);
                y = y.saturating_add(rows);
            }
        }
        Element::Row(cells) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(cells.iter().map(|(percent, _)| Constraint::Percentage(*percent)))
                .split(area);
            for ((_, cell), chunk) in cells.iter().zip(chunks.iter()) {
                draw(cell, *chunk, buf, scale);
            }
        }
        Element::Absolute { children, .. } => {
            for child in children {
                let col = scale.column(child.position.x);
                let row = scale.row(child.position.y);
                let width = scale
                    .column(child.position.x + child.size.width)
                    .saturating_sub(col)
                    .max(1);
                let height = scale
                    .row(child.position.y + child.size.height)
                    .saturating_sub(row)
                    .max(1);

                let rect = Rect::new(
                    area.x.saturating_add(col),
                    area.y.saturating_add(row),
                    width,
                    height,
                );
                draw(&child.element, rect.intersection(area), buf, scale);
            }
        }
    }
}

/// Draw an element `width` columns wide and return its text, one line per row
/// with trailing spaces trimmed.
pub fn to_plain_text(element: &Element, width: u16, scale: Scale) -> String {
    let rows = element.rows(scale).max(1);
    let mut buf = Buffer::empty(Rect::new(0, 0, width, rows));
    ElementView::new(element).scale(scale).render(buf.area, &mut buf);

    (0..rows)
        .map(|y| {
            let line: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
