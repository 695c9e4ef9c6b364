//! Grid and list layout algorithms
//!
//! Both return exactly one [`LayoutItem`] per index, in index order.

use crate::{LayoutItem, Position, Size};

/// Lay `count` cells out in a near-square grid, row-major.
///
/// `columns = ceil(sqrt(count))`; cells share the width evenly and never get
/// shorter than `min_cell_height`.
pub fn grid_layout(size: Size, count: usize, gap: f64, min_cell_height: f64) -> Vec<LayoutItem> {
    if count == 0 {
        return Vec::new();
    }

    let columns = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(columns);

    let cell_width = ((size.width - gap * (columns - 1) as f64) / columns as f64).max(0.0);
    let cell_height = ((size.height - gap * (rows - 1) as f64) / rows as f64).max(min_cell_height);

    (0..count)
        .map(|index| {
            let col = index % columns;
            let row = index / columns;
            LayoutItem {
                position: Position::new(
                    col as f64 * (cell_width + gap),
                    row as f64 * (cell_height + gap),
                ),
                size: Size::new(cell_width, cell_height),
                index,
            }
        })
        .collect()
}

/// Stack `count` full-width rows of `row_height`.
pub fn list_layout(size: Size, count: usize, row_height: f64) -> Vec<LayoutItem> {
    (0..count)
        .map(|index| LayoutItem {
            position: Position::new(0.0, index as f64 * row_height),
            size: Size::new(size.width, row_height),
            index,
        })
        .collect()
}
