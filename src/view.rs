use crate::cell::CellState;
use crate::grid::GridBuffer;

/// Read access to a grid of cells, for whatever draws it.
///
/// A text renderer only needs [`CellView::render_text`]. Renderers that paint cells themselves
/// go through [`CellView::get_cell`] and never see the text encoding.
pub trait CellView {
    /// `(width, height)` of the interior. Valid coordinates are `[1, width] x [1, height]`.
    fn interior_bounds(&self) -> (usize, usize);

    fn get_cell(&self, x: usize, y: usize) -> CellState;

    fn render_text(&self) -> &str;
}

impl CellView for GridBuffer {
    fn interior_bounds(&self) -> (usize, usize) {
        GridBuffer::interior_bounds(self)
    }

    fn get_cell(&self, x: usize, y: usize) -> CellState {
        GridBuffer::get_cell(self, x, y)
    }

    fn render_text(&self) -> &str {
        GridBuffer::render_text(self)
    }
}

/// Coordinates of every alive cell of `view`, row by row.
pub fn alive_cells<V: CellView + ?Sized>(view: &V) -> Vec<(usize, usize)> {
    let (width, height) = view.interior_bounds();

    (1..=height)
        .flat_map(|y| (1..=width).map(move |x| (x, y)))
        .filter(|&(x, y)| view.get_cell(x, y).is_alive())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alive_cells_through_a_trait_object() {
        let mut grid = GridBuffer::create(4, 3).unwrap();
        grid.toggle_cell(4, 1);
        grid.toggle_cell(1, 3);

        let view: &dyn CellView = &grid;

        assert_eq!(alive_cells(view), [(4, 1), (1, 3)]);
        assert_eq!(view.render_text(), "+----+\n|   o|\n|    |\n|o   |\n+----+\n");
    }
}
