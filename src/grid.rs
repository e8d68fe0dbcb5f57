use std::fmt;
use std::iter;

use crate::cell::CORNER;
use crate::cell::CellState;
use crate::cell::DEAD;
use crate::cell::HORIZONTAL;
use crate::cell::PopulationDelta;
use crate::cell::TERMINATOR;
use crate::cell::VERTICAL;
use crate::error::Axis;
use crate::error::GridError;

/// Smallest accepted side length of the interior
pub const MIN_SIDE: usize = 1;

/// Largest accepted side length of the interior
pub const MAX_SIDE: usize = 255;

/// A grid of cells stored as the text it renders to.
///
/// # Layout
/// Each row is `stride = width + 3` bytes long: a left border, `width` interior cells, a right
/// border and a line terminator. There are `height + 2` rows, the first and last being border
/// rows. For a 3x2 grid with the middle cell of the first row alive:
///
/// ```notrust
/// +---+
/// | o |
/// |   |
/// +---+
/// ```
///
/// Interior cell `(x, y)` with `x` in `[1, width]` and `y` in `[1, height]` lives at byte
/// `y * stride + x`. Border and terminator bytes are written once, in [`GridBuffer::create`], and
/// never again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    width: usize,
    height: usize,

    /// The encoded grid. Every byte is one of the ASCII markers in [`crate::cell`].
    surface: Vec<u8>,
}

fn check_side(axis: Axis, got: usize) -> Result<(), GridError> {
    if (MIN_SIDE..=MAX_SIDE).contains(&got) {
        Ok(())
    } else {
        Err(GridError::InvalidDimension {
            axis,
            got,
            min: MIN_SIDE,
            max: MAX_SIDE,
        })
    }
}

impl GridBuffer {
    /// Create a grid whose interior is `width` by `height` dead cells.
    pub fn create(width: usize, height: usize) -> Result<Self, GridError> {
        check_side(Axis::Width, width)?;
        check_side(Axis::Height, height)?;

        let stride = width + 3;
        let len = stride * (height + 2);
        let mut surface = Self::allocate(len)?;

        for y in 0..height + 2 {
            if y == 0 || y == height + 1 {
                surface.push(CORNER);
                surface.extend(iter::repeat_n(HORIZONTAL, width));
                surface.push(CORNER);
            } else {
                surface.push(VERTICAL);
                surface.extend(iter::repeat_n(DEAD, width));
                surface.push(VERTICAL);
            }

            surface.push(TERMINATOR);
        }

        debug_assert_eq!(surface.len(), len);

        Ok(Self {
            width,
            height,
            surface,
        })
    }

    /// Allocate a second buffer of identical size and contents. This is the read side of a
    /// double buffered step.
    pub fn shadow(&self) -> Result<Self, GridError> {
        let mut surface = Self::allocate(self.surface.len())?;
        surface.extend_from_slice(&self.surface);

        Ok(Self {
            width: self.width,
            height: self.height,
            surface,
        })
    }

    fn allocate(len: usize) -> Result<Vec<u8>, GridError> {
        let mut surface = Vec::new();
        surface
            .try_reserve_exact(len)
            .map_err(|source| GridError::Allocation { bytes: len, source })?;

        Ok(surface)
    }

    /// Number of bytes per row, terminator included
    pub fn stride(&self) -> usize {
        self.width + 3
    }

    /// `(width, height)` of the interior
    pub fn interior_bounds(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Byte index of interior cell `(x, y)`.
    ///
    /// Panics if `(x, y)` is not an interior cell. Callers are expected to clamp coordinates
    /// beforehand, see [`crate::cursor::clamp_position`].
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!((1..=self.width).contains(&x), "x is out of bounds");
        assert!((1..=self.height).contains(&y), "y is out of bounds");

        y * self.stride() + x
    }

    pub fn get_cell(&self, x: usize, y: usize) -> CellState {
        CellState::from_byte(self.surface[self.index(x, y)])
    }

    /// Write `state` to `(x, y)`, returning how the population changed.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> PopulationDelta {
        let i = self.index(x, y);
        let prev = CellState::from_byte(self.surface[i]);

        self.surface[i] = state.to_byte();

        prev.delta(state)
    }

    /// Flip `(x, y)` and return its new state. The population delta is `+1` if the new state is
    /// alive and `-1` otherwise.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> CellState {
        let next = self.get_cell(x, y).toggled();
        self.set_cell(x, y, next);

        next
    }

    /// The whole encoded surface, borders and terminators included. Printing this verbatim
    /// draws the grid.
    pub fn render_text(&self) -> &str {
        debug_assert!(self.surface.is_ascii());

        // SAFETY: the surface is only ever written with the ASCII markers of `crate::cell`, either
        // in `create` or through `CellState::to_byte`, or copied from another `GridBuffer`.
        unsafe { std::str::from_utf8_unchecked(&self.surface) }
    }

    /// The raw bytes of the surface
    pub fn as_bytes(&self) -> &[u8] {
        &self.surface
    }

    /// Overwrite this buffer with the contents of `other`, borders included.
    ///
    /// Panics if the buffers differ in size.
    pub fn copy_from(&mut self, other: &GridBuffer) {
        assert_eq!(
            self.interior_bounds(),
            other.interior_bounds(),
            "grid buffers differ in size"
        );

        self.surface.copy_from_slice(&other.surface);
    }

    /// Count alive cells by scanning the whole interior. Population bookkeeping never uses this,
    /// it exists to check the bookkeeping.
    pub fn population(&self) -> usize {
        (1..=self.height)
            .flat_map(|y| (1..=self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get_cell(x, y).is_alive())
            .count()
    }
}

impl fmt::Display for GridBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render_text())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cell::ALIVE;

    #[test]
    fn create_small_layout() {
        let grid = GridBuffer::create(3, 2).unwrap();

        assert_eq!(grid.stride(), 6);
        assert_eq!(grid.as_bytes().len(), 6 * 4);
        assert_eq!(grid.render_text(), "+---+\n|   |\n|   |\n+---+\n");
    }

    #[test]
    fn create_single_cell() {
        let grid = GridBuffer::create(1, 1).unwrap();

        assert_eq!(grid.render_text(), "+-+\n| |\n+-+\n");
        assert_eq!(grid.get_cell(1, 1), CellState::Dead);
    }

    #[test]
    fn create_rejects_bad_sides() {
        for (w, h) in [(0, 1), (1, 0), (256, 1), (1, 256), (0, 0)] {
            let res = GridBuffer::create(w, h);

            assert!(
                matches!(res, Err(GridError::InvalidDimension { .. })),
                "expected {w}x{h} to be rejected"
            );
        }
    }

    #[test]
    fn invalid_dimension_names_the_axis() {
        let err = GridBuffer::create(10, 300).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Value provided for height (300) is not in the range 1 - 255"
        );
    }

    #[test]
    fn index_matches_stride() {
        let grid = GridBuffer::create(4, 3).unwrap();

        assert_eq!(grid.index(1, 1), 8);
        assert_eq!(grid.index(4, 3), 3 * 7 + 4);
    }

    #[test]
    #[should_panic(expected = "x is out of bounds")]
    fn index_rejects_border_column() {
        let grid = GridBuffer::create(4, 3).unwrap();
        grid.index(0, 1);
    }

    #[test]
    #[should_panic(expected = "y is out of bounds")]
    fn index_rejects_border_row() {
        let grid = GridBuffer::create(4, 3).unwrap();
        grid.index(1, 4);
    }

    #[test]
    fn set_cell_reports_deltas() {
        let mut grid = GridBuffer::create(3, 3).unwrap();

        assert_eq!(grid.set_cell(2, 2, CellState::Alive), 1);
        assert_eq!(grid.set_cell(2, 2, CellState::Alive), 0);
        assert_eq!(grid.as_bytes()[grid.index(2, 2)], ALIVE);
        assert_eq!(grid.set_cell(2, 2, CellState::Dead), -1);
        assert_eq!(grid.set_cell(2, 2, CellState::Dead), 0);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut grid = GridBuffer::create(3, 2).unwrap();

        assert_eq!(grid.toggle_cell(2, 1), CellState::Alive);
        assert_eq!(grid.render_text(), "+---+\n| o |\n|   |\n+---+\n");
        assert_eq!(grid.population(), 1);

        assert_eq!(grid.toggle_cell(2, 1), CellState::Dead);
        assert_eq!(grid.render_text(), "+---+\n|   |\n|   |\n+---+\n");
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn shadow_is_an_identical_copy() {
        let mut grid = GridBuffer::create(5, 4).unwrap();
        grid.toggle_cell(5, 4);

        let shadow = grid.shadow().unwrap();

        assert_eq!(shadow, grid);
    }

    #[test]
    #[should_panic(expected = "grid buffers differ in size")]
    fn copy_from_rejects_mismatched_sizes() {
        let mut a = GridBuffer::create(5, 4).unwrap();
        let b = GridBuffer::create(4, 5).unwrap();

        a.copy_from(&b);
    }
}
