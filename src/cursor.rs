use crate::events::Direction;

/// Clamp `(x, y)` into the interior `[1, width] x [1, height]`.
pub fn clamp_position(x: usize, y: usize, (width, height): (usize, usize)) -> (usize, usize) {
    (x.clamp(1, width), y.clamp(1, height))
}

/// Position of the edit cursor. Always on an interior cell, never on the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: usize,
    y: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

impl Cursor {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Move one cell in `direction`. Moves that would leave the interior are ignored.
    pub fn step(&mut self, direction: Direction, bounds: (usize, usize)) {
        let (x, y) = match direction {
            Direction::Left => (self.x.saturating_sub(1), self.y),
            Direction::Right => (self.x + 1, self.y),
            Direction::Up => (self.x, self.y.saturating_sub(1)),
            Direction::Down => (self.x, self.y + 1),
        };

        (self.x, self.y) = clamp_position(x, y, bounds);
    }
}
