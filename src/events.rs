#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Move the edit cursor by one cell
    Move(Direction),

    /// Flip the cell under the cursor
    Toggle,

    /// Leave editing and start the simulation
    Start,

    /// Advance the simulation by one generation right away
    Step,

    /// Draw the screen again without changing anything, e.g. after a resize
    Redraw,

    /// Exit the application
    Exit,
}
